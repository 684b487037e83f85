//! Line-oriented file I/O for sprintplan.
//!
//! The reader turns a releases file into `ReleaseRequest`s; the writer
//! serializes the selected schedule. Both are collaborators around the pure
//! selector in `sprintplan-core`.

#![warn(missing_docs)]

mod error;
mod reader;
mod writer;

pub use error::{ReadError, WriteError};
pub use reader::{parse_releases, read_releases};
pub use writer::{render_solution, write_solution};
