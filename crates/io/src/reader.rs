//! Release-file reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sprintplan_core::ReleaseRequest;

use crate::error::ReadError;

/// Read releases from the file at `path`.
///
/// See [`parse_releases`] for the record format.
pub fn read_releases(path: impl AsRef<Path>) -> Result<Vec<ReleaseRequest>, ReadError> {
    let path = path.as_ref();
    tracing::debug!("Opening {} to read releases", path.display());
    let file = File::open(path)?;
    let releases = parse_releases(BufReader::new(file))?;
    tracing::info!("Completed reading {} releases", releases.len());
    Ok(releases)
}

/// Parse releases from a line-oriented source.
///
/// One record per line: exactly two whitespace-separated positive integers,
/// `start_day duration`. Surrounding whitespace is tolerated and blank lines
/// are skipped. The first malformed line aborts the read; no partial list is
/// returned.
pub fn parse_releases<R: BufRead>(reader: R) -> Result<Vec<ReleaseRequest>, ReadError> {
    let mut releases = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        let fields = (tokens.next(), tokens.next(), tokens.next());
        let (Some(start_day), Some(duration), None) = fields else {
            tracing::error!("Unexpected line format: {trimmed}");
            return Err(ReadError::InvalidRecord {
                line_number,
                content: line,
            });
        };
        let (Ok(start_day), Ok(duration)) = (start_day.parse::<u32>(), duration.parse::<u32>())
        else {
            tracing::error!("Unexpected line format: {trimmed}");
            return Err(ReadError::InvalidRecord {
                line_number,
                content: line,
            });
        };

        let release = ReleaseRequest::new(start_day, duration)
            .map_err(|source| ReadError::InvalidRelease {
                line_number,
                source,
            })?;
        releases.push(release);
    }
    tracing::debug!("Read {} releases", releases.len());
    Ok(releases)
}
