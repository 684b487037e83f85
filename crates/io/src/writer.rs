//! Solution writer.

use std::fs;
use std::fmt::Write as _;
use std::path::Path;

use sprintplan_core::ScheduledRelease;

use crate::error::WriteError;

/// Render a schedule as solution text.
///
/// First line is the number of scheduled releases, then one `start_day
/// end_day` line per release in selector order. Every line ends with a
/// newline; an empty schedule renders as exactly `"0\n"`.
pub fn render_solution(schedule: &[ScheduledRelease]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", schedule.len());
    for release in schedule {
        let _ = writeln!(out, "{} {}", release.start_day, release.end_day);
    }
    out
}

/// Write the schedule to the file at `path`, replacing any existing content.
pub fn write_solution(
    schedule: &[ScheduledRelease],
    path: impl AsRef<Path>,
) -> Result<(), WriteError> {
    let path = path.as_ref();
    tracing::debug!("Writing {} scheduled releases to {}", schedule.len(), path.display());
    fs::write(path, render_solution(schedule))?;
    tracing::info!("Completed writing the solution");
    Ok(())
}
