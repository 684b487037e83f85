//! Greedy release selection.
//!
//! Both scheduling policies share the same feasibility filter and ordering;
//! they differ only in the sweep state that decides accept/reject.

use std::cmp::Reverse;

use crate::release::{ReleaseRequest, ScheduledRelease, SprintConfig};

/// Per-policy sweep state, one transition rule each.
enum SweepState {
    /// Accept a request unchanged iff it starts after the last accepted end.
    Strict {
        /// End day of the last accepted release, 0 when none accepted yet
        previous_end_day: u32,
    },
    /// Shift a request forward to the earliest free day; drop it if the
    /// shifted window overruns the sprint.
    Postponed {
        /// First day not claimed by an accepted release. Held as u64 so the
        /// day after a release ending on `u32::MAX` is still representable.
        earliest_start_day: u64,
    },
}

impl SweepState {
    fn new(allow_postponement: bool) -> Self {
        if allow_postponement {
            Self::Postponed {
                earliest_start_day: 1,
            }
        } else {
            Self::Strict {
                previous_end_day: 0,
            }
        }
    }

    fn try_accept(
        &mut self,
        request: &ReleaseRequest,
        duration_days: u32,
    ) -> Option<ScheduledRelease> {
        match self {
            Self::Strict { previous_end_day } => {
                if request.start_day() <= *previous_end_day {
                    return None;
                }
                let scheduled =
                    ScheduledRelease::from_start(request.start_day(), request.duration());
                *previous_end_day = scheduled.end_day;
                Some(scheduled)
            }
            Self::Postponed { earliest_start_day } => {
                // Shifted-window arithmetic in u64: the shifted end can
                // exceed u32 range even for requests that passed the filter.
                let start_day = u64::from(request.start_day()).max(*earliest_start_day);
                let end_day = start_day + u64::from(request.duration()) - 1;
                if end_day > u64::from(duration_days) {
                    return None;
                }
                *earliest_start_day = end_day + 1;
                Some(ScheduledRelease::from_start(
                    start_day as u32,
                    request.duration(),
                ))
            }
        }
    }
}

/// Select the set of releases to verify within the sprint.
///
/// Requests whose unshifted window already overruns the sprint are excluded
/// up front, in both modes; postponement never resurrects them. Survivors
/// are swept in (start day ascending, duration descending) order and each is
/// accepted or dropped according to the configured policy. The returned
/// schedule is in acceptance order.
pub fn select(requests: &[ReleaseRequest], config: &SprintConfig) -> Vec<ScheduledRelease> {
    tracing::info!(
        "Selecting releases, postponement allowed: {}",
        config.allow_postponement
    );

    let mut feasible: Vec<&ReleaseRequest> = requests
        .iter()
        .filter(|request| request.fits_within(config.duration_days))
        .collect();
    tracing::debug!(
        "Found {} releases possible to verify within a sprint of {} days",
        feasible.len(),
        config.duration_days
    );

    feasible.sort_by_key(|request| (request.start_day(), Reverse(request.duration())));

    let mut state = SweepState::new(config.allow_postponement);
    let mut selected = Vec::new();
    for request in feasible {
        match state.try_accept(request, config.duration_days) {
            Some(scheduled) => {
                tracing::debug!(
                    "Selected release starting day {}, ending day {}",
                    scheduled.start_day,
                    scheduled.end_day
                );
                selected.push(scheduled);
            }
            None => {
                tracing::debug!(
                    "Skipped release starting day {} with duration {}",
                    request.start_day(),
                    request.duration()
                );
            }
        }
    }

    tracing::info!("Number of selected releases: {}", selected.len());
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requests(pairs: &[(u32, u32)]) -> Vec<ReleaseRequest> {
        pairs
            .iter()
            .map(|&(start_day, duration)| ReleaseRequest::new(start_day, duration).unwrap())
            .collect()
    }

    fn windows(schedule: &[ScheduledRelease]) -> Vec<(u32, u32)> {
        schedule
            .iter()
            .map(|release| (release.start_day, release.end_day))
            .collect()
    }

    fn strict(duration_days: u32) -> SprintConfig {
        SprintConfig {
            duration_days,
            allow_postponement: false,
        }
    }

    fn postponed(duration_days: u32) -> SprintConfig {
        SprintConfig {
            duration_days,
            allow_postponement: true,
        }
    }

    fn assert_disjoint_and_in_bounds(schedule: &[ScheduledRelease], duration_days: u32) {
        for release in schedule {
            assert!(release.start_day >= 1);
            assert!(release.end_day <= duration_days);
        }
        for pair in schedule.windows(2) {
            assert!(pair[0].end_day < pair[1].start_day, "windows overlap: {:?}", pair);
        }
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert!(select(&[], &strict(10)).is_empty());
        assert!(select(&[], &postponed(10)).is_empty());
    }

    #[test]
    fn regular_case_strict() {
        let input = requests(&[
            (1, 1),
            (2, 1),
            (3, 1),
            (9, 1),
            (10, 4),
            (10, 2),
            (9, 5),
            (10, 3),
            (4, 5),
        ]);
        let schedule = select(&input, &strict(10));
        assert_eq!(
            windows(&schedule),
            vec![(1, 1), (2, 2), (3, 3), (4, 8), (9, 9)]
        );
        assert_disjoint_and_in_bounds(&schedule, 10);
    }

    #[test]
    fn regular_case_with_postponement() {
        let input = requests(&[
            (1, 1),
            (2, 1),
            (3, 1),
            (9, 1),
            (10, 4),
            (10, 2),
            (9, 5),
            (10, 3),
            (4, 5),
        ]);
        let schedule = select(&input, &postponed(10));
        assert_eq!(
            windows(&schedule),
            vec![(1, 1), (2, 2), (3, 3), (4, 8), (9, 9)]
        );
        assert_disjoint_and_in_bounds(&schedule, 10);
    }

    #[test]
    fn same_day_ties_prefer_longest_strict() {
        let input = requests(&[(1, 1), (1, 3), (1, 2)]);
        assert_eq!(windows(&select(&input, &strict(10))), vec![(1, 3)]);
    }

    #[test]
    fn same_day_ties_all_fit_with_postponement() {
        let input = requests(&[(1, 1), (1, 3), (1, 2)]);
        assert_eq!(
            windows(&select(&input, &postponed(10))),
            vec![(1, 3), (4, 5), (6, 6)]
        );
    }

    #[test]
    fn duplicate_single_day_requests_accept_one() {
        let input = requests(&[(1, 1), (1, 1), (1, 1)]);
        assert_eq!(windows(&select(&input, &strict(10))), vec![(1, 1)]);
    }

    #[test]
    fn single_release_spans_entire_sprint() {
        let input = requests(&[(1, 10)]);
        assert_eq!(windows(&select(&input, &strict(10))), vec![(1, 10)]);
        assert_eq!(windows(&select(&input, &postponed(10))), vec![(1, 10)]);
    }

    #[test]
    fn release_on_the_last_day() {
        let input = requests(&[(10, 1)]);
        assert_eq!(windows(&select(&input, &strict(10))), vec![(10, 10)]);
        assert_eq!(windows(&select(&input, &postponed(10))), vec![(10, 10)]);
    }

    #[test]
    fn back_to_back_chain_just_fits() {
        let input = requests(&[(1, 2), (3, 2), (5, 5), (10, 1)]);
        let expected = vec![(1, 2), (3, 4), (5, 9), (10, 10)];
        assert_eq!(windows(&select(&input, &strict(10))), expected);
        assert_eq!(windows(&select(&input, &postponed(10))), expected);
    }

    #[test]
    fn overflowing_requests_rejected_in_both_modes() {
        let input = requests(&[(9, 3), (5, 7)]);
        assert!(select(&input, &strict(10)).is_empty());
        // The feasibility check uses the original start day, so postponement
        // never reconsiders a request that overflows unshifted.
        assert!(select(&input, &postponed(10)).is_empty());
    }

    #[test]
    fn near_max_duration_yields_empty_schedule() {
        let input = requests(&[(5, u32::MAX)]);
        assert!(select(&input, &strict(10)).is_empty());
        assert!(select(&input, &postponed(10)).is_empty());
    }

    #[test]
    fn sweep_handles_sprint_ending_at_u32_max() {
        let input = requests(&[(u32::MAX, 1), (u32::MAX, 1), (1, u32::MAX)]);
        let schedule = select(&input, &postponed(u32::MAX));
        assert_eq!(windows(&schedule), vec![(1, u32::MAX)]);
        assert_disjoint_and_in_bounds(&schedule, u32::MAX);

        // Two single-day requests on the last day: the sprint is full after
        // the first, the second must be dropped rather than wrap around.
        let input = requests(&[(u32::MAX, 1), (u32::MAX, 1)]);
        let schedule = select(&input, &postponed(u32::MAX));
        assert_eq!(windows(&schedule), vec![(u32::MAX, u32::MAX)]);
    }

    #[test]
    fn prefers_more_releases_over_one_long_release() {
        let input = requests(&[(9, 2), (3, 8), (1, 3)]);
        let expected = vec![(1, 3), (9, 10)];
        assert_eq!(windows(&select(&input, &strict(10))), expected);
        assert_eq!(windows(&select(&input, &postponed(10))), expected);
    }

    #[test]
    fn prefers_longest_when_counts_are_equal() {
        let input = requests(&[(9, 2), (3, 8)]);
        assert_eq!(windows(&select(&input, &strict(10))), vec![(3, 10)]);
        assert_eq!(windows(&select(&input, &postponed(10))), vec![(3, 10)]);
    }

    #[test]
    fn postponement_fits_an_extra_release() {
        let input = requests(&[(1, 2), (3, 3), (5, 3), (10, 1)]);
        assert_eq!(
            windows(&select(&input, &strict(10))),
            vec![(1, 2), (3, 5), (10, 10)]
        );
        assert_eq!(
            windows(&select(&input, &postponed(10))),
            vec![(1, 2), (3, 5), (6, 8), (10, 10)]
        );
    }

    #[test]
    fn postponement_never_selects_fewer_than_strict() {
        let inputs: Vec<Vec<ReleaseRequest>> = vec![
            requests(&[(1, 1), (2, 1), (3, 1), (9, 1), (10, 4), (10, 2), (9, 5), (10, 3), (4, 5)]),
            requests(&[(1, 1), (1, 3), (1, 2)]),
            requests(&[(1, 2), (3, 3), (5, 3), (10, 1)]),
            requests(&[(9, 3), (5, 7)]),
            requests(&[(2, 2), (2, 2), (2, 2), (7, 4)]),
        ];
        for input in inputs {
            let strict_count = select(&input, &strict(10)).len();
            let postponed_count = select(&input, &postponed(10)).len();
            assert!(postponed_count >= strict_count);
        }
    }

    #[test]
    fn duration_is_preserved_for_every_accepted_release() {
        let input = requests(&[(1, 1), (1, 3), (1, 2), (5, 4)]);
        let schedule = select(&input, &postponed(10));
        assert_eq!(windows(&schedule), vec![(1, 3), (4, 5), (6, 6), (7, 10)]);
        let granted: Vec<u32> = schedule.iter().map(|r| r.duration()).collect();
        assert_eq!(granted, vec![3, 2, 1, 4]);
    }
}
