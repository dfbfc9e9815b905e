//! Goal lines for coarser display intervals

use crate::interval::Interval;

/// Rescale a goal defined per `counter_interval` to one bucket of a chart page
/// displayed at `display_interval`.
///
/// Returns `None` (no goal line) when there is no goal, when the display
/// interval is not strictly coarser than the counter's, or for any pair outside
/// the table below. Months are approximated as 30 days; weekly goals are
/// divided by 7 with integer truncation before any scaling.
///
/// | counter -> display | factor |
/// |---|---|
/// | day -> week | x1 |
/// | day -> month | x1 |
/// | day -> year | x30 |
/// | week -> month | /7 |
/// | week -> year | /7 then x30 |
/// | month -> year | x1 |
pub fn project_goal(goal: u32, counter_interval: Interval, display_interval: Interval) -> Option<u32> {
    if goal == 0 || counter_interval >= display_interval || counter_interval == Interval::Lifetime {
        return None;
    }

    match (counter_interval, display_interval) {
        (Interval::Day, Interval::Week) | (Interval::Day, Interval::Month) => Some(goal),
        (Interval::Day, Interval::Year) => goal.checked_mul(30),
        (Interval::Week, Interval::Month) => Some(goal / 7),
        (Interval::Week, Interval::Year) => (goal / 7).checked_mul(30),
        (Interval::Month, Interval::Year) => Some(goal),
        _ => None,
    }
}
