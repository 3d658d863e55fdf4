use tracing::debug;

use crate::models::{ActiveEntry, RangeStrategy};

/// Three-letter abbreviations indexed by Sunday-first day.
pub const DAY_ABBREVIATIONS: [&str; 7] = ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"];

pub fn day_abbreviation(day: u8) -> &'static str {
    DAY_ABBREVIATIONS.get(day as usize).copied().unwrap_or_default()
}

/// Finds the single circular run covered by `days`, returned as
/// `(first, last)`. `None` when the days are empty or split into several runs.
pub fn contiguous_run(days: &[u8]) -> Option<(u8, u8)> {
    let mut open = [false; 7];
    for &day in days {
        if let Some(slot) = open.get_mut(day as usize) {
            *slot = true;
        }
    }

    if open.iter().all(|&o| o) {
        return Some((0, 6));
    }

    let mut run_starts = (0u8..7).filter(|&d| open[d as usize] && !open[((d + 6) % 7) as usize]);
    let start = run_starts.next()?;
    if run_starts.next().is_some() {
        return None;
    }

    let mut end = start;
    while open[((end + 1) % 7) as usize] {
        end = (end + 1) % 7;
    }

    Some((start, end))
}

fn day_span(entries: &[ActiveEntry], strategy: RangeStrategy) -> Option<(u8, u8)> {
    let first = entries.first()?.day;
    let last = entries.last()?.day;

    match strategy {
        RangeStrategy::SortedBounds => Some((first, last)),
        RangeStrategy::ContiguousRun => {
            let days: Vec<u8> = entries.iter().map(|entry| entry.day).collect();
            contiguous_run(&days).or(Some((first, last)))
        }
    }
}

/// Compact label for a week whose active days all share `start`-`end`.
///
/// `entries` must be sorted by day, which `normalize_entries` guarantees.
pub fn build_range_label(entries: &[ActiveEntry], start: &str, end: &str, strategy: RangeStrategy) -> String {
    let Some((first, last)) = day_span(entries, strategy) else {
        return String::new();
    };

    let label = if entries.len() == 1 {
        format!("{} {}-{}", day_abbreviation(first), start, end)
    } else {
        format!("{}-{} {}-{}", day_abbreviation(first), day_abbreviation(last), start, end)
    };

    debug!("Built range label '{}' using {:?}", label, strategy);
    label
}
