use crate::models::ActiveEntry;

/// The start/end pair every active entry shares, if there is one.
pub fn shared_hours(entries: &[ActiveEntry]) -> Option<(&str, &str)> {
    let (first, rest) = entries.split_first()?;
    rest.iter()
        .all(|entry| entry.start == first.start && entry.end == first.end)
        .then_some((first.start.as_str(), first.end.as_str()))
}

/// True when all entries open and close at the same `HH:MM`.
///
/// Entries carry already-formatted times, so `09:00:00` and `09:00` compare
/// equal here. An empty set has no hours to share and is not homogeneous.
pub fn is_homogeneous(entries: &[ActiveEntry]) -> bool {
    shared_hours(entries).is_some()
}
