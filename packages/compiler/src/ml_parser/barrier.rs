//! Barrier Scanner
//!
//! Finds where the current run of text stops: the earliest occurrence of any
//! of a set of literal markers.

/// Smallest index at which any of `markers` occurs in `input`.
///
/// When two markers start at the same index the caller cannot tell which one
/// matched; converters that care re-probe with `starts_with` at that index.
pub fn lowest_index(input: &str, markers: &[&str]) -> Option<usize> {
    debug_assert!(
        markers.iter().all(|marker| !marker.is_empty()),
        "empty barrier marker"
    );
    debug_assert!(
        markers
            .iter()
            .enumerate()
            .all(|(i, marker)| !markers[..i].contains(marker)),
        "duplicate barrier marker"
    );

    markers.iter().filter_map(|marker| input.find(marker)).min()
}
