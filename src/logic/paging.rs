/// What: Decide whether another page may exist after a fetch.
///
/// Inputs:
/// - `count`: Number of products on the page just fetched
/// - `page_size`: Configured page size
///
/// Output:
/// - `true` only for a non-empty, exactly full page.
///
/// Details:
/// - Heuristic: no total count is consulted. When the upstream total is an
///   exact multiple of the page size the last full page still reports `true`,
///   and the following fetch comes back empty.
#[must_use]
pub const fn has_more(count: usize, page_size: u32) -> bool {
    count > 0 && count == page_size as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Only a full, non-empty page signals more
    ///
    /// - Input: Counts 0, short, full, over-full
    /// - Output: true only for the full page
    fn has_more_only_for_full_pages() {
        assert!(!has_more(0, 24));
        assert!(!has_more(23, 24));
        assert!(has_more(24, 24));
        assert!(!has_more(25, 24));
        assert!(!has_more(0, 0));
    }
}
