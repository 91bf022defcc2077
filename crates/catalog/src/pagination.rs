//! Page-number window for a pagination control.
//!
//! The window always shows the first and the last page plus up to three pages
//! around the current one, separated by gap markers where pages are skipped:
//!
//! ```text
//! current = 5, total = 10  =>  1 … 4 5 6 … 10
//! ```

/// A single entry of the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    Page(u32),
    /// Gap between page 1 and the window
    LeadingGap,
    /// Gap between the window and the last page
    TrailingGap,
}

impl PageToken {
    pub fn page(&self) -> Option<u32> {
        match self {
            PageToken::Page(page) => Some(*page),
            PageToken::LeadingGap | PageToken::TrailingGap => None,
        }
    }
}

/// `ceil(count / limit)`, never less than one page.
pub fn total_pages(count: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    let pages = count.div_ceil(u64::from(limit));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

pub fn page_window(current: u32, total: u32) -> Vec<PageToken> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut tokens = vec![PageToken::Page(1)];

    let range_start = current.saturating_sub(1).max(2);
    let range_end = current.saturating_add(1).min(total - 1);

    if range_start > 2 {
        tokens.push(PageToken::LeadingGap);
    }

    tokens.extend((range_start..=range_end).map(PageToken::Page));

    if range_end < total.saturating_sub(1) {
        tokens.push(PageToken::TrailingGap);
    }

    if total > 1 {
        tokens.push(PageToken::Page(total));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use super::PageToken::{LeadingGap as L, Page as P, TrailingGap as T};

    #[rstest]
    #[case(5, 10, vec![P(1), L, P(4), P(5), P(6), T, P(10)])]
    #[case(1, 3, vec![P(1), P(2), P(3)])]
    #[case(1, 1, vec![P(1)])]
    #[case(1, 2, vec![P(1), P(2)])]
    #[case(2, 2, vec![P(1), P(2)])]
    #[case(1, 10, vec![P(1), P(2), T, P(10)])]
    #[case(10, 10, vec![P(1), L, P(9), P(10)])]
    #[case(3, 10, vec![P(1), P(2), P(3), P(4), T, P(10)])]
    #[case(8, 10, vec![P(1), L, P(7), P(8), P(9), P(10)])]
    fn test_page_window(
        #[case] current: u32,
        #[case] total: u32,
        #[case] expected: Vec<PageToken>,
    ) {
        assert_eq!(page_window(current, total), expected);
    }

    #[rstest]
    #[case(0, 0, vec![P(1)])]
    #[case(0, 5, vec![P(1), P(2), T, P(5)])]
    #[case(12, 10, vec![P(1), L, P(9), P(10)])]
    fn test_page_window_out_of_range_inputs(
        #[case] current: u32,
        #[case] total: u32,
        #[case] expected: Vec<PageToken>,
    ) {
        assert_eq!(page_window(current, total), expected);
    }

    #[test]
    fn test_page_window_shape_for_all_pages() {
        for total in 1..=40u32 {
            for current in 1..=total {
                let tokens = page_window(current, total);

                assert_eq!(tokens.first(), Some(&P(1)));
                if total > 1 {
                    assert_eq!(tokens.last(), Some(&P(total)));
                }

                let pages: Vec<u32> = tokens.iter().filter_map(PageToken::page).collect();
                assert!(pages.windows(2).all(|w| w[0] < w[1]), "{tokens:?}");
                assert!(pages.contains(&current));

                let leading = tokens.iter().filter(|t| **t == L).count();
                let trailing = tokens.iter().filter(|t| **t == T).count();
                assert!(leading <= 1 && trailing <= 1);

                // A gap marker always stands for at least one skipped page
                for (i, token) in tokens.iter().enumerate() {
                    if token.page().is_none() {
                        let before = tokens[i - 1].page().unwrap();
                        let after = tokens[i + 1].page().unwrap();
                        assert!(after - before > 1, "{tokens:?}");
                    }
                }
            }
        }
    }

    #[rstest]
    #[case(45, 20, 3)]
    #[case(40, 20, 2)]
    #[case(1, 20, 1)]
    #[case(0, 20, 1)]
    #[case(10, 0, 1)]
    fn test_total_pages(#[case] count: u64, #[case] limit: u32, #[case] expected: u32) {
        assert_eq!(total_pages(count, limit), expected);
    }
}
