//! Page window computation.
//!
//! Produces the truncated sequence of page numbers a pagination control
//! shows, with ellipsis markers standing in for skipped runs.

use serde::{Deserialize, Serialize};

/// Page counts up to this value are shown in full.
pub const MAX_FULL_WINDOW: usize = 7;

/// Number of pages shown at the leading or trailing edge of a truncated window.
const EDGE_RUN: usize = 5;

/// A single entry of a page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PageToken {
    /// A clickable page number (1-based).
    Page(usize),
    /// A gap of one or more skipped pages.
    Ellipsis,
}

impl PageToken {
    /// The page number, or `None` for an ellipsis.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(n) => Some(*n),
            PageToken::Ellipsis => None,
        }
    }

    /// Check if this token is an ellipsis.
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl std::fmt::Display for PageToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{}", n),
            PageToken::Ellipsis => f.write_str("…"),
        }
    }
}

/// Compute the page window for `current` out of `total` pages.
///
/// - `total <= 7`: every page.
/// - `current <= 4`: `1 2 3 4 5 … total`.
/// - `current >= total - 3`: `1 … total-4 total-3 total-2 total-1 total`.
/// - otherwise: `1 … current-1 current current+1 … total`.
///
/// Out-of-range input is clamped: `total` to at least 1, `current` into
/// `1..=total`.
pub fn compute_window(current: usize, total: usize) -> Vec<PageToken> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let tokens: Vec<PageToken> = if total <= MAX_FULL_WINDOW {
        (1..=total).map(PageToken::Page).collect()
    } else if current <= 4 {
        let mut tokens: Vec<_> = (1..=EDGE_RUN).map(PageToken::Page).collect();
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total));
        tokens
    } else if current >= total - 3 {
        let mut tokens = vec![PageToken::Page(1), PageToken::Ellipsis];
        tokens.extend((total + 1 - EDGE_RUN..=total).map(PageToken::Page));
        tokens
    } else {
        vec![
            PageToken::Page(1),
            PageToken::Ellipsis,
            PageToken::Page(current - 1),
            PageToken::Page(current),
            PageToken::Page(current + 1),
            PageToken::Ellipsis,
            PageToken::Page(total),
        ]
    };

    debug_assert!(is_well_formed(&tokens, total));
    tokens
}

/// Pages increase strictly, never two ellipses in a row, and every ellipsis
/// hides at least one page.
fn is_well_formed(tokens: &[PageToken], total: usize) -> bool {
    let mut last_page = 0;
    let mut pending_gap = false;
    for token in tokens {
        match token {
            PageToken::Page(n) => {
                if *n <= last_page || *n > total {
                    return false;
                }
                if pending_gap && *n == last_page + 1 {
                    return false;
                }
                last_page = *n;
                pending_gap = false;
            }
            PageToken::Ellipsis => {
                if pending_gap || last_page == 0 {
                    return false;
                }
                pending_gap = true;
            }
        }
    }
    !pending_gap && last_page == total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(tokens: &[PageToken]) -> String {
        tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_small_totals_show_every_page() {
        assert_eq!(pages(&compute_window(1, 1)), "1");
        assert_eq!(pages(&compute_window(3, 7)), "1 2 3 4 5 6 7");
    }

    #[test]
    fn test_boundary_between_leading_and_middle() {
        assert_eq!(pages(&compute_window(4, 20)), "1 2 3 4 5 … 20");
        assert_eq!(pages(&compute_window(5, 20)), "1 … 4 5 6 … 20");
    }

    #[test]
    fn test_boundary_between_middle_and_trailing() {
        assert_eq!(pages(&compute_window(16, 20)), "1 … 15 16 17 … 20");
        assert_eq!(pages(&compute_window(17, 20)), "1 … 16 17 18 19 20");
    }

    #[test]
    fn test_eight_pages() {
        assert_eq!(pages(&compute_window(4, 8)), "1 2 3 4 5 … 8");
        assert_eq!(pages(&compute_window(5, 8)), "1 … 4 5 6 7 8");
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(compute_window(0, 20), compute_window(1, 20));
        assert_eq!(compute_window(99, 20), compute_window(20, 20));
        assert_eq!(compute_window(3, 0), vec![PageToken::Page(1)]);
    }

    #[test]
    fn test_token_serde_shape() {
        let json = serde_json::to_string(&[PageToken::Page(3), PageToken::Ellipsis]).unwrap();
        assert_eq!(json, r#"[{"kind":"page","value":3},{"kind":"ellipsis"}]"#);
    }
}
