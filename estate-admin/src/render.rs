//! Plain-text rendering of list screens.

use tabula::{Alignment, Column, PageToken, TableRow, TableView};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::prefs::ViewMode;

/// Width used for columns that don't specify one.
const DEFAULT_COLUMN_WIDTH: usize = 16;

/// Separator between cells.
const GAP: &str = "  ";

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

/// Truncate or pad `s` to exactly `width` display columns.
pub fn fit(s: &str, width: usize, align: Alignment) -> String {
    let s = truncate_to_width(s, width);
    let pad = width.saturating_sub(display_width(&s));
    match align {
        Alignment::Left => format!("{}{}", s, " ".repeat(pad)),
        Alignment::Right => format!("{}{}", " ".repeat(pad), s),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
        }
    }
}

fn column_width(column: &Column) -> usize {
    column
        .width
        .map(usize::from)
        .unwrap_or(DEFAULT_COLUMN_WIDTH)
        .max(1)
}

/// Checkbox glyph for a selection state.
pub fn checkbox(selected: bool, partial: bool) -> &'static str {
    if selected {
        "[x]"
    } else if partial {
        "[-]"
    } else {
        "[ ]"
    }
}

/// Render a page of rows in the given layout, followed by the pager.
pub fn render_page<T: TableRow>(view: &TableView<T>, columns: &[Column], mode: ViewMode) -> String {
    let mut out = match mode {
        ViewMode::Table => render_table(view, columns),
        ViewMode::Cards => render_cards(view, columns),
    };
    out.push_str(&render_footer(view));
    out
}

/// Render a page as a grid with a header row.
pub fn render_table<T: TableRow>(view: &TableView<T>, columns: &[Column]) -> String {
    let mut out = String::new();

    // Header
    let mut header = vec![format!(
        "{:>3} {}",
        "#",
        checkbox(view.all_selected, view.some_selected)
    )];
    for column in columns {
        let marker = match &view.sort {
            Some(sort) if sort.column == column.key => format!(" {}", sort.direction.marker()),
            _ => String::new(),
        };
        let label = format!("{}{}", column.label, marker);
        header.push(fit(&label, column_width(column), column.align));
    }
    let header = header.join(GAP);
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&"─".repeat(display_width(header.trim_end())));
    out.push('\n');

    if view.is_empty() {
        out.push_str("  (no rows on this page)\n");
        return out;
    }

    for (index, item) in view.rows.iter().enumerate() {
        let mut cells = vec![format!("{:>3} {}", index + 1, checkbox(item.selected, false))];
        for column in columns {
            let value = item.row.field(&column.key).unwrap_or_default().to_string();
            cells.push(fit(&value, column_width(column), column.align));
        }
        out.push_str(cells.join(GAP).trim_end());
        out.push('\n');
    }
    out
}

/// Render a page as stacked cards, one field per line.
pub fn render_cards<T: TableRow>(view: &TableView<T>, columns: &[Column]) -> String {
    if view.is_empty() {
        return "  (no rows on this page)\n".to_string();
    }

    let label_width = columns
        .iter()
        .map(|c| display_width(&c.label))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (index, item) in view.rows.iter().enumerate() {
        out.push_str(&format!("{} {}.\n", checkbox(item.selected, false), index + 1));
        for column in columns {
            let value = item.row.field(&column.key).unwrap_or_default().to_string();
            out.push_str(&format!(
                "    {}  {}\n",
                fit(&column.label, label_width, Alignment::Left),
                value
            ));
        }
    }
    out
}

/// Render the page window, e.g. `« ‹ 1 … 9 [10] 11 … 20 › »`.
pub fn render_window(tokens: &[PageToken], current: usize, can_prev: bool, can_next: bool) -> String {
    let mut parts = vec![
        if can_prev { "«" } else { " " }.to_string(),
        if can_prev { "‹" } else { " " }.to_string(),
    ];
    for token in tokens {
        parts.push(match token {
            PageToken::Page(n) if *n == current => format!("[{}]", n),
            other => other.to_string(),
        });
    }
    parts.push(if can_next { "›" } else { " " }.to_string());
    parts.push(if can_next { "»" } else { " " }.to_string());
    parts.join(" ")
}

/// Render the pager line and the selection summary.
pub fn render_footer<T>(view: &TableView<T>) -> String {
    let window = render_window(
        &view.window,
        view.current_page,
        view.can_go_previous,
        view.can_go_next,
    );
    let range = match view.item_range {
        Some((first, last)) => format!("{}–{} of {}", first, last, view.total_items),
        None => format!("0 of {}", view.total_items),
    };
    let mut out = format!(
        "\n{}    {} · {} per page · {} selected",
        window.trim_end(),
        range,
        view.page_size,
        view.selected_count
    );
    if view.disabled {
        out.push_str(" · paging disabled");
    }
    out.push('\n');
    out
}

/// Render every column of one record, for the "open" action.
pub fn render_detail<T: TableRow>(row: &T, columns: &[Column]) -> String {
    let label_width = columns
        .iter()
        .map(|c| display_width(&c.label))
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    if let Some(key) = row.key() {
        out.push_str(&format!("Record {}\n", key));
    }
    for column in columns {
        let value = row.field(&column.key).unwrap_or_default();
        out.push_str(&format!(
            "  {}  {}\n",
            fit(&column.label, label_width, Alignment::Left),
            value
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Hello", 10), "Hello");
        assert_eq!(truncate_to_width("Hello World", 8), "Hello W…");
        assert_eq!(truncate_to_width("Hello", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn test_fit_alignment() {
        assert_eq!(fit("ab", 4, Alignment::Left), "ab  ");
        assert_eq!(fit("ab", 4, Alignment::Right), "  ab");
        assert_eq!(fit("ab", 5, Alignment::Center), " ab  ");
    }

    #[test]
    fn test_render_window_marks_current() {
        let tokens = tabula::compute_window(10, 20);
        assert_eq!(
            render_window(&tokens, 10, true, true),
            "« ‹ 1 … 9 [10] 11 … 20 › »"
        );
    }

    #[test]
    fn test_render_window_first_page_hides_back_controls() {
        let tokens = tabula::compute_window(1, 2);
        assert_eq!(render_window(&tokens, 1, false, true), "    [1] 2 › »");
    }
}
