use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Cut `s` so it fits in `width` columns, ending with `…` when shortened
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Greedy word wrap measured in terminal columns
///
/// Words longer than `width` are hard-truncated rather than split.
pub fn wrap_words(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in s.split_whitespace() {
        let word = truncate_to_width(word, width);
        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Word wrap limited to `max_lines`; the last kept line gets an ellipsis when text was dropped
pub fn wrap_clamped(s: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_words(s, width);
    if lines.len() <= max_lines {
        return lines;
    }

    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let mut shortened = truncate_to_width(last, width.saturating_sub(1));
        if !shortened.ends_with(ELLIPSIS) {
            shortened.push(ELLIPSIS);
        }
        *last = shortened;
    }
    lines
}
