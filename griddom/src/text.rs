//! Plain-text painting of an element tree.
//!
//! Rows lay their children out side by side, columns stack them. Fixed
//! widths truncate or pad using the element's text alignment. Transparent
//! elements keep their footprint but paint as blanks.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::element::{Content, Element};
use crate::types::{Direction, Size, TextAlign};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let current_width = display_width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = "…";
    let target_width = max_width.saturating_sub(1);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(ellipsis);
    result
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}

/// Fit `s` into exactly `width` cells.
pub fn fit(s: &str, width: usize, align: TextAlign) -> String {
    let s = truncate_to_width(s, width);
    let text_width = display_width(&s);
    let left = align_offset(text_width, width, align);
    let right = width.saturating_sub(text_width + left);
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Paint `root` to lines of text, trailing whitespace trimmed.
pub fn render_plain(root: &Element) -> String {
    render_block(root)
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_block(element: &Element) -> Vec<String> {
    let mut lines = match &element.content {
        Content::None => vec![String::new()],
        Content::Text(s) => vec![s.clone()],
        Content::Checkbox {
            checked,
            indeterminate,
        } => {
            let mark = if *indeterminate {
                "[-]"
            } else if *checked {
                "[x]"
            } else {
                "[ ]"
            };
            vec![mark.to_string()]
        }
        Content::Placeholder { percent } => {
            let cells = usize::from(*percent).div_ceil(10);
            vec!["░".repeat(cells)]
        }
        Content::Children(children) => match element.direction {
            Direction::Column => children.iter().flat_map(render_block).collect(),
            Direction::Row => render_row(children, usize::from(element.gap)),
        },
    };

    if let Some(width) = block_width(element) {
        for line in &mut lines {
            *line = fit(line, width, element.text_align);
        }
    }

    if element.style.is_transparent() {
        for line in &mut lines {
            *line = " ".repeat(display_width(line));
        }
    }

    lines
}

fn block_width(element: &Element) -> Option<usize> {
    match element.width {
        Size::Fixed(w) => Some(usize::from(w)),
        _ => element.min_width.map(usize::from),
    }
}

fn render_row(children: &[Element], gap: usize) -> Vec<String> {
    let blocks: Vec<Vec<String>> = children.iter().map(render_block).collect();
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = blocks
        .iter()
        .map(|b| b.iter().map(|l| display_width(l)).max().unwrap_or(0))
        .collect();
    let separator = " ".repeat(gap);

    (0..height)
        .map(|i| {
            blocks
                .iter()
                .zip(&widths)
                .map(|(block, &w)| {
                    let line = block.get(i).map(String::as_str).unwrap_or("");
                    fit(line, w, TextAlign::Left)
                })
                .collect::<Vec<_>>()
                .join(&separator)
        })
        .collect()
}
