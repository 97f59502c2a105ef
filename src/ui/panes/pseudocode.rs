//! Pseudocode pane rendering with keyword highlighting
//!
//! Every line active in the current step gets the current-line background and
//! an arrow in the gutter. The first active line is kept at a fixed visual
//! row while stepping, the same way a debugger keeps the current statement
//! in view.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple highlighting for the C-like and prose pseudocode listings
fn highlight_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (byte, c) = chars[i];

        // Trailing comments
        if c == '/' && chars.get(i + 1).is_some_and(|&(_, n)| n == '/') {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            spans.push(Span::styled(
                line[byte..].to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }

        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let style = word_style(&current_word, c == '(');
                spans.push(Span::styled(std::mem::take(&mut current_word), style));
            }
            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                '\u{2190}' => Style::default().fg(DEFAULT_THEME.secondary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = word_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn word_style(word: &str, is_function: bool) -> Style {
    match word {
        "int" | "void" | "bool" | "struct" | "Node" => Style::default().fg(DEFAULT_THEME.type_name),
        "return" | "if" | "else" | "while" | "for" | "to" | "do" | "each" | "in" | "not"
        | "break" | "swap" | "function" | "procedure" | "repeat" | "until" | "downto" => {
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD)
        }
        "NULL" | "true" | "false" => Style::default().fg(DEFAULT_THEME.number),
        _ if word.chars().all(|c| c.is_ascii_digit()) => Style::default().fg(DEFAULT_THEME.number),
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Scroll state for the pseudocode pane
#[derive(Debug, Default)]
pub struct PseudocodeScrollState {
    pub offset: usize,
    /// Visual row the first active line is pinned to (None = not initialized yet)
    pub target_line_row: Option<usize>,
}

/// Render the pseudocode pane
pub fn render_pseudocode_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: &[&str],
    active_lines: &[usize],
    is_focused: bool,
    scroll_state: &mut PseudocodeScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Pseudocode: {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 3)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    if let Some(&first) = active_lines.iter().min() {
        if first > 0 && first <= total_lines {
            scroll_state.offset = (first - 1).saturating_sub(target_row);
        }
    }
    if total_lines > visible_height {
        scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
    } else {
        scroll_state.offset = 0;
    }

    let visible: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_active = active_lines.contains(&line_num);

            let (gutter, num_style) = if is_active {
                (
                    format!("\u{25b6}{:3} ", line_num),
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    format!("{:4} ", line_num),
                    Style::default().fg(DEFAULT_THEME.comment),
                )
            };

            let mut content = highlight_line(line);
            if is_active {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut spans = vec![Span::styled(gutter, num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_keeps_text_intact() {
        let source = "    if (arr[mid] == target)  // found";
        let line = highlight_line(source);
        let rebuilt: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_keywords_are_bold() {
        assert!(word_style("while", false).add_modifier.contains(Modifier::BOLD));
        assert_eq!(word_style("partition", true).fg, Some(DEFAULT_THEME.function));
    }
}
