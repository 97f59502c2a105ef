//! Details pane: complexity, notes and the quick sort partition log

use super::visual::format_number;
use crate::trace::Trace;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Render the details pane
pub fn render_details_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &Trace,
    position: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let width = area.width.saturating_sub(3).max(10) as usize;
    let all_items: Vec<ListItem> = details_lines(trace, position, width)
        .into_iter()
        .map(ListItem::new)
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<9}", label), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Greedy word wrap
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn details_lines(trace: &Trace, position: usize, width: usize) -> Vec<Line<'static>> {
    let meta = trace.meta();
    let mut lines = vec![
        heading("Complexity"),
        row("Best", meta.complexity.best.to_string()),
        row("Average", meta.complexity.avg.to_string()),
        row("Worst", meta.complexity.worst.to_string()),
        row("Space", meta.space.to_string()),
        Line::default(),
        heading("Step"),
    ];

    let active = trace.active_lines(position);
    lines.push(row(
        "Lines",
        if active.is_empty() {
            "-".to_string()
        } else {
            active
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        },
    ));

    if let Trace::Tree(session) = trace {
        lines.push(row("Nodes", session.size().to_string()));
        lines.push(row("History", format!("{} KiB", session.memory_usage().div_ceil(1024))));
    }

    lines.push(Line::default());
    lines.push(heading("Notes"));
    for note in meta.notes.lines() {
        if note.trim().is_empty() {
            lines.push(Line::default());
            continue;
        }
        for chunk in wrap(note, width) {
            lines.push(Line::from(Span::styled(
                chunk,
                Style::default().fg(DEFAULT_THEME.fg),
            )));
        }
    }

    if !meta.partition_calls.is_empty() {
        lines.push(Line::default());
        lines.push(heading("Partition calls"));
        for call in &meta.partition_calls {
            let parent = call
                .parent
                .map(|p| format!("#{}", p))
                .unwrap_or_else(|| "root".to_string());
            // running call is highlighted, calls not reached yet are dimmed
            let (marker, style) = if call.covers(position) {
                (
                    "\u{25B6} ",
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else if call.first_step > position {
                ("  ", Style::default().fg(DEFAULT_THEME.comment))
            } else {
                ("  ", Style::default().fg(DEFAULT_THEME.fg))
            };
            lines.push(Line::from(vec![
                Span::raw("  ".repeat(call.depth)),
                Span::styled(marker, style),
                Span::styled(format!("#{} ", call.id), Style::default().fg(DEFAULT_THEME.number)),
                Span::styled(
                    format!(
                        "[{}..={}] pivot {} \u{2192} {} (from {})",
                        call.low,
                        call.high,
                        format_number(call.pivot_value),
                        call.pivot_index,
                        parent
                    ),
                    style,
                ),
            ]));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{run_sort, SortKind};

    fn rendered(trace: &Trace, position: usize) -> Vec<String> {
        details_lines(trace, position, 60)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_wrap_respects_width() {
        let wrapped = wrap("one two three four five", 9);
        assert_eq!(wrapped, vec!["one two", "three", "four five"]);
        assert!(wrap("", 5).is_empty());
    }

    #[test]
    fn test_quick_sort_lists_partition_calls() {
        let run = run_sort(SortKind::Quick, &[27.0, 90.0, 2.0, 40.0, 45.0]);
        let calls = run.meta.partition_calls.len();
        let trace = Trace::Sort {
            kind: SortKind::Quick,
            run,
        };
        let lines = rendered(&trace, 0);
        assert!(lines.iter().any(|l| l == "Partition calls"));
        let logged = lines.iter().filter(|l| l.contains("..=")).count();
        assert_eq!(logged, calls);
    }

    #[test]
    fn test_partition_log_follows_playback() {
        let run = run_sort(SortKind::Quick, &[27.0, 90.0, 2.0, 40.0, 45.0]);
        let calls = run.meta.partition_calls.clone();
        assert!(calls.len() >= 2);
        let trace = Trace::Sort {
            kind: SortKind::Quick,
            run,
        };
        let highlighted = |position: usize| -> Vec<String> {
            rendered(&trace, position)
                .into_iter()
                .filter(|l| l.contains('\u{25B6}'))
                .collect()
        };

        assert!(highlighted(0).is_empty());
        for call in &calls {
            for position in [call.first_step, call.last_step] {
                let rows = highlighted(position);
                assert_eq!(rows.len(), 1);
                assert!(rows[0].contains(&format!("#{} ", call.id)), "{:?}", rows);
            }
        }

        let past_end = calls[calls.len() - 1].last_step + 1;
        assert!(highlighted(past_end).is_empty());
    }
}
