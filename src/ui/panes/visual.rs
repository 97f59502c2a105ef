//! Visual pane: the current frame drawn as text
//!
//! Each frame family has its own line builder. Builders return owned
//! [`Line`]s so the pane can scroll them like any other list.

use crate::snapshot::{
    ArrayFrame, Dir, Frontier, GraphFrame, NodeId, Outcome, SearchCursor, SearchFrame, TreeFrame, TreeNode,
    TreeOp,
};
use crate::trace::Trace;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the visual pane for step `position`
pub fn render_visual_pane(
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
        .title(" Visualization ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_width = area.width.saturating_sub(2) as usize;
    let lines = visual_lines(trace, position, inner_width);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();
    frame.render_widget(Paragraph::new(visible).block(block), area);
}

/// Lines for step `position` of any trace
pub fn visual_lines(trace: &Trace, position: usize, width: usize) -> Vec<Line<'static>> {
    let lines = match trace {
        Trace::Sort { run, .. } => run.steps.get(position).map(|s| array_lines(&s.frame, width)),
        Trace::Search { run, .. } => run.steps.get(position).map(|s| search_lines(&s.frame)),
        Trace::Graph { run, .. } => run.steps.get(position).map(|s| graph_lines(&s.frame)),
        Trace::Tree(session) => session.steps().get(position).map(|s| tree_lines(&s.frame)),
    };
    lines.unwrap_or_else(|| vec![muted("(nothing recorded)")])
}

fn muted(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(DEFAULT_THEME.comment),
    ))
}

/// Integers print without a trailing `.0`
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn legend() -> Line<'static> {
    Line::from(vec![
        Span::styled("\u{25a0} selected  ", Style::default().fg(DEFAULT_THEME.selected)),
        Span::styled("\u{25a0} compared  ", Style::default().fg(DEFAULT_THEME.compared)),
        Span::styled("\u{25a0} swapped", Style::default().fg(DEFAULT_THEME.swapped)),
    ])
}

fn array_lines(frame: &ArrayFrame, width: usize) -> Vec<Line<'static>> {
    if frame.array.is_empty() {
        return vec![muted("(empty array)")];
    }

    let labels: Vec<String> = frame.array.iter().map(|&v| format_number(v)).collect();
    let label_width = labels.iter().map(String::len).max().unwrap_or(1);
    let max = frame.array.iter().fold(0.0_f64, |m, v| m.max(v.abs())).max(1.0);
    let bar_room = width.saturating_sub(label_width + 8).max(1);

    let mut lines = vec![legend(), Line::default()];
    for (i, (&value, label)) in frame.array.iter().zip(&labels).enumerate() {
        let color = if frame.swapped.contains(&i) {
            DEFAULT_THEME.swapped
        } else if frame.compared.contains(&i) {
            DEFAULT_THEME.compared
        } else if frame.selected.contains(&i) {
            DEFAULT_THEME.selected
        } else {
            DEFAULT_THEME.bar
        };
        let outside = frame
            .segment
            .is_some_and(|seg| i < seg.low || i > seg.high);
        let bar_style = if outside {
            Style::default().fg(DEFAULT_THEME.comment)
        } else {
            Style::default().fg(color)
        };
        let len = ((value.abs() / max) * bar_room as f64).round().max(1.0) as usize;

        lines.push(Line::from(vec![
            Span::styled(format!("{:3} ", i), Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled("\u{2588}".repeat(len), bar_style),
            Span::styled(format!(" {:>w$}", label, w = label_width), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    if let Some(seg) = frame.segment {
        lines.push(Line::default());
        lines.push(muted(&format!("segment [{}..={}]", seg.low, seg.high)));
    }
    lines
}

fn search_lines(frame: &SearchFrame) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled("target = ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            format_number(frame.target),
            Style::default()
                .fg(DEFAULT_THEME.number)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    match frame.cursor {
        SearchCursor::Linear { current, compare } => {
            lines.push(muted("linked list view (head = node 0)"));
            lines.push(Line::default());
            for (i, &value) in frame.array.iter().enumerate() {
                let next = frame
                    .next_of(i)
                    .map(|n| format!("\u{2192} [{}]", n))
                    .unwrap_or_else(|| "\u{2192} NULL".to_string());
                let style = if compare == Some(i) {
                    Style::default().fg(DEFAULT_THEME.compared).add_modifier(Modifier::BOLD)
                } else if current == Some(i) {
                    Style::default().fg(DEFAULT_THEME.selected)
                } else {
                    Style::default().fg(DEFAULT_THEME.fg)
                };
                let mut spans = vec![
                    Span::styled(format!("[{}] ", i), Style::default().fg(DEFAULT_THEME.comment)),
                    Span::styled(format!("{:>6} ", format_number(value)), style),
                    Span::styled(next, Style::default().fg(DEFAULT_THEME.comment)),
                ];
                if current == Some(i) {
                    spans.push(Span::styled("  \u{25c0} current", style));
                }
                lines.push(Line::from(spans));
            }
        }
        SearchCursor::Binary { window, mid } => {
            lines.push(Line::default());
            for (i, &value) in frame.array.iter().enumerate() {
                let inside = window.is_some_and(|w| w.contains(i));
                let mut tags = Vec::new();
                if let Some(w) = window {
                    if w.low == i as i64 {
                        tags.push("left");
                    }
                    if w.high == i as i64 {
                        tags.push("right");
                    }
                }
                if mid == Some(i) {
                    tags.push("mid");
                }
                let style = if mid == Some(i) {
                    Style::default().fg(DEFAULT_THEME.compared).add_modifier(Modifier::BOLD)
                } else if inside || window.is_none() {
                    Style::default().fg(DEFAULT_THEME.fg)
                } else {
                    Style::default().fg(DEFAULT_THEME.comment)
                };
                let mut spans = vec![
                    Span::styled(format!("{:3} ", i), Style::default().fg(DEFAULT_THEME.comment)),
                    Span::styled(format!("{:>6}", format_number(value)), style),
                ];
                if !tags.is_empty() {
                    spans.push(Span::styled(
                        format!("  \u{25c0} {}", tags.join(", ")),
                        Style::default().fg(DEFAULT_THEME.secondary),
                    ));
                }
                lines.push(Line::from(spans));
            }
            if let Some(w) = window {
                lines.push(Line::default());
                lines.push(muted(&format!("left = {}, right = {}", w.low, w.high)));
            }
        }
    }

    if let Some(outcome) = frame.outcome {
        lines.push(Line::default());
        let (text, color) = match outcome {
            Outcome::Found(i) => (format!("Result: found at index {}", i), DEFAULT_THEME.success),
            Outcome::NotFound => ("Result: -1 (not found)".to_string(), DEFAULT_THEME.error),
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }
    lines
}

fn names(frame: &GraphFrame, indices: &[usize]) -> String {
    indices
        .iter()
        .map(|&i| frame.name(i))
        .collect::<Vec<_>>()
        .join(" ")
}

fn graph_lines(frame: &GraphFrame) -> Vec<Line<'static>> {
    if frame.nodes.is_empty() {
        return vec![muted("(empty graph)")];
    }

    let (label, items) = match &frame.frontier {
        Frontier::Queue(items) => ("queue", items),
        Frontier::Stack(items) => ("stack", items),
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{:8}", label), Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(format!("[{}]", names(frame, items)), Style::default().fg(DEFAULT_THEME.primary)),
        ]),
        Line::from(vec![
            Span::styled(format!("{:8}", "visited"), Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                format!("[{}]", names(frame, &frame.visited)),
                Style::default().fg(DEFAULT_THEME.success),
            ),
        ]),
        Line::default(),
    ];

    for (i, name) in frame.nodes.iter().enumerate() {
        let order = frame.order.get(i).copied().unwrap_or(0);
        let style = if frame.compared.contains(&i) {
            Style::default().fg(DEFAULT_THEME.compared).add_modifier(Modifier::BOLD)
        } else if frame.selected.contains(&i) {
            Style::default().fg(DEFAULT_THEME.selected).add_modifier(Modifier::BOLD)
        } else if order > 0 {
            Style::default().fg(DEFAULT_THEME.success)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        let order_text = if order > 0 {
            format!("#{}", order)
        } else {
            "\u{00b7}".to_string()
        };
        let mut spans = vec![
            Span::styled(format!("{:>6} ", name), style),
            Span::styled(format!("{:>4}", order_text), Style::default().fg(DEFAULT_THEME.number)),
        ];
        if frame.current == Some(i) {
            spans.push(Span::styled("  \u{25c0} current", Style::default().fg(DEFAULT_THEME.selected)));
        } else if frame.neighbor == Some(i) {
            spans.push(Span::styled("  \u{25c0} neighbor", Style::default().fg(DEFAULT_THEME.compared)));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn op_label(op: TreeOp) -> &'static str {
    match op {
        TreeOp::InsertVisit => "insert: visit",
        TreeOp::InsertNew => "insert: new node",
        TreeOp::Cmp => "compare",
        TreeOp::Ret => "return",
        TreeOp::SearchVisit => "search: visit",
        TreeOp::SearchResult => "search: result",
    }
}

fn tree_lines(frame: &TreeFrame) -> Vec<Line<'static>> {
    let hl = frame.highlight;
    let mut status = format!("{} (key {})", op_label(hl.op), hl.key);
    if let Some(dir) = hl.dir {
        status.push_str(match dir {
            Dir::L => ", go left",
            Dir::R => ", go right",
        });
    }
    if hl.node.is_none() {
        status.push_str(", at empty slot");
    }
    let mut lines = vec![Line::from(Span::styled(
        status,
        Style::default().fg(DEFAULT_THEME.secondary),
    ))];
    if let Some(found) = hl.found {
        let (text, color) = if found {
            ("found", DEFAULT_THEME.success)
        } else {
            ("not found", DEFAULT_THEME.error)
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::default());

    match &frame.tree {
        None => lines.push(muted("(empty tree)")),
        Some(root) => outline(root, 0, hl.node, &mut lines),
    }
    lines
}

/// Sideways tree: right subtree above, left subtree below
fn outline(node: &TreeNode, depth: usize, highlighted: Option<NodeId>, lines: &mut Vec<Line<'static>>) {
    if let Some(right) = &node.right {
        outline(right, depth + 1, highlighted, lines);
    }
    let style = if highlighted == Some(node.id) {
        Style::default()
            .fg(DEFAULT_THEME.selected)
            .bg(DEFAULT_THEME.current_line_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    lines.push(Line::from(vec![
        Span::raw("    ".repeat(depth)),
        Span::styled(node.key.to_string(), style),
    ]));
    if let Some(left) = &node.left {
        outline(left, depth + 1, highlighted, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{run_search, run_sort, SearchKind, SortKind, TreeSession};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-3.5), "-3.5");
    }

    #[test]
    fn test_array_has_one_row_per_element() {
        let trace = Trace::Sort {
            kind: SortKind::Bubble,
            run: run_sort(SortKind::Bubble, &[3.0, 1.0, 2.0]),
        };
        let lines = visual_lines(&trace, 0, 40);
        let rows = lines.iter().filter(|l| text(l).contains('\u{2588}')).count();
        assert_eq!(rows, 3);
    }

    #[test]
    fn test_binary_search_result_line() {
        let run = run_search(SearchKind::Binary, &[1.0, 2.0, 3.0], 7.0).unwrap();
        let last = run.len() - 1;
        let trace = Trace::Search {
            kind: SearchKind::Binary,
            run,
        };
        let lines = visual_lines(&trace, last, 40);
        assert!(lines.iter().any(|l| text(l) == "Result: -1 (not found)"));
    }

    #[test]
    fn test_tree_outline_puts_larger_keys_first() {
        let session = TreeSession::new(&[8, 3, 10]);
        let last = session.len() - 1;
        let lines = visual_lines(&Trace::Tree(session), last, 40);
        let keys: Vec<String> = lines
            .iter()
            .map(|l| text(l).trim().to_string())
            .filter(|t| t.parse::<i64>().is_ok())
            .collect();
        assert_eq!(keys, vec!["10", "8", "3"]);
    }

    #[test]
    fn test_out_of_range_position() {
        let session = TreeSession::with_allocator(&[], crate::algorithms::NodeIdAllocator::starting_at(1));
        let lines = visual_lines(&Trace::Tree(session), 0, 40);
        assert_eq!(text(&lines[0]), "(nothing recorded)");
    }
}
