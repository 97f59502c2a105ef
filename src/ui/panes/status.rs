//! Status bar rendering with keybindings and playback indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status bar needs to know about the player
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub current_step: usize,
    pub total_steps: usize,
    pub is_playing: bool,
    /// Text typed so far when the tree input prompt is open
    pub prompt: Option<&'a str>,
    pub tree_mode: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let step_text = if data.total_steps == 0 {
        " Step 0/0 ".to_string()
    } else {
        format!(" Step {}/{} ", data.current_step + 1, data.total_steps)
    };

    let bar_style = Style::default().bg(DEFAULT_THEME.current_line_bg);
    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if data.prompt.is_some() {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", bar_style.fg(DEFAULT_THEME.comment)),
        match data.prompt {
            Some(prompt) => Span::styled(
                format!(" {}\u{2588} ", prompt),
                bar_style.fg(DEFAULT_THEME.secondary),
            ),
            None => Span::styled(format!(" {} ", data.message), bar_style.fg(DEFAULT_THEME.fg)),
        },
    ];

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar_style)
            .alignment(Alignment::Left),
        layout[0],
    );

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    let mut right_spans = if data.prompt.is_some() {
        vec![
            Span::styled(" \u{21b5} ", key_style),
            Span::styled(" submit ", desc_style),
            Span::styled("\u{2502}", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" esc ", key_style),
            Span::styled(" cancel ", desc_style),
        ]
    } else {
        vec![
            Span::styled(" \u{2190}/\u{2192} ", key_style),
            Span::styled(" step ", desc_style),
            Span::styled("\u{2502}", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" \u{23b5} ", key_style),
            Span::styled(" play ", desc_style),
            Span::styled("\u{2502}", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" \u{21b5} / \u{232b} ", key_style),
            Span::styled(" end/start ", desc_style),
            Span::styled("\u{2502}", sep_style),
            Span::styled(" ", desc_style),
            Span::styled("q", key_style),
            Span::styled(" quit ", desc_style),
        ]
    };

    if data.tree_mode && data.prompt.is_none() {
        right_spans.splice(
            0..0,
            [
                Span::styled(" i/s ", key_style),
                Span::styled(" insert/search ", desc_style),
                Span::styled("\u{2502}", sep_style),
                Span::styled(" ", desc_style),
            ],
        );
    }

    let is_at_start = data.current_step == 0;
    let is_at_end = data.current_step + 1 >= data.total_steps;
    let indicator = if data.prompt.is_some() {
        Some((" \u{2328} INPUT ", DEFAULT_THEME.secondary))
    } else if data.is_playing {
        Some((" \u{25b6} PLAYING ", DEFAULT_THEME.secondary))
    } else if is_at_end {
        Some((" END ", DEFAULT_THEME.error))
    } else if is_at_start {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };
    if let Some((label, color)) = indicator {
        right_spans.push(Span::styled("\u{2502}", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bar_style)
            .alignment(Alignment::Right),
        layout[1],
    );
}
