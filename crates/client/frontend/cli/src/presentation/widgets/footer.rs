//! Footer widget with player position and key help.

use game_core::Vector;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Session facts shown next to the key help.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterStatus {
    pub player: Vector,
    pub tile_size: u32,
}

const KEY_HELP: [(&str, &str); 4] = [
    ("hjkl/arrows", "move"),
    ("yubn", "diagonal"),
    ("m", "new map"),
    ("q", "quit"),
];

pub fn line(status: &FooterStatus) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::raw("Pos: "),
        Span::styled(status.player.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" {}px", status.tile_size),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    for (key, action) in KEY_HELP {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(key, key_style));
        spans.push(Span::raw(format!(" {action}")));
    }

    Line::from(spans)
}

/// Render the footer line.
pub fn render(frame: &mut Frame, area: Rect, status: &FooterStatus) {
    frame.render_widget(Paragraph::new(line(status)), area);
}
