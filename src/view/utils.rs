//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::model::Bounds;

pub fn bounds_of(rect: Rect) -> Bounds {
    Bounds::new(
        i32::from(rect.x),
        i32::from(rect.y),
        i32::from(rect.width),
        i32::from(rect.height),
    )
}

/// Popup of at most `width` x `height`, centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

pub fn key_hint(key: &str, desc: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{}  ", desc), Style::default().fg(Color::Gray)),
    ]
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}
