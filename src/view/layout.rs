//! Layout rendering (header, status bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{UiState, SOCIAL_LINKS};
use super::utils::key_hint;

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let social_width = SOCIAL_LINKS
        .iter()
        .map(|link| link.name.chars().count() as u16 + 5)
        .sum::<u16>()
        + 2;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),               // Logo + location
            Constraint::Length(social_width), // Social links
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "AEONLIGHTS",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(ui_state.location(), Style::default().fg(Color::DarkGray)),
    ]);
    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(header, chunks[0]);

    let links: Vec<Span> = SOCIAL_LINKS
        .iter()
        .enumerate()
        .flat_map(|(i, link)| {
            [
                Span::styled(
                    format!("{}", i + 1),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {}  ", link.name), Style::default().fg(Color::Cyan)),
            ]
        })
        .collect();
    let social = Paragraph::new(Line::from(links))
        .block(Block::default().borders(Borders::ALL).title(" Follow "));
    frame.render_widget(social, chunks[1]);
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let hints: Vec<(&str, &str)> = if ui_state.browser.is_game_fullscreen {
        vec![("Esc/f", "Exit fullscreen")]
    } else if ui_state.show_releases_view {
        vec![
            ("←/→", "Release"),
            ("Tab", "Tab"),
            ("Enter", "Start"),
            ("f", "Fullscreen"),
            ("o", "Open"),
            ("b/a/j", "Stores"),
            ("Esc", "Back"),
        ]
    } else if ui_state.show_updates_view {
        vec![("s", "Instagram"), ("Esc", "Back")]
    } else if ui_state.legacy_releases_route {
        vec![("Enter", "Back to Home")]
    } else {
        vec![
            ("r", "Releases"),
            ("u", "Updates"),
            ("s", "Story"),
            ("1-4", "Social"),
            ("g", "Go to"),
            ("F11", "Fullscreen"),
            ("q", "Quit"),
        ]
    };

    let spans: Vec<Span> = hints
        .into_iter()
        .flat_map(|(key, desc)| key_hint(key, desc))
        .collect();

    let viewport = format!(
        " {} {}px{} ",
        ui_state.viewport_class.label(),
        ui_state.viewport_width,
        if ui_state.display_fullscreen { " ⛶" } else { "" }
    );

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title_bottom(Line::from(viewport).right_aligned()),
    );
    frame.render_widget(status, area);
}
