//! Releases panel, fullscreen game surface and the static releases page

use chrono::{Local, NaiveDate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::config::AppConfig;
use crate::model::{
    game_embed_src, video_embed_url, ReleaseRecord, ReleaseTab, Storefront, TabContentHeight,
    UiState,
};
use super::utils::{key_hint, truncate_string};

const PANEL_BG: Color = Color::White;
const PANEL_FG: Color = Color::Black;
const GAME_ACCENT: Color = Color::LightGreen;

/// Rows the active tab's content gets, given the frame height.
pub fn tab_content_rows(height: TabContentHeight, frame_rows: u16, config: &AppConfig) -> u16 {
    match height {
        TabContentHeight::Pixels(px) => {
            (u32::from(px) / config.cell_height_px.max(1)).min(u32::from(u16::MAX)) as u16
        }
        TabContentHeight::ViewportPercent(percent) => {
            (u32::from(frame_rows) * u32::from(percent) / 100) as u16
        }
    }
}

pub fn render_release_panel(frame: &mut Frame, area: Rect, ui_state: &UiState, config: &AppConfig) {
    if !ui_state.browser.initialized() {
        return;
    }
    let Some(release) = ui_state.current_release() else {
        return;
    };
    if area.width < 10 || area.height < 4 {
        return;
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(PANEL_BG).fg(PANEL_FG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let wanted_rows = tab_content_rows(ui_state.tab_content_height(), frame.area().height, config);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Title, navigation, tabs
            Constraint::Length(1),           // Rule
            Constraint::Length(wanted_rows), // Tab content
            Constraint::Min(0),
        ])
        .split(inner);

    render_panel_header(frame, chunks[0], ui_state, release);
    frame.render_widget(
        Paragraph::new("─".repeat(chunks[1].width as usize)).style(Style::default().fg(PANEL_FG)),
        chunks[1],
    );

    let today = Local::now().date_naive();
    match ui_state.browser.active_tab {
        ReleaseTab::Music => render_music_tab(frame, chunks[2], release, today),
        ReleaseTab::Video => render_video_tab(frame, chunks[2], release, today),
        ReleaseTab::Game => render_game_tab(frame, chunks[2], ui_state, release),
    }
}

fn render_panel_header(frame: &mut Frame, area: Rect, ui_state: &UiState, release: &ReleaseRecord) {
    let count = ui_state.catalog.len();
    let nav_style = if count <= 1 {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(PANEL_FG).add_modifier(Modifier::BOLD)
    };

    let mut right: Vec<Span> = vec![
        Span::styled("◀ ", nav_style),
        Span::styled(
            format!("{}/{}", ui_state.browser.current_release_index + 1, count),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(" ▶   ", nav_style),
    ];
    for tab in release.available_tabs() {
        let style = if tab == ui_state.browser.active_tab {
            Style::default().fg(PANEL_FG).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        right.push(Span::styled(tab.label(), style));
        right.push(Span::raw("  "));
    }
    let right_width = right.iter().map(|s| s.content.chars().count()).sum::<usize>() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    let title = Paragraph::new(truncate_string(
        &release.title.to_uppercase(),
        chunks[0].width as usize,
    ))
    .style(Style::default().fg(PANEL_FG).add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);
    frame.render_widget(Paragraph::new(Line::from(right)), chunks[1]);
}

/// Dashed-outline tile shown where an embed is not available yet.
fn render_placeholder(frame: &mut Frame, area: Rect, reason: String) {
    let text = vec![
        Line::from(Span::styled("+", Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(reason, Style::default().fg(Color::DarkGray))),
    ];
    let tile = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );
    frame.render_widget(tile, vertically_centered(area, 4));
}

fn render_embed(frame: &mut Frame, area: Rect, title: &str, url: &str, accent: Color) {
    let text = vec![
        Line::from(Span::styled(title.to_string(), Style::default().fg(accent).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(url.to_string(), Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(key_hint("o", "Open in browser")),
    ];
    let tile = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(tile, area);
}

fn placeholder_reason(release: &ReleaseRecord, today: NaiveDate, missing: &str) -> String {
    if release.is_upcoming(today) {
        format!("Out {}", release.details.release_date)
    } else {
        missing.to_string()
    }
}

fn render_music_tab(frame: &mut Frame, area: Rect, release: &ReleaseRecord, today: NaiveDate) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    if release.is_upcoming(today) || !release.has_audio() {
        render_placeholder(frame, chunks[0], placeholder_reason(release, today, "Player not available"));
    } else {
        render_embed(frame, chunks[0], "♪ Spotify player", &release.audio_embed_url, Color::Green);
    }

    render_details(frame, chunks[1], release);
}

fn render_details(frame: &mut Frame, area: Rect, release: &ReleaseRecord) {
    let details = &release.details;
    let field = |label: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{}: ", label), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(value.to_string()),
        ])
    };

    let mut lines = vec![field("Credits", &details.credits)];
    if !details.mastering.is_empty() {
        lines.push(field("Mastering", &details.mastering));
    }
    lines.push(field("Release date", &details.release_date));
    lines.push(field("Label", &details.label));
    lines.push(field("Distribution", &details.distribution));
    if !details.notes.is_empty() {
        lines.push(Line::from(""));
        lines.extend(
            details
                .notes
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(Color::DarkGray)))),
        );
    }

    let stores = release.store_links();
    if !stores.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "BUY",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        )));
        for (store, _) in stores {
            let key = match store {
                Storefront::Beatport => "b",
                Storefront::AppleMusic => "a",
                Storefront::Juno => "j",
            };
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] ", key), Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw(store.label()),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(PANEL_FG));
    frame.render_widget(paragraph, area);
}

fn render_video_tab(frame: &mut Frame, area: Rect, release: &ReleaseRecord, today: NaiveDate) {
    match release.video_id.as_deref() {
        Some(id) if !release.is_upcoming(today) => {
            render_embed(frame, area, "▶ YouTube", &video_embed_url(id, true), Color::Red);
        }
        _ => render_placeholder(frame, area, placeholder_reason(release, today, "Video not available")),
    }
}

fn render_game_tab(frame: &mut Frame, area: Rect, ui_state: &UiState, release: &ReleaseRecord) {
    let Some(url) = release.playable_game_url() else {
        return;
    };

    if ui_state.browser.is_game_started {
        render_game_surface(frame, area, release, &game_embed_src(url, true), false);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let about = vec![
        Line::from(Span::styled(
            format!("About the Game: {}", release.title),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("This is an interactive game experience."),
        Line::from("Press Enter to START your adventure!"),
    ];
    frame.render_widget(
        Paragraph::new(about)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::uniform(1)).style(Style::default().bg(Color::Gray))),
        chunks[0],
    );

    let mut cover = vec![
        Line::from(Span::styled(
            release.title.to_uppercase(),
            Style::default().fg(GAME_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if let Some(thumbnail) = &release.game_thumbnail_url {
        cover.push(Line::from(Span::styled(thumbnail.clone(), Style::default().fg(Color::DarkGray))));
        cover.push(Line::from(""));
    }
    cover.push(Line::from(Span::styled(
        " START ",
        Style::default().fg(Color::Black).bg(GAME_ACCENT).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(
        Paragraph::new(cover)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).style(Style::default().bg(Color::Black))),
        vertically_centered(chunks[1], chunks[1].height),
    );
}

fn render_game_surface(frame: &mut Frame, area: Rect, release: &ReleaseRecord, src: &str, fullscreen: bool) {
    let hint = if fullscreen { ("Esc", "Exit fullscreen") } else { ("f", "Fullscreen") };
    let mut hints = key_hint(hint.0, hint.1);
    hints.extend(key_hint("o", "Open in browser"));

    let text = vec![
        Line::from(Span::styled(
            release.title.to_uppercase(),
            Style::default().fg(GAME_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(src.to_string(), Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(hints),
    ];
    let surface = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GAME_ACCENT))
                .title(" GAME ")
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(surface, area);
}

/// The running game takes over the whole frame.
pub fn render_game_fullscreen(frame: &mut Frame, ui_state: &UiState) {
    let Some(release) = ui_state.current_release() else {
        return;
    };
    let Some(url) = release.playable_game_url() else {
        return;
    };
    let area = frame.area();
    frame.render_widget(Clear, area);
    render_game_surface(frame, area, release, &game_embed_src(url, true), true);
}

/// Static page reachable through `#/releases`
pub fn render_legacy_page(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RELEASES",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "← Back to Home",
            Style::default().fg(Color::Black).add_modifier(Modifier::UNDERLINED),
        )),
    ];
    let page = Paragraph::new(text).block(
        Block::default()
            .padding(Padding::horizontal(2))
            .style(Style::default().bg(Color::Rgb(0xB7, 0xBC, 0xC5))),
    );
    frame.render_widget(page, area);
}

fn vertically_centered(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: area.width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_heights_become_rows() {
        let config = AppConfig::default();
        assert_eq!(tab_content_rows(TabContentHeight::Pixels(352), 50, &config), 22);
        assert_eq!(tab_content_rows(TabContentHeight::ViewportPercent(60), 50, &config), 30);
    }
}
