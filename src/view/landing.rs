//! Landing page: the two main actions, the slideshow area and, while an
//! overlay is active, the reduced action text the releases panel hangs off.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::AppConfig;
use crate::model::{
    main_action, Anchor, MainAction, OverlayTarget, RenderedAnchors, UiState, MAIN_ACTIONS,
};
use super::releases::render_release_panel;
use super::utils::bounds_of;

/// Rows one action takes: three title lines, a gap and the link.
const ACTION_ROWS: u16 = 5;
const ACTION_GAP: u16 = 1;
const PANEL_RIGHT_MARGIN: u16 = 3;
const PANEL_BOTTOM_MARGIN: u16 = 1;

fn action_color(action: &MainAction) -> Color {
    match action.overlay {
        OverlayTarget::Releases => Color::Yellow,
        OverlayTarget::Updates => Color::Magenta,
    }
}

fn action_lines(action: &MainAction, active: bool, align_right: bool) -> Vec<Line<'static>> {
    let title_style = if active {
        Style::default()
            .fg(action_color(action))
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(action_color(action))
            .add_modifier(Modifier::BOLD)
    };

    let mut lines: Vec<Line> = action
        .primary_text_lines
        .iter()
        .map(|line| Line::from(Span::styled(line.to_string(), title_style)))
        .collect();
    lines.push(Line::from(""));

    let key = match action.overlay {
        OverlayTarget::Releases => "r",
        OverlayTarget::Updates => "s",
    };
    let link = if active {
        vec![
            Span::styled("← BACK", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(" (Esc)", Style::default().fg(Color::DarkGray)),
        ]
    } else {
        vec![
            Span::styled(action.secondary_text, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" ({})", key), Style::default().fg(Color::DarkGray)),
        ]
    };
    lines.push(Line::from(link));

    if align_right {
        lines.into_iter().map(Line::right_aligned).collect()
    } else {
        lines
    }
}

fn render_slideshow(frame: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let banner = vec![
        Line::from(""),
        Line::from(Span::styled(
            "A E O N L I G H T S",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];
    let slideshow = Paragraph::new(banner)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(slideshow, area);
}

/// Draws the landing page and returns how many rows of it lie below the
/// fold.
pub fn render_landing(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    config: &AppConfig,
    anchors: &mut RenderedAnchors,
) -> u16 {
    if ui_state.viewport_class.is_wide() {
        if ui_state.is_overlay_open() {
            render_active_view(frame, area, ui_state, config, anchors);
        } else {
            render_wide_landing(frame, area, anchors);
        }
        0
    } else {
        render_compact_landing(frame, area, ui_state, config)
    }
}

fn render_wide_landing(frame: &mut Frame, area: Rect, anchors: &mut RenderedAnchors) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(85), // Slideshow
            Constraint::Percentage(15), // Text actions
        ])
        .split(area);

    render_slideshow(frame, chunks[0]);

    let actions_area = chunks[1];
    anchors.record(Anchor::TextActionsArea, bounds_of(actions_area));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(ACTION_ROWS),
            Constraint::Length(ACTION_GAP),
            Constraint::Length(ACTION_ROWS),
            Constraint::Length(ACTION_GAP),
        ])
        .split(actions_area);

    for (action, rect) in MAIN_ACTIONS.iter().zip([rows[1], rows[3]]) {
        frame.render_widget(Paragraph::new(action_lines(action, false, true)), rect);
        if action.overlay == OverlayTarget::Releases {
            anchors.record(Anchor::TextBlock, bounds_of(rect));
        }
    }
}

/// Tablet/desktop with an overlay open: the slideshow collapses, the active
/// action shrinks to the left edge and the releases panel fills the rest.
fn render_active_view(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    config: &AppConfig,
    anchors: &mut RenderedAnchors,
) {
    anchors.record(Anchor::TextActionsArea, bounds_of(area));

    let target = if ui_state.show_releases_view {
        OverlayTarget::Releases
    } else {
        OverlayTarget::Updates
    };
    let action = main_action(target);

    let text_width = action
        .primary_text_lines
        .iter()
        .map(|line| line.chars().count() as u16)
        .max()
        .unwrap_or(0)
        .max(12)
        + 2;
    let text_block = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: text_width.min(area.width.saturating_sub(2)),
        height: ACTION_ROWS.min(area.height.saturating_sub(1)),
    };
    frame.render_widget(Paragraph::new(action_lines(action, true, false)), text_block);
    if target == OverlayTarget::Releases {
        anchors.record(Anchor::TextBlock, bounds_of(text_block));
    }

    if !ui_state.show_releases_view {
        return;
    }

    // Panel placement comes from the previous frame's measurement.
    let (Some(panel_left), Some(text_rect), Some(actions_rect)) = (
        ui_state.geometry.panel_left(),
        ui_state.geometry.text_block_rect,
        ui_state.geometry.text_actions_area_rect,
    ) else {
        return;
    };

    let left = (actions_rect.left() + panel_left + 1).max(0) as u16;
    let top = text_rect.y.max(0) as u16;
    let right = area.right().saturating_sub(PANEL_RIGHT_MARGIN);
    let bottom = area.bottom().saturating_sub(PANEL_BOTTOM_MARGIN);
    if left >= right || top >= bottom {
        return;
    }
    let panel = Rect {
        x: left,
        y: top,
        width: right - left,
        height: bottom - top,
    };
    render_release_panel(frame, panel, ui_state, config);
}

/// Mobile: actions stacked above the slideshow, which fills a full screen
/// below them, so the page scrolls.
fn render_compact_landing(frame: &mut Frame, area: Rect, ui_state: &UiState, config: &AppConfig) -> u16 {
    if ui_state.show_releases_view {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(ACTION_ROWS + ACTION_GAP), Constraint::Min(0)])
            .split(area);
        frame.render_widget(
            Paragraph::new(action_lines(main_action(OverlayTarget::Releases), true, false)).alignment(Alignment::Center),
            chunks[0],
        );
        render_release_panel(frame, chunks[1], ui_state, config);
        return 0;
    }

    let mut lines = Vec::new();
    for action in &MAIN_ACTIONS {
        let active = ui_state.show_updates_view && action.overlay == OverlayTarget::Updates;
        lines.extend(action_lines(action, active, false));
        lines.push(Line::from(""));
    }
    let text_rows = lines.len() as u16;
    let total_rows = text_rows + area.height;

    let scroll = ui_state.page.scroll_offset;
    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .scroll((scroll, 0));
    frame.render_widget(text, area);

    // The slideshow starts right below the text and scrolls with it.
    let slideshow_top = text_rows.saturating_sub(scroll);
    if slideshow_top < area.height {
        let slideshow = Rect {
            x: area.x,
            y: area.y + slideshow_top,
            width: area.width,
            height: area.height - slideshow_top,
        };
        render_slideshow(frame, slideshow);
    }

    total_rows.saturating_sub(area.height)
}
