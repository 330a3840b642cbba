//! Overlay rendering (notice popup, location bar)

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::UiState;
use super::utils::centered_rect;

pub fn render_notice(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref notice) = ui_state.notice {
        let area = frame.area();

        let popup_width = 52.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4).max(1) as usize;

        // Calculate how many lines the message will take when wrapped
        let line_count = notice.chars().count().div_ceil(inner_width) as u16;

        let popup_area = centered_rect(area, popup_width, 2 + line_count.max(1));

        // Clear the area behind the popup first
        frame.render_widget(Clear, popup_area);

        let widget = Paragraph::new(notice.to_string())
            .style(Style::default().fg(Color::Yellow))
            .wrap(ratatui::widgets::Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Notice (Esc to dismiss) ")
                    .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(widget, popup_area);
    }
}

pub fn render_address_bar(frame: &mut Frame, ui_state: &UiState) {
    let Some(ref input) = ui_state.address_bar else {
        return;
    };
    let area = frame.area();
    let popup_area = centered_rect(area, 60, 3);

    frame.render_widget(Clear, popup_area);

    let line = Line::from(vec![
        Span::styled(ui_state.base_path.clone(), Style::default().fg(Color::DarkGray)),
        Span::styled(input.clone(), Style::default().fg(Color::White)),
        Span::styled("▏", Style::default().fg(Color::Green)),
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Go to (Enter Esc) ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(widget, popup_area);
}
