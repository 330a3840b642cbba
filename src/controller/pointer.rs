//! Mouse input treated as touch, page scrolling and terminal resizes

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::AppController;

const SCROLL_STEP: i32 = 3;

impl AppController {
    /// A left-button drag is a touch gesture; the wheel scrolls the page.
    pub async fn handle_mouse_event(&self, mouse: MouseEvent) {
        let (x, y) = self.config.cell_to_px(mouse.column, mouse.row);
        let mut model = self.model.lock().await;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => model.touch_start(x, y),
            MouseEventKind::Up(MouseButton::Left) => {
                model.touch_end(x, y);
            }
            MouseEventKind::ScrollDown => model.scroll_page(SCROLL_STEP),
            MouseEventKind::ScrollUp => model.scroll_page(-SCROLL_STEP),
            _ => {}
        }
    }

    /// `reported_px` is the terminal's own pixel width, or 0 when unknown.
    pub async fn handle_resize(&self, cols: u16, rows: u16, reported_px: u16) {
        let width = self.config.window_width_px(cols, reported_px);
        tracing::debug!(cols, rows, width, "Terminal resized");
        self.model.lock().await.on_resize(width, cols, rows);
    }
}
