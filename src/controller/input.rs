//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{OverlayTarget, ReleaseTab, Storefront, HOME_HASH};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let mut model = self.model.lock().await;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            model.set_should_quit(true);
            return Ok(());
        }

        // Location bar captures typing until it is submitted or cancelled
        if model.is_address_bar_open() {
            match key.code {
                KeyCode::Enter => model.submit_address_bar(),
                KeyCode::Esc => model.close_address_bar(),
                KeyCode::Backspace => model.address_bar_backspace(),
                KeyCode::Char(c) => model.address_bar_push(c),
                _ => {}
            }
            return Ok(());
        }

        let ui_state = model.ui_state();

        if ui_state.notice.is_some() && key.code == KeyCode::Esc {
            model.clear_notice();
            return Ok(());
        }

        // A fullscreen game owns the whole screen
        if model.is_game_fullscreen() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('f') | KeyCode::Char('F')) {
                model.toggle_game_fullscreen();
            }
            return Ok(());
        }

        if ui_state.show_releases_view {
            drop(model);
            return self.handle_releases_key(key).await;
        }

        if ui_state.show_updates_view && matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
            model.go_home();
            return Ok(());
        }

        if ui_state.legacy_releases_route
            && matches!(key.code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter)
        {
            drop(model);
            self.navigate(HOME_HASH).await;
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true);
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                model.open_address_bar();
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.go_home();
            }
            KeyCode::Up => {
                model.scroll_page(-1);
            }
            KeyCode::Down => {
                model.scroll_page(1);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                drop(model);
                self.follow_main_action(OverlayTarget::Releases).await;
            }
            KeyCode::Char('u') | KeyCode::Char('U') => {
                drop(model);
                self.open_overlay(OverlayTarget::Updates).await;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                drop(model);
                self.follow_main_action(OverlayTarget::Updates).await;
            }
            KeyCode::Char(c @ '1'..='4') => {
                drop(model);
                self.open_social_link(c as usize - '1' as usize).await;
            }
            KeyCode::F(11) => {
                drop(model);
                self.toggle_display_fullscreen().await;
            }
            _ => {}
        }

        Ok(())
    }

    async fn handle_releases_key(&self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Right => self.next_release().await,
            KeyCode::Left => self.previous_release().await,
            KeyCode::Tab => self.cycle_tab().await,
            KeyCode::Char('m') | KeyCode::Char('M') => self.select_tab(ReleaseTab::Music).await,
            KeyCode::Char('v') | KeyCode::Char('V') => self.select_tab(ReleaseTab::Video).await,
            KeyCode::Char('p') | KeyCode::Char('P') => self.select_tab(ReleaseTab::Game).await,
            KeyCode::Enter => self.start_game().await,
            KeyCode::Char('f') | KeyCode::Char('F') => self.toggle_game_fullscreen().await,
            KeyCode::Char('o') | KeyCode::Char('O') => self.open_current_media().await,
            KeyCode::Char('b') | KeyCode::Char('B') => self.open_store_link(Storefront::Beatport).await,
            KeyCode::Char('a') | KeyCode::Char('A') => self.open_store_link(Storefront::AppleMusic).await,
            KeyCode::Char('j') | KeyCode::Char('J') => self.open_store_link(Storefront::Juno).await,
            // Pressing the action that is already open follows its link
            KeyCode::Char('r') | KeyCode::Char('R') => self.follow_main_action(OverlayTarget::Releases).await,
            KeyCode::Char('u') | KeyCode::Char('U') => self.open_overlay(OverlayTarget::Updates).await,
            KeyCode::Char('s') | KeyCode::Char('S') => self.follow_main_action(OverlayTarget::Updates).await,
            KeyCode::Char('g') | KeyCode::Char('G') => self.model.lock().await.open_address_bar(),
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => self.go_home().await,
            KeyCode::Char('q') | KeyCode::Char('Q') => self.model.lock().await.set_should_quit(true),
            KeyCode::F(11) => self.toggle_display_fullscreen().await,
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::controller::tests::harness;
    use crate::model::{ReleaseTab, SOCIAL_LINKS};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn press(h: &mut crate::controller::tests::Harness, codes: &[KeyCode]) {
        for code in codes {
            h.controller.handle_key_event(key(*code)).await.unwrap();
            h.pump().await;
        }
    }

    #[tokio::test]
    async fn release_keys_browse_and_escape_goes_home() {
        let mut h = harness(160, 50);
        press(&mut h, &[KeyCode::Char('r'), KeyCode::Right, KeyCode::Right]).await;
        let ui = h.controller.model.lock().await.ui_state();
        assert!(ui.show_releases_view);
        assert_eq!(ui.browser.current_release_index, 2);

        press(&mut h, &[KeyCode::Char('v')]).await;
        assert_eq!(
            h.controller.model.lock().await.ui_state().browser.active_tab,
            ReleaseTab::Video
        );

        press(&mut h, &[KeyCode::Esc]).await;
        let ui = h.controller.model.lock().await.ui_state();
        assert!(!ui.show_releases_view);
        assert!(!ui.browser.initialized());
    }

    #[tokio::test]
    async fn escape_leaves_game_fullscreen_before_the_overlay() {
        let mut h = harness(160, 50);
        press(
            &mut h,
            &[KeyCode::Char('r'), KeyCode::Char('p'), KeyCode::Enter, KeyCode::Char('f')],
        )
        .await;
        assert!(h.controller.model.lock().await.is_game_fullscreen());

        press(&mut h, &[KeyCode::Esc]).await;
        let ui = h.controller.model.lock().await.ui_state();
        assert!(!ui.browser.is_game_fullscreen);
        assert!(ui.show_releases_view);
    }

    #[tokio::test]
    async fn location_bar_navigates_and_closes_overlays() {
        let mut h = harness(160, 50);
        press(&mut h, &[KeyCode::Char('u'), KeyCode::Esc, KeyCode::Char('u')]).await;
        assert!(h.controller.model.lock().await.ui_state().show_updates_view);

        press(&mut h, &[KeyCode::Char('g')]).await;
        let mut typed: Vec<KeyCode> = "/contact".chars().map(KeyCode::Char).collect();
        typed.push(KeyCode::Enter);
        press(&mut h, &typed).await;

        let ui = h.controller.model.lock().await.ui_state();
        assert!(!ui.show_updates_view);
        assert_eq!(ui.current_path, "#/contact");
        assert_eq!(ui.location(), "/#/contact");
        assert_eq!(ui.address_bar, None);
    }

    #[tokio::test]
    async fn legacy_page_returns_home_on_enter() {
        let mut h = harness(160, 50);
        press(&mut h, &[KeyCode::Char('g'), KeyCode::Backspace]).await;
        let mut typed: Vec<KeyCode> = "#/releases".chars().map(KeyCode::Char).collect();
        typed.push(KeyCode::Enter);
        press(&mut h, &typed).await;
        assert!(h.controller.model.lock().await.ui_state().legacy_releases_route);

        press(&mut h, &[KeyCode::Enter]).await;
        let ui = h.controller.model.lock().await.ui_state();
        assert!(!ui.legacy_releases_route);
        assert_eq!(ui.current_path, "#");
    }

    #[tokio::test]
    async fn story_key_links_out_while_u_opens_updates() {
        let mut h = harness(160, 50);
        press(&mut h, &[KeyCode::Char('s')]).await;
        assert_eq!(h.opener.opened(), vec!["https://www.instagram.com/aeonlights/"]);
        assert!(!h.controller.model.lock().await.ui_state().show_updates_view);

        press(&mut h, &[KeyCode::Char('u')]).await;
        assert!(h.controller.model.lock().await.ui_state().show_updates_view);
        assert_eq!(h.opener.opened().len(), 1);
    }

    #[tokio::test]
    async fn number_keys_open_social_links_and_q_quits() {
        let mut h = harness(160, 50);
        press(&mut h, &[KeyCode::Char('1'), KeyCode::Char('q')]).await;
        assert_eq!(h.opener.opened(), vec![SOCIAL_LINKS[0].href.to_string()]);
        assert!(h.controller.model.lock().await.should_quit());
    }
}
