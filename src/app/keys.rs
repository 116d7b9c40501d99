// cordial — a daemon-backed terminal client for chat platforms
// Copyright (C) 2026  Cordial contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use super::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn is_ctrl_char_shortcut(key: KeyEvent, expected: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&expected))
}

/// Routes one key press. Navigation goes to the focused pane; everything
/// renders afterwards, so handlers only mutate state.
pub(super) fn dispatch_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char_shortcut(key, 'c') || is_ctrl_char_shortcut(key, 'q') {
        app.should_quit = true;
        return;
    }

    match key.code {
        // No transient panes to collapse yet, so Esc quits like `q`.
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => scroll_focused(app, 1),
        KeyCode::Char('k') | KeyCode::Up => scroll_focused(app, -1),
        KeyCode::Char('J') => select_focused(app, 1),
        KeyCode::Char('K') => select_focused(app, -1),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Char('=') => app.screen.balance(),
        _ => {}
    }
}

fn scroll_focused(app: &mut App, delta: isize) {
    if let Some(window) = app.focused_window_mut() {
        window.scroll(delta);
    }
}

fn select_focused(app: &mut App, delta: isize) {
    if let Some(window) = app.focused_window_mut() {
        window.select(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::dispatch_key;
    use crate::app::App;
    use crate::app::connect::FeedEvent;
    use crate::daemon::wire::FeedSnapshot;
    use crate::feed::Feed;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_history(lines: usize) -> App {
        let mut app = App::test_default();
        app.apply_feed(FeedEvent::Update(FeedSnapshot {
            feed: Feed::History,
            revision: 1,
            lines: (0..lines).map(|i| format!("line {i}")).collect(),
        }));
        // Focus the history pane (last in reading order).
        app.focus_previous();
        app
    }

    #[test]
    fn quit_keys_raise_the_flag() {
        for code in [KeyCode::Esc, KeyCode::Char('q')] {
            let mut app = App::test_default();
            dispatch_key(&mut app, key(code));
            assert!(app.should_quit);
        }
        let mut app = App::test_default();
        dispatch_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn j_and_k_scroll_the_focused_pane() {
        let mut app = app_with_history(200);
        let before = app.focused_window_mut().unwrap().visible();
        dispatch_key(&mut app, key(KeyCode::Char('j')));
        let after = app.focused_window_mut().unwrap().visible();
        assert_eq!(after.start, before.start + 1);
        dispatch_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.focused_window_mut().unwrap().visible(), before);
    }

    #[test]
    fn shifted_j_moves_the_selection() {
        let mut app = app_with_history(10);
        dispatch_key(&mut app, key(KeyCode::Char('J')));
        assert_eq!(app.focused_window_mut().unwrap().selection(), 1..2);
        dispatch_key(&mut app, key(KeyCode::Char('K')));
        assert_eq!(app.focused_window_mut().unwrap().selection(), 0..1);
    }

    #[test]
    fn tab_cycles_focus() {
        let mut app = App::test_default();
        let start = app.focus;
        dispatch_key(&mut app, key(KeyCode::Tab));
        assert_ne!(app.focus, start);
        dispatch_key(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.focus, start);
    }

    #[test]
    fn equals_rebalances_columns() {
        let mut app = app_with_history(5);
        dispatch_key(&mut app, key(KeyCode::Char('=')));
        // Only the history column holds content, so it takes the full width.
        let total: u16 = app.screen.columns().iter().map(|c| c.cols().len()).sum();
        assert_eq!(total, app.screen.size().0);
    }
}
