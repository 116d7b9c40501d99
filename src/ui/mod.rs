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

pub mod theme;

use crate::app::App;
use crate::app::connect::LinkState;
use ratatui::Frame;
use ratatui::style::Style;

const OFFLINE_NOTICE: &str = " daemon offline: showing cached state ";

/// Draws the whole frame: the pane tree, plus a one-line notice over the
/// bottom row while the daemon is unreachable. The screen is re-laid-out
/// here when the frame size disagrees with the cached snapshot, which also
/// covers the very first draw.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    if app.screen.size() != (area.width, area.height) {
        app.screen.resize(area.width, area.height);
    }

    app.screen.render(frame.buffer_mut());

    if app.link == LinkState::Offline && area.height > 0 {
        let style = Style::new().fg(theme::NOTICE_FG).bg(theme::NOTICE_BG);
        frame.buffer_mut().set_stringn(
            area.x,
            area.bottom() - 1,
            OFFLINE_NOTICE,
            usize::from(area.width),
            style,
        );
    }
}
