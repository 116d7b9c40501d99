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

use ratatui::style::Color;

// Accent
pub const ACCENT: Color = Color::Rgb(88, 101, 242);

// UI chrome
pub const BORDER: Color = Color::DarkGray;
pub const TITLE: Color = Color::Gray;
pub const TITLE_FOCUSED: Color = ACCENT;

// Link notice colors
pub const NOTICE_FG: Color = Color::Black;
pub const NOTICE_BG: Color = Color::Yellow;
