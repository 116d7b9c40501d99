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

use serde::{Deserialize, Serialize};

/// One logical list served by the daemon. Each feed carries an ordered
/// sequence of display strings plus a monotonically increasing revision
/// counter; a pane bound to a feed re-sources itself when the revision
/// advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feed {
    DirectMessages,
    Servers,
    Channels,
    History,
}

impl Feed {
    /// All feeds, in the order the daemon initializes them.
    pub const ALL: [Feed; 4] = [Feed::DirectMessages, Feed::Servers, Feed::Channels, Feed::History];
}

impl std::fmt::Display for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Feed::DirectMessages => "direct_messages",
            Feed::Servers => "servers",
            Feed::Channels => "channels",
            Feed::History => "history",
        };
        f.write_str(name)
    }
}
