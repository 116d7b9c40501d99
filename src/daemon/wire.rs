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

//! JSON-lines protocol between the daemon and its local clients. One request
//! per connection, one response back, framed as single lines.

use crate::feed::Feed;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(flatten)]
    pub request: Request,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "request", rename_all = "snake_case")]
pub enum Request {
    /// Feeds whose revision moved past the caller's last-seen counters.
    Poll {
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        seen: BTreeMap<Feed, u64>,
    },
    /// Current snapshot of one feed, regardless of revisions.
    Fetch { feed: Feed },
    /// Replace a feed's lines. Entry point for the session adapter.
    Publish { feed: Feed, lines: Vec<String> },
    /// Extend a feed's lines, for append-heavy feeds like history.
    Append { feed: Feed, lines: Vec<String> },
    Ping,
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "response", rename_all = "snake_case")]
pub enum Response {
    Ok,
    Feeds { updates: Vec<FeedSnapshot> },
    Pong { uptime_ms: u64 },
    Error { message: String },
}

/// One feed's lines at a specific revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    pub feed: Feed,
    pub revision: u64,
    pub lines: Vec<String>,
}
