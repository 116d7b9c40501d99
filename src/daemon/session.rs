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

use crate::daemon::wire::FeedSnapshot;
use crate::feed::Feed;
use std::collections::BTreeMap;

/// Cached session state the daemon serves to clients.
///
/// Every feed starts empty at revision 0 and bumps its revision on each
/// mutation, so clients can poll with their last-seen counters and receive
/// only the feeds that actually changed. Revisions only ever grow.
#[derive(Debug)]
pub struct SessionStore {
    feeds: BTreeMap<Feed, FeedState>,
}

#[derive(Debug, Default)]
struct FeedState {
    revision: u64,
    lines: Vec<String>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self { feeds: Feed::ALL.iter().map(|f| (*f, FeedState::default())).collect() }
    }

    /// Replaces a feed's lines, returning the new revision.
    pub fn replace(&mut self, feed: Feed, lines: Vec<String>) -> u64 {
        let state = self.feeds.entry(feed).or_default();
        state.lines = lines;
        state.revision += 1;
        state.revision
    }

    /// Extends a feed's lines, returning the new revision.
    pub fn append(&mut self, feed: Feed, lines: Vec<String>) -> u64 {
        let state = self.feeds.entry(feed).or_default();
        state.lines.extend(lines);
        state.revision += 1;
        state.revision
    }

    #[must_use]
    pub fn revision(&self, feed: Feed) -> u64 {
        self.feeds.get(&feed).map_or(0, |state| state.revision)
    }

    #[must_use]
    pub fn snapshot(&self, feed: Feed) -> FeedSnapshot {
        match self.feeds.get(&feed) {
            Some(state) => {
                FeedSnapshot { feed, revision: state.revision, lines: state.lines.clone() }
            }
            None => FeedSnapshot { feed, revision: 0, lines: Vec::new() },
        }
    }

    /// Snapshots of every feed whose revision moved past the caller's
    /// last-seen counter. An unknown feed counts as seen-at-zero.
    #[must_use]
    pub fn updates_since(&self, seen: &BTreeMap<Feed, u64>) -> Vec<FeedSnapshot> {
        self.feeds
            .iter()
            .filter(|(feed, state)| state.revision > seen.get(feed).copied().unwrap_or(0))
            .map(|(feed, state)| FeedSnapshot {
                feed: *feed,
                revision: state.revision,
                lines: state.lines.clone(),
            })
            .collect()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
