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

use crate::daemon::client::DaemonClient;
use crate::daemon::wire::FeedSnapshot;
use crate::feed::Feed;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::sync::mpsc;

/// How often the poller asks the daemon for changed feeds.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Online,
    Offline,
}

/// What the poller hands to the event loop.
#[derive(Debug)]
pub enum FeedEvent {
    Link(LinkState),
    Update(FeedSnapshot),
}

/// Background poller. An unreachable daemon is not an error: the panes keep
/// their cached content and the loop is told the link is down. The task ends
/// when the loop drops its receiver.
pub fn spawn_poller(
    client: DaemonClient,
    events: mpsc::UnboundedSender<FeedEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut seen: BTreeMap<Feed, u64> = BTreeMap::new();
        let mut link = LinkState::Offline;
        loop {
            let next_link = match client.poll(&seen).await {
                Ok(updates) => {
                    for snapshot in updates {
                        seen.insert(snapshot.feed, snapshot.revision);
                        if events.send(FeedEvent::Update(snapshot)).is_err() {
                            return;
                        }
                    }
                    LinkState::Online
                }
                Err(err) => {
                    tracing::debug!("poll failed: {err:#}");
                    LinkState::Offline
                }
            };
            if next_link != link {
                link = next_link;
                if events.send(FeedEvent::Link(link)).is_err() {
                    return;
                }
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    })
}
