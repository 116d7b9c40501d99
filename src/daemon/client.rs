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

use crate::daemon::wire::{FeedSnapshot, Request, RequestEnvelope, Response, ResponseEnvelope};
use crate::feed::Feed;
use anyhow::Context as _;
use std::collections::BTreeMap;
use tokio::io::{AsyncBufReadExt as _, AsyncWriteExt as _, BufReader};
use tokio::net::TcpStream;

/// Client side of the daemon protocol. Connections are per-request: connect,
/// send one JSON line, read one back, drop the socket.
#[derive(Debug, Clone)]
pub struct DaemonClient {
    address: String,
}

impl DaemonClient {
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self { address: address.into() }
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    pub async fn request(&self, request: Request) -> anyhow::Result<Response> {
        let stream = TcpStream::connect(&self.address)
            .await
            .with_context(|| format!("failed to connect to daemon at {}", self.address))?;
        let (read, mut write) = stream.into_split();

        let mut payload = serde_json::to_string(&RequestEnvelope { request_id: None, request })
            .context("failed to serialize request")?;
        payload.push('\n');
        write.write_all(payload.as_bytes()).await.context("failed to write request")?;
        write.flush().await.context("failed to flush request")?;

        let mut lines = BufReader::new(read).lines();
        let line = lines
            .next_line()
            .await
            .context("failed to read response")?
            .context("daemon closed the connection without a response")?;
        let envelope: ResponseEnvelope =
            serde_json::from_str(&line).context("failed to decode response json")?;
        Ok(envelope.response)
    }

    /// Feeds that changed since the given per-feed revisions.
    pub async fn poll(&self, seen: &BTreeMap<Feed, u64>) -> anyhow::Result<Vec<FeedSnapshot>> {
        match self.request(Request::Poll { seen: seen.clone() }).await? {
            Response::Feeds { updates } => Ok(updates),
            Response::Error { message } => anyhow::bail!("daemon rejected poll: {message}"),
            other => anyhow::bail!("unexpected poll response: {other:?}"),
        }
    }

    /// Replaces one feed's lines. This is the session adapter's entry point
    /// for pushing fresh state into the daemon.
    pub async fn publish(&self, feed: Feed, lines: Vec<String>) -> anyhow::Result<()> {
        match self.request(Request::Publish { feed, lines }).await? {
            Response::Ok => Ok(()),
            Response::Error { message } => anyhow::bail!("daemon rejected publish: {message}"),
            other => anyhow::bail!("unexpected publish response: {other:?}"),
        }
    }

    pub async fn append(&self, feed: Feed, lines: Vec<String>) -> anyhow::Result<()> {
        match self.request(Request::Append { feed, lines }).await? {
            Response::Ok => Ok(()),
            Response::Error { message } => anyhow::bail!("daemon rejected append: {message}"),
            other => anyhow::bail!("unexpected append response: {other:?}"),
        }
    }

    pub async fn ping(&self) -> anyhow::Result<u64> {
        match self.request(Request::Ping).await? {
            Response::Pong { uptime_ms } => Ok(uptime_ms),
            other => anyhow::bail!("unexpected ping response: {other:?}"),
        }
    }

    pub async fn shutdown(&self) -> anyhow::Result<()> {
        match self.request(Request::Shutdown).await? {
            Response::Ok => Ok(()),
            other => anyhow::bail!("unexpected shutdown response: {other:?}"),
        }
    }
}
