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

use crate::daemon::session::SessionStore;
use crate::daemon::wire::{Request, RequestEnvelope, Response, ResponseEnvelope};
use anyhow::Context as _;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt as _, AsyncWriteExt as _, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;

/// Accept loop. Connections are served one at a time, to completion: a
/// single task owns the store, so requests serialize without locks. Each
/// connection carries exactly one request and one response.
pub async fn serve(listener: TcpListener, shutdown: CancellationToken) -> anyhow::Result<()> {
    let mut store = SessionStore::new();
    let started = Instant::now();

    loop {
        tokio::select! {
            () = shutdown.cancelled() => break,
            accepted = listener.accept() => {
                let (stream, peer) = accepted.context("failed to accept client connection")?;
                match serve_connection(&mut store, stream, started).await {
                    Ok(keep_running) => {
                        if !keep_running {
                            tracing::info!("shutdown requested by {peer}");
                            shutdown.cancel();
                        }
                    }
                    Err(err) => tracing::warn!("connection from {peer} failed: {err:#}"),
                }
            }
        }
    }

    tracing::info!("daemon stopped after {:?}", started.elapsed());
    Ok(())
}

/// Reads one request line, answers it, and lets the connection drop.
/// Returns `false` when the client asked the daemon to shut down.
async fn serve_connection(
    store: &mut SessionStore,
    stream: TcpStream,
    started: Instant,
) -> anyhow::Result<bool> {
    let (read, mut write) = stream.into_split();
    let mut lines = BufReader::new(read).lines();
    let Some(line) = lines.next_line().await.context("failed to read request")? else {
        // Client connected and went away; nothing to answer.
        return Ok(true);
    };

    let (reply, keep_running) = match serde_json::from_str::<RequestEnvelope>(&line) {
        Ok(envelope) => {
            let keep_running = !matches!(envelope.request, Request::Shutdown);
            let response = handle_request(store, started, envelope.request);
            (ResponseEnvelope { request_id: envelope.request_id, response }, keep_running)
        }
        Err(err) => (
            ResponseEnvelope {
                request_id: None,
                response: Response::Error { message: format!("malformed request: {err}") },
            },
            true,
        ),
    };

    let mut payload = serde_json::to_string(&reply).context("failed to serialize response")?;
    payload.push('\n');
    write.write_all(payload.as_bytes()).await.context("failed to write response")?;
    write.flush().await.context("failed to flush response")?;
    Ok(keep_running)
}

fn handle_request(store: &mut SessionStore, started: Instant, request: Request) -> Response {
    match request {
        Request::Poll { seen } => Response::Feeds { updates: store.updates_since(&seen) },
        Request::Fetch { feed } => Response::Feeds { updates: vec![store.snapshot(feed)] },
        Request::Publish { feed, lines } => {
            let revision = store.replace(feed, lines);
            tracing::debug!("published {feed} at revision {revision}");
            Response::Ok
        }
        Request::Append { feed, lines } => {
            let revision = store.append(feed, lines);
            tracing::debug!("appended to {feed} at revision {revision}");
            Response::Ok
        }
        Request::Ping => {
            #[allow(clippy::cast_possible_truncation)]
            let uptime_ms = started.elapsed().as_millis() as u64;
            Response::Pong { uptime_ms }
        }
        Request::Shutdown => Response::Ok,
    }
}
