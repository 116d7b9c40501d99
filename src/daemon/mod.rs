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

pub mod client;
pub mod server;
pub mod session;
pub mod wire;

use crate::auth;
use crate::config::{self, Config};
use crate::error::AppError;
use anyhow::Context as _;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Runs the daemon in the foreground: bootstrap directories, load settings,
/// check the session token, then serve the local socket until Ctrl-C or a
/// shutdown request arrives.
pub fn run(config_path: Option<&std::path::Path>, address: Option<&str>) -> anyhow::Result<()> {
    config::bootstrap()?;
    let config = Config::load(config_path)?;
    auth::session_token(&config)?;
    tracing::info!("session token accepted");

    let address = address.unwrap_or_else(|| config.daemon_address()).to_owned();
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(async move {
        let listener = TcpListener::bind(&address).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::AddrInUse {
                anyhow::Error::new(AppError::AddressInUse).context(address.clone())
            } else {
                anyhow::Error::new(err).context(format!("failed to bind {address}"))
            }
        })?;
        tracing::info!("daemon listening on {address}");

        let shutdown = CancellationToken::new();
        let ctrl_c = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupt received; shutting down");
                ctrl_c.cancel();
            }
        });

        server::serve(listener, shutdown).await
    })
}
