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

use crate::error::AppError;
use crate::feed::Feed;
use crate::layout::{ColumnSpec, LayoutSpec, PaneSpec};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Loopback address the daemon listens on unless overridden.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:5832";

/// Written on first run so there is something to put the token into.
const CONFIG_TEMPLATE: &str = "\
# cordial settings
#
# The daemon needs a session token to stand in for you:
#   token = \"mfa.<your token>\"
token = \"\"
";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Session token the daemon authenticates with.
    pub token: Option<String>,
    /// Where the daemon listens and the client connects.
    pub daemon_address: Option<String>,
    /// Pane layout override; the built-in layout applies when absent.
    pub layout: Option<LayoutSpec>,
}

impl Config {
    /// Loads settings from `path`, or from the default location when no path
    /// is given. A missing file is not an error; defaults apply.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => config_path()?,
        };
        if !path.exists() {
            tracing::info!("no settings file at {}; using defaults", path.display());
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        toml::from_str(&contents).map_err(|err| {
            anyhow::Error::new(AppError::ConfigInvalid)
                .context(format!("{}: {err}", path.display()))
        })
    }

    #[must_use]
    pub fn daemon_address(&self) -> &str {
        self.daemon_address.as_deref().unwrap_or(DEFAULT_ADDRESS)
    }

    /// The layout to build the screen from.
    #[must_use]
    pub fn layout(&self) -> LayoutSpec {
        self.layout.clone().unwrap_or_else(default_layout)
    }
}

/// `<config dir>/cordial/config.toml`
pub fn config_path() -> anyhow::Result<PathBuf> {
    let base = dirs::config_dir().context("no configuration directory on this platform")?;
    Ok(base.join("cordial").join("config.toml"))
}

/// `<data dir>/cordial/logs`
pub fn log_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir().context("no data directory on this platform")?;
    Ok(base.join("cordial").join("logs"))
}

/// Creates the config and log directories and drops a template settings file
/// in place on first run. Existing files are never touched.
pub fn bootstrap() -> anyhow::Result<()> {
    let config_file = config_path()?;
    if let Some(parent) = config_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let logs = log_dir()?;
    std::fs::create_dir_all(&logs)
        .with_context(|| format!("failed to create {}", logs.display()))?;
    if !config_file.exists() {
        std::fs::write(&config_file, CONFIG_TEMPLATE)
            .with_context(|| format!("failed to write {}", config_file.display()))?;
        tracing::info!("wrote template settings to {}", config_file.display());
    }
    Ok(())
}

/// The stock three-column session layout: conversations and servers on the
/// left, channels in the middle, message history on the right.
#[must_use]
pub fn default_layout() -> LayoutSpec {
    LayoutSpec {
        columns: vec![
            ColumnSpec {
                width_percent: 20.0,
                windows: vec![
                    PaneSpec {
                        height_percent: 50.0,
                        title: "Direct Messages".to_owned(),
                        feed: Some(Feed::DirectMessages),
                    },
                    PaneSpec {
                        height_percent: 100.0,
                        title: "Servers".to_owned(),
                        feed: Some(Feed::Servers),
                    },
                ],
            },
            ColumnSpec {
                width_percent: 40.0,
                windows: vec![PaneSpec {
                    height_percent: 100.0,
                    title: "Channels".to_owned(),
                    feed: Some(Feed::Channels),
                }],
            },
            ColumnSpec {
                width_percent: 100.0,
                windows: vec![PaneSpec {
                    height_percent: 100.0,
                    title: "History".to_owned(),
                    feed: Some(Feed::History),
                }],
            },
        ],
    }
}
