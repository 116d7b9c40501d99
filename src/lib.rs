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

pub mod app;
pub mod auth;
pub mod config;
pub mod daemon;
pub mod error;
pub mod feed;
pub mod layout;
pub mod ui;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cordial", about = "A daemon-backed terminal client for chat platforms")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, short)]
    pub config: Option<std::path::PathBuf>,

    /// Daemon address override (defaults to the settings file, then 127.0.0.1:5832)
    #[arg(long, short)]
    pub address: Option<String>,

    /// Write diagnostics to this file (the client is silent without it)
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives, e.g. `cordial=debug`
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the session daemon in the foreground
    Daemon,
}
