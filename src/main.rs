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

use anyhow::Context as _;
use clap::Parser;
use cordial::daemon::client::DaemonClient;
use cordial::error::AppError;
use cordial::{Cli, Command, app, config};
use std::fs::OpenOptions;

#[allow(clippy::exit)]
fn main() {
    if let Err(err) = run() {
        if let Some(app_error) = extract_app_error(&err) {
            eprintln!("{}", app_error.user_message());
            std::process::exit(app_error.exit_code());
        }
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Daemon) => {
            init_daemon_tracing(&cli)?;
            cordial::daemon::run(cli.config.as_deref(), cli.address.as_deref())
        }
        None => {
            init_client_tracing(&cli)?;
            run_client(&cli)
        }
    }
}

fn run_client(cli: &Cli) -> anyhow::Result<()> {
    let settings = config::Config::load(cli.config.as_deref())?;
    let layout = settings.layout();
    layout.validate().map_err(|err| {
        anyhow::Error::new(AppError::ConfigInvalid).context(format!("layout: {err}"))
    })?;

    let address = cli.address.clone().unwrap_or_else(|| settings.daemon_address().to_owned());
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(async move {
        // Size is adopted from the first frame; the screen just needs to exist.
        let mut session = app::App::new(&layout, 0, 0)?;
        let (events_tx, mut events_rx) = tokio::sync::mpsc::unbounded_channel();
        let poller = app::connect::spawn_poller(DaemonClient::new(address), events_tx);
        let result = app::run_tui(&mut session, &mut events_rx).await;
        poller.abort();
        result
    })
}

fn extract_app_error(err: &anyhow::Error) -> Option<AppError> {
    err.chain().find_map(|cause| cause.downcast_ref::<AppError>().cloned())
}

/// The client must never write to the tty it renders on, so tracing stays
/// off unless a log file is given.
fn init_client_tracing(cli: &Cli) -> anyhow::Result<()> {
    let Some(path) = cli.log_file.as_ref() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli)?)
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))?;
    Ok(())
}

/// The daemon owns no tty: it logs to daily files under the data directory
/// (or to an explicit `--log-file`) plus stderr.
fn init_daemon_tracing(cli: &Cli) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let registry = tracing_subscriber::registry().with(env_filter(cli)?);

    if let Some(path) = cli.log_file.as_ref() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        registry
            .with(fmt::layer().with_writer(file).with_ansi(false))
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))?;
    } else {
        let log_dir = config::log_dir()?;
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("failed to create {}", log_dir.display()))?;
        let appender = tracing_appender::rolling::daily(&log_dir, "daemon.log");
        registry
            .with(fmt::layer().with_writer(appender).with_ansi(false))
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))?;
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tracing enabled");
    Ok(())
}

fn env_filter(cli: &Cli) -> anyhow::Result<tracing_subscriber::EnvFilter> {
    let directives = cli
        .log_filter
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_owned());
    tracing_subscriber::EnvFilter::try_new(directives.as_str())
        .map_err(|e| anyhow::anyhow!("invalid tracing filter `{directives}`: {e}"))
}
