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

pub mod connect;
pub mod focus;
mod keys;
mod state;

pub use state::App;

use connect::FeedEvent;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt as _;
use std::time::Duration;
use tokio::sync::mpsc;

/// Idle tick. Nothing renders without an event, but a tick caps how stale a
/// daemon-pushed update can look if the terminal stays quiet.
const TICK: Duration = Duration::from_millis(250);

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

/// Owns the terminal for the lifetime of the session. The terminal mode is
/// restored on every exit path: quit, error, or panic (ratatui's init hook
/// covers the last).
pub async fn run_tui(
    app: &mut App,
    events: &mut mpsc::UnboundedReceiver<FeedEvent>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = drive(app, &mut terminal, events).await;
    ratatui::restore();
    result
}

/// One blocking await per iteration, then apply everything pending, then
/// render once. Feed updates are only ever applied here, between draws, so a
/// frame never shows a half-applied update.
async fn drive(
    app: &mut App,
    terminal: &mut ratatui::DefaultTerminal,
    events: &mut mpsc::UnboundedReceiver<FeedEvent>,
) -> anyhow::Result<()> {
    let mut input = EventStream::new();

    loop {
        tokio::select! {
            Some(event) = input.next() => {
                handle_terminal_event(app, event?);
            }
            Some(event) = events.recv() => {
                app.apply_feed(event);
            }
            () = tokio::time::sleep(TICK) => {}
        }

        // Drain whatever else is queued before paying for a draw.
        while let Ok(event) = events.try_recv() {
            app.apply_feed(event);
        }

        if app.should_quit {
            break;
        }

        terminal.draw(|frame| crate::ui::render(frame, app))?;
    }

    Ok(())
}

fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            keys::dispatch_key(app, key);
        }
        Event::Resize(width, height) => {
            app.screen.resize(width, height);
        }
        _ => {}
    }
}
