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

use crate::app::connect::{FeedEvent, LinkState};
use crate::app::focus::{self, FocusPosition};
use crate::layout::{LayoutError, LayoutSpec, Screen, Window};

pub struct App {
    pub screen: Screen,
    pub focus: FocusPosition,
    pub link: LinkState,
    pub should_quit: bool,
}

impl App {
    /// Builds the pane tree and puts focus on the first pane. Construction
    /// fails on an unusable layout description, before any terminal state is
    /// touched.
    pub fn new(layout: &LayoutSpec, width: u16, height: u16) -> Result<Self, LayoutError> {
        let screen = Screen::new(layout, width, height)?;
        let mut app = Self {
            screen,
            focus: FocusPosition::default(),
            link: LinkState::Offline,
            should_quit: false,
        };
        app.sync_emphasis();
        Ok(app)
    }

    pub fn focused_window_mut(&mut self) -> Option<&mut Window> {
        self.screen.window_mut(self.focus.column, self.focus.window)
    }

    pub fn focus_next(&mut self) {
        self.focus = focus::next(&self.screen, self.focus);
        self.sync_emphasis();
    }

    pub fn focus_previous(&mut self) {
        self.focus = focus::previous(&self.screen, self.focus);
        self.sync_emphasis();
    }

    /// Applies one event from the poller. Updates land on the pane bound to
    /// the feed; the view is re-anchored so a shrinking feed cannot strand
    /// the scroll range out of bounds.
    pub fn apply_feed(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::Link(state) => {
                if state != self.link {
                    tracing::info!("daemon link is now {state:?}");
                }
                self.link = state;
            }
            FeedEvent::Update(snapshot) => {
                if let Some(window) = self.screen.window_for_feed_mut(snapshot.feed) {
                    window.set_source(snapshot.lines);
                    window.align_view();
                } else {
                    tracing::debug!("no pane is bound to feed {}", snapshot.feed);
                }
            }
        }
    }

    /// Mirrors loop focus onto the panes' display emphasis flags.
    fn sync_emphasis(&mut self) {
        let focus = self.focus;
        for (column_index, column) in self.screen.columns_mut().iter_mut().enumerate() {
            for (window_index, window) in column.windows_mut().iter_mut().enumerate() {
                window.set_selected(
                    column_index == focus.column && window_index == focus.window,
                );
            }
        }
    }

    /// Minimal app over the stock layout, for tests. No daemon, no terminal.
    #[doc(hidden)]
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn test_default() -> Self {
        Self::new(&crate::config::default_layout(), 100, 40).unwrap()
    }
}
