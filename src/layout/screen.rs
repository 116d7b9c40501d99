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

use crate::feed::Feed;
use crate::layout::geometry::Extent;
use crate::layout::window::Window;
use crate::layout::{Column, LayoutError, LayoutSpec};
use ratatui::buffer::Buffer;

/// The full terminal, partitioned into columns.
///
/// Percentages from the layout description are the source of truth: every
/// resize re-derives all absolute coordinates from them, so extents never
/// drift across repeated resizes.
#[derive(Debug, Clone)]
pub struct Screen {
    columns: Vec<Column>,
    width: u16,
    height: u16,
}

impl Screen {
    /// Builds the pane tree from a validated layout description and lays it
    /// out for the given terminal size. A rejected description leaves no
    /// partially built screen behind.
    pub fn new(layout: &LayoutSpec, width: u16, height: u16) -> Result<Self, LayoutError> {
        layout.validate()?;
        let columns = layout
            .columns
            .iter()
            .map(|column_spec| {
                let mut column = Column::new(column_spec.width_percent);
                for pane in &column_spec.windows {
                    column.push(Window::new(pane.title.clone(), pane.height_percent, pane.feed));
                }
                column
            })
            .collect();
        let mut screen = Self { columns, width: 0, height: 0 };
        screen.resize(width, height);
        Ok(screen)
    }

    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Columns containing at least one non-empty window.
    #[must_use]
    pub fn used_columns(&self) -> usize {
        self.columns.iter().filter(|c| c.used_windows() > 0).count()
    }

    /// Re-derives every column's horizontal extent and every window's
    /// vertical extent from the stored percentages, threading each sibling's
    /// end into the next sibling's start.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let mut previous_end = 0;
        for column in &mut self.columns {
            column.resize(width, previous_end);
            previous_end = column.cols().end;
            column.layout_windows(height);
        }
    }

    /// Redistributes the width evenly across the columns that hold content.
    /// Each used column gets `round(width / used)` cells, accumulated left to
    /// right; empty columns collapse to zero width; the last used column
    /// absorbs the rounding remainder so the boundary lands exactly on the
    /// screen edge.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn balance(&mut self) {
        let used = self.used_columns();
        if used == 0 {
            return;
        }
        let base = (f64::from(self.width) / used as f64).round() as u16;
        let last_used = self
            .columns
            .iter()
            .rposition(|c| c.used_windows() > 0)
            .unwrap_or(self.columns.len() - 1);

        let height = self.height;
        let width = self.width;
        let mut start = 0;
        for (index, column) in self.columns.iter_mut().enumerate() {
            let len = if column.used_windows() == 0 {
                0
            } else if index == last_used {
                width.saturating_sub(start)
            } else {
                base.min(width.saturating_sub(start))
            };
            column.set_cols(Extent::new(start, start + len));
            column.layout_windows(height);
            start += len;
        }
    }

    pub fn render(&self, buf: &mut Buffer) {
        for column in &self.columns {
            column.render(buf);
        }
    }

    /// The window bound to `feed`, if the layout declares one.
    pub fn window_for_feed_mut(&mut self, feed: Feed) -> Option<&mut Window> {
        self.columns
            .iter_mut()
            .flat_map(Column::windows_mut)
            .find(|w| w.feed() == Some(feed))
    }

    #[must_use]
    pub fn window(&self, column: usize, window: usize) -> Option<&Window> {
        self.columns.get(column)?.windows().get(window)
    }

    pub fn window_mut(&mut self, column: usize, window: usize) -> Option<&mut Window> {
        self.columns.get_mut(column)?.windows_mut().get_mut(window)
    }
}
