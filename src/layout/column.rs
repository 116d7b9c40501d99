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

use crate::layout::geometry::{Extent, cells};
use crate::layout::window::Window;
use ratatui::buffer::Buffer;

/// A vertical stack of windows occupying a horizontal slice of the terminal.
///
/// The column starts where its left neighbour ended and ends at its stored
/// cumulative width percentage. Resizing the column does not touch its
/// windows; [`Column::layout_windows`] propagates geometry in a separate pass
/// so sibling boundaries are always threaded explicitly instead of through
/// shared running state.
#[derive(Debug, Clone)]
pub struct Column {
    /// Cumulative right boundary, as a percent of total terminal width.
    width_percent: f64,
    cols: Extent,
    windows: Vec<Window>,
}

impl Column {
    #[must_use]
    pub fn new(width_percent: f64) -> Self {
        Self { width_percent, cols: Extent::default(), windows: Vec::new() }
    }

    /// Appends a window at the bottom of the stack. Geometry is assigned by
    /// the next layout pass.
    pub fn push(&mut self, window: Window) {
        self.windows.push(window);
    }

    #[must_use]
    pub fn cols(&self) -> Extent {
        self.cols
    }

    #[must_use]
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut [Window] {
        &mut self.windows
    }

    /// Windows currently holding content; columns where this is zero collapse
    /// during balancing.
    #[must_use]
    pub fn used_windows(&self) -> usize {
        self.windows.iter().filter(|w| w.has_source()).count()
    }

    /// Recomputes the horizontal extent from the stored percentage. Child
    /// windows are left alone; callers follow up with
    /// [`Column::layout_windows`].
    pub fn resize(&mut self, terminal_width: u16, previous_end: u16) {
        self.cols = Extent::new(previous_end, cells(self.width_percent, terminal_width));
    }

    /// Overrides the horizontal extent directly, for balancing.
    pub(crate) fn set_cols(&mut self, cols: Extent) {
        self.cols = cols;
    }

    /// Stacks the windows top to bottom, each starting where the previous
    /// ended, and hands every window a copy of this column's extent.
    pub fn layout_windows(&mut self, terminal_height: u16) {
        let cols = self.cols;
        let mut previous_end = 0;
        for window in &mut self.windows {
            window.set_column_extent(cols);
            window.resize(previous_end, terminal_height);
            previous_end = window.rows().end;
        }
    }

    pub fn render(&self, buf: &mut Buffer) {
        for window in &self.windows {
            window.render(buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Column;
    use crate::layout::geometry::Extent;
    use crate::layout::window::Window;
    use pretty_assertions::assert_eq;

    fn column_with(heights: &[f64]) -> Column {
        let mut column = Column::new(100.0);
        for (i, percent) in heights.iter().enumerate() {
            column.push(Window::new(format!("w{i}"), *percent, None));
        }
        column
    }

    #[test]
    fn resize_starts_after_previous_column() {
        let mut column = Column::new(75.0);
        column.resize(100, 25);
        assert_eq!(column.cols(), Extent::new(25, 75));
    }

    #[test]
    fn windows_stack_without_gaps() {
        let mut column = column_with(&[30.0, 60.0, 100.0]);
        column.resize(80, 0);
        column.layout_windows(40);
        let rows: Vec<_> = column.windows().iter().map(|w| w.rows()).collect();
        assert_eq!(rows, [Extent::new(0, 12), Extent::new(12, 24), Extent::new(24, 40)]);
        for pair in rows.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn layout_is_idempotent() {
        let mut column = column_with(&[50.0, 100.0]);
        column.resize(80, 10);
        column.layout_windows(24);
        let first: Vec<_> = column.windows().iter().map(|w| w.rows()).collect();
        column.resize(80, 10);
        column.layout_windows(24);
        let second: Vec<_> = column.windows().iter().map(|w| w.rows()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn used_windows_counts_only_sourced_panes() {
        let mut column = column_with(&[50.0, 100.0]);
        assert_eq!(column.used_windows(), 0);
        column.windows_mut()[1].set_source(vec!["hello".to_owned()]);
        assert_eq!(column.used_windows(), 1);
    }
}
