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
use crate::layout::geometry::{Extent, cells};
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Widget};
use std::ops::Range;

/// Cells eaten by the frame on each axis (left+right or top+bottom border).
const BORDER_CELLS: u16 = 2;

/// A bordered pane showing one scrollable text buffer.
///
/// The window owns its source lines and its scroll/selection state. Its
/// vertical extent lives in terminal coordinates; the horizontal extent is a
/// copy of the owning column's, refreshed whenever the column is laid out, so
/// the window never holds a reference back into the tree.
#[derive(Debug, Clone)]
pub struct Window {
    title: String,
    feed: Option<Feed>,
    /// Cumulative bottom boundary, as a percent of total terminal height.
    height_percent: f64,
    source: Vec<String>,
    rows: Extent,
    cols: Extent,
    /// Wrapped-line indices currently on screen, `[start, end)`.
    visible: Range<usize>,
    /// Highlighted wrapped-line range; one logical entry, so length 1.
    selection: Range<usize>,
    selected: bool,
}

impl Window {
    #[must_use]
    pub fn new(title: impl Into<String>, height_percent: f64, feed: Option<Feed>) -> Self {
        Self {
            title: title.into(),
            feed,
            height_percent,
            source: Vec::new(),
            rows: Extent::default(),
            cols: Extent::default(),
            visible: 0..0,
            selection: 0..1,
            selected: false,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn feed(&self) -> Option<Feed> {
        self.feed
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    #[must_use]
    pub fn has_source(&self) -> bool {
        !self.source.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> Extent {
        self.rows
    }

    #[must_use]
    pub fn visible(&self) -> Range<usize> {
        self.visible.clone()
    }

    #[must_use]
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Replaces the text buffer. Scroll and selection state are left alone;
    /// callers that want the view re-anchored call [`Window::align_view`].
    pub fn set_source(&mut self, lines: Vec<String>) {
        self.source = lines;
    }

    /// Recomputes the vertical extent from the stored percentage: the window
    /// starts where its predecessor in the column ended and ends at its
    /// cumulative boundary. The visible range keeps its top line when that
    /// line still exists.
    pub fn resize(&mut self, previous_end: u16, terminal_height: u16) {
        let end = cells(self.height_percent, terminal_height);
        self.rows = Extent::new(previous_end, end);
        self.align_view();
    }

    /// Horizontal extent handed down by the owning column.
    pub(crate) fn set_column_extent(&mut self, cols: Extent) {
        self.cols = cols;
    }

    /// Pulls the visible and selection ranges back inside the wrapped-line
    /// count and re-derives the visible length from the interior height.
    pub fn align_view(&mut self) {
        let interior = usize::from(self.rows.len().saturating_sub(BORDER_CELLS));
        let count = self.wrap().count();
        let top = self.visible.start.min(count.saturating_sub(interior));
        self.visible = top..top + interior;
        let picked = self.selection.start.min(count.saturating_sub(1));
        self.selection = picked..picked + 1;
    }

    /// Interior width available for text, excluding the border columns.
    #[must_use]
    pub fn interior_width(&self) -> usize {
        usize::from(self.cols.len().saturating_sub(BORDER_CELLS))
    }

    /// Splits every source line into display chunks no wider than the
    /// interior. A chunk ends at a source line end or after exactly
    /// `interior_width` characters, whichever comes first; an empty source
    /// line still yields one empty chunk. A zero-width interior yields
    /// nothing. Recomputed on every call; cheap, but not free.
    pub fn wrap(&self) -> impl Iterator<Item = &str> {
        let width = self.interior_width();
        self.source.iter().flat_map(move |line| Chunks::new(line, width))
    }

    /// Number of wrapped display lines at the current interior width.
    #[must_use]
    pub fn wrap_count(&self) -> usize {
        self.wrap().count()
    }

    /// Shifts the visible range by `delta` wrapped lines. A shift that would
    /// push either bound outside `[0, wrap_count]` is rejected outright,
    /// never clamped to the nearest valid range.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn scroll(&mut self, delta: isize) {
        let count = self.wrap_count() as isize;
        let start = self.visible.start as isize + delta;
        let end = self.visible.end as isize + delta;
        if start < 0 || end > count {
            return;
        }
        self.visible = start as usize..end as usize;
    }

    /// Moves the selection by `delta` wrapped lines, with the same
    /// reject-out-of-bounds policy as [`Window::scroll`].
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn select(&mut self, delta: isize) {
        let count = self.wrap_count() as isize;
        let start = self.selection.start as isize + delta;
        let end = self.selection.end as isize + delta;
        if start < 0 || end > count {
            return;
        }
        self.selection = start as usize..end as usize;
    }

    /// The full frame rectangle in terminal coordinates.
    #[must_use]
    pub fn area(&self) -> Rect {
        Rect::new(self.cols.start, self.rows.start, self.cols.len(), self.rows.len())
    }

    /// Draws the bordered frame, the title, and the visible wrapped lines.
    /// Anything outside the buffer is dropped rather than reported: a pane
    /// that does not fit simply shows truncated or empty content.
    pub fn render(&self, buf: &mut Buffer) {
        let area = self.area().intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let title_style = if self.selected {
            Style::new().fg(theme::TITLE_FOCUSED).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme::TITLE)
        };
        Block::bordered()
            .border_style(Style::new().fg(theme::BORDER))
            .title(Span::styled(self.title.as_str(), title_style))
            .render(area, buf);

        let interior = area.inner(Margin::new(1, 1));
        if interior.is_empty() {
            return;
        }

        let picked = self.selection.start;
        let rows = self
            .wrap()
            .enumerate()
            .skip(self.visible.start)
            .take(usize::from(interior.height));
        for (row, (index, line)) in rows.enumerate() {
            let style = if index == picked {
                Style::new().add_modifier(Modifier::REVERSED)
            } else {
                Style::new()
            };
            #[allow(clippy::cast_possible_truncation)]
            let y = interior.y + row as u16;
            buf.set_stringn(interior.x, y, line, usize::from(interior.width), style);
        }
    }
}

/// Iterator over the display chunks of one source line.
///
/// Boundaries fall on `char` positions, mirroring how the terminal advances
/// one cell per glyph for the ASCII-heavy feeds this client shows.
struct Chunks<'a> {
    rest: Option<&'a str>,
    width: usize,
}

impl<'a> Chunks<'a> {
    fn new(line: &'a str, width: usize) -> Self {
        Self { rest: (width > 0).then_some(line), width }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.take()?;
        match rest.char_indices().nth(self.width) {
            Some((split, _)) => {
                let (chunk, tail) = rest.split_at(split);
                self.rest = Some(tail);
                Some(chunk)
            }
            None => Some(rest),
        }
    }
}
