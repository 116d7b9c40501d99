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

use crate::layout::Screen;

/// Position of the single pane receiving navigation input. Tracked by the
/// event loop, separate from the panes' own display emphasis flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusPosition {
    pub column: usize,
    pub window: usize,
}

/// Next pane in reading order: down the column, then the next column's top,
/// wrapping at the end of the screen.
#[must_use]
pub fn next(screen: &Screen, position: FocusPosition) -> FocusPosition {
    let columns = screen.columns();
    if columns.is_empty() {
        return position;
    }
    let column_len = columns[position.column.min(columns.len() - 1)].windows().len();
    if position.window + 1 < column_len {
        return FocusPosition { column: position.column, window: position.window + 1 };
    }
    let column = (position.column + 1) % columns.len();
    FocusPosition { column, window: 0 }
}

/// Previous pane in reading order, wrapping to the last pane of the previous
/// column (or of the last column from the very first pane).
#[must_use]
pub fn previous(screen: &Screen, position: FocusPosition) -> FocusPosition {
    let columns = screen.columns();
    if columns.is_empty() {
        return position;
    }
    if position.window > 0 {
        return FocusPosition { column: position.column, window: position.window - 1 };
    }
    let column = position.column.checked_sub(1).unwrap_or(columns.len() - 1);
    let window = columns[column].windows().len().saturating_sub(1);
    FocusPosition { column, window }
}

#[cfg(test)]
mod tests {
    use super::{FocusPosition, next, previous};
    use crate::layout::{ColumnSpec, LayoutSpec, PaneSpec, Screen};
    use pretty_assertions::assert_eq;

    /// 2 panes in the first column, 1 in the second.
    fn screen() -> Screen {
        let pane = |height_percent, title: &str| PaneSpec {
            height_percent,
            title: title.to_owned(),
            feed: None,
        };
        let layout = LayoutSpec {
            columns: vec![
                ColumnSpec {
                    width_percent: 50.0,
                    windows: vec![pane(50.0, "a"), pane(100.0, "b")],
                },
                ColumnSpec { width_percent: 100.0, windows: vec![pane(100.0, "c")] },
            ],
        };
        Screen::new(&layout, 80, 24).unwrap()
    }

    fn at(column: usize, window: usize) -> FocusPosition {
        FocusPosition { column, window }
    }

    #[test]
    fn next_walks_panes_in_reading_order_and_wraps() {
        let screen = screen();
        assert_eq!(next(&screen, at(0, 0)), at(0, 1));
        assert_eq!(next(&screen, at(0, 1)), at(1, 0));
        assert_eq!(next(&screen, at(1, 0)), at(0, 0));
    }

    #[test]
    fn previous_is_the_inverse_walk() {
        let screen = screen();
        assert_eq!(previous(&screen, at(0, 0)), at(1, 0));
        assert_eq!(previous(&screen, at(1, 0)), at(0, 1));
        assert_eq!(previous(&screen, at(0, 1)), at(0, 0));
    }

    #[test]
    fn cycling_forward_then_back_returns_home() {
        let screen = screen();
        let mut position = at(0, 0);
        for _ in 0..3 {
            position = next(&screen, position);
        }
        assert_eq!(position, at(0, 0));
        for _ in 0..3 {
            position = previous(&screen, position);
        }
        assert_eq!(position, at(0, 0));
    }
}
