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

//! The pane-layout engine: a [`Screen`] partitions the terminal into
//! [`Column`]s, each a vertical stack of [`Window`]s. Geometry is described
//! by cumulative percentages of the terminal total and re-derived on every
//! resize.

pub mod geometry;

mod column;
mod screen;
mod window;

pub use column::Column;
pub use screen::Screen;
pub use window::Window;

use crate::feed::Feed;
use serde::{Deserialize, Serialize};

/// Static description of a screen: columns left to right, panes top to
/// bottom. Boundaries are cumulative percentages of the terminal total (a
/// column ending at 75 covers everything between its neighbour's boundary
/// and three quarters of the screen), so they must be non-decreasing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub columns: Vec<ColumnSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub width_percent: f64,
    pub windows: Vec<PaneSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaneSpec {
    pub height_percent: f64,
    pub title: String,
    /// Daemon feed this pane displays; panes without one are static.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed: Option<Feed>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has no columns")]
    NoColumns,
    #[error("column {index} has no windows")]
    NoWindows { index: usize },
    #[error("{slot} boundary {value} is outside 0-100")]
    PercentOutOfRange { slot: String, value: f64 },
    #[error("{slot} boundary {value} decreases below its predecessor {previous}")]
    NonMonotonic { slot: String, value: f64, previous: f64 },
}

impl LayoutSpec {
    /// Rejects descriptions no screen can be built from: missing columns or
    /// windows, boundaries outside `[0, 100]`, and boundaries that move
    /// backwards (stacking would overlap).
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.columns.is_empty() {
            return Err(LayoutError::NoColumns);
        }
        let mut previous_width = 0.0;
        for (index, column) in self.columns.iter().enumerate() {
            let slot = format!("column {index}");
            check_boundary(&slot, column.width_percent, &mut previous_width)?;
            if column.windows.is_empty() {
                return Err(LayoutError::NoWindows { index });
            }
            let mut previous_height = 0.0;
            for (pane_index, pane) in column.windows.iter().enumerate() {
                let slot = format!("column {index} window {pane_index}");
                check_boundary(&slot, pane.height_percent, &mut previous_height)?;
            }
        }
        Ok(())
    }
}

fn check_boundary(slot: &str, value: f64, previous: &mut f64) -> Result<(), LayoutError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(LayoutError::PercentOutOfRange { slot: slot.to_owned(), value });
    }
    if value < *previous {
        return Err(LayoutError::NonMonotonic {
            slot: slot.to_owned(),
            value,
            previous: *previous,
        });
    }
    *previous = value;
    Ok(())
}
