//! The downsampled sky photograph as a grid of RGB cells, plus the geometry
//! that maps it onto a magnified raster and back from pointer positions.

use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// Edge length (in surface pixels) of one magnified grid cell.
pub const CELL_SIZE: u32 = 20;

/// Rectangular grid of color samples, rows top to bottom.
///
/// Rectangularity is the producer's responsibility; the column count is read
/// from the first row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Rgb>>,
}

/// Position of a cell within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPos {
    pub column: usize,
    pub row: usize,
}

/// Result of a successful pointer query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoveredPixel {
    pub column: usize,
    pub row: usize,
    pub color: Rgb,
    /// Raw pointer position (viewport coordinates) for placing the tooltip.
    pub pointer_x: f64,
    pub pointer_y: f64,
}

/// Size the surface is shown at, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Rgb>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.columns() == 0
    }

    pub fn get(&self, column: usize, row: usize) -> Option<Rgb> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Cells in row-major order, paired with their position.
    pub fn cells(&self) -> impl Iterator<Item = (CellPos, Rgb)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, color)| (CellPos { column, row }, *color))
        })
    }

    /// Backing resolution of the magnified surface: `(columns × 20, rows × 20)`.
    pub fn surface_size(&self) -> (u32, u32) {
        (
            self.columns() as u32 * CELL_SIZE,
            self.rows() as u32 * CELL_SIZE,
        )
    }

    /// Footer label such as `16×16 Pixels` (rows first).
    pub fn dimensions_label(&self) -> String {
        format!("{}×{} Pixels", self.rows(), self.columns())
    }

    /// Maps a pointer position to the cell under it.
    ///
    /// `local` is the pointer relative to the surface element's top-left corner
    /// in display units; `client` is the raw viewport position echoed back for
    /// the tooltip. When the display size is unknown or degenerate the surface
    /// is assumed to be shown at its backing resolution.
    pub fn pointer_query(
        &self,
        local: (f64, f64),
        display: Option<DisplaySize>,
        client: (f64, f64),
    ) -> Option<HoveredPixel> {
        if self.is_empty() {
            return None;
        }

        let (backing_w, backing_h) = self.surface_size();
        let (scale_x, scale_y) = match display {
            Some(size) if size.width > 0.0 && size.height > 0.0 => (
                backing_w as f64 / size.width,
                backing_h as f64 / size.height,
            ),
            _ => (1.0, 1.0),
        };

        let cell = CELL_SIZE as f64;
        let column = (local.0 * scale_x / cell).floor();
        let row = (local.1 * scale_y / cell).floor();
        if !column.is_finite() || !row.is_finite() || column < 0.0 || row < 0.0 {
            return None;
        }

        let (column, row) = (column as usize, row as usize);
        if column >= self.columns() || row >= self.rows() {
            return None;
        }

        self.get(column, row).map(|color| HoveredPixel {
            column,
            row,
            color,
            pointer_x: client.0,
            pointer_y: client.1,
        })
    }
}

impl DisplaySize {
    /// A fresh measurement wins over the last known size; the last known size
    /// is only a fallback while the element cannot be measured.
    pub fn latest(measured: Option<Self>, previous: Option<Self>) -> Option<Self> {
        measured.or(previous)
    }
}

impl From<Vec<Vec<Rgb>>> for Grid {
    fn from(rows: Vec<Vec<Rgb>>) -> Self {
        Self::new(rows)
    }
}

/// Footer label for the capture location: `{lat}, {lon}`.
pub fn coordinates_label(latitude: &str, longitude: &str) -> String {
    format!("{latitude}, {longitude}")
}

#[cfg(test)]
pub(crate) fn sample_grid(columns: usize, rows: usize) -> Grid {
    Grid::new(
        (0..rows)
            .map(|y| {
                (0..columns)
                    .map(|x| Rgb((x * 13 % 256) as u8, (y * 29 % 256) as u8, ((x + y) * 7 % 256) as u8))
                    .collect()
            })
            .collect(),
    )
}
