//! Incremental, row-major reveal of a grid.
//!
//! `RevealStepper` only tracks where the reveal is. `reveal_into` drives it
//! against a [`Surface`], yielding one frame between cells; cancelling the
//! future at any await point leaves a partially painted surface.
//! `paint_plan` decides whether new props need a repaint at all.

use super::grid::{CellPos, Grid};
use super::raster::{Surface, SurfaceError};
use super::timing;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStepper {
    columns: usize,
    rows: usize,
    row: usize,
    column: usize,
}

impl RevealStepper {
    pub fn new(grid: &Grid) -> Self {
        Self::with_dimensions(grid.columns(), grid.rows())
    }

    pub fn with_dimensions(columns: usize, rows: usize) -> Self {
        // A zero-width grid has nothing to reveal regardless of its row count.
        let rows = if columns == 0 { 0 } else { rows };
        Self {
            columns,
            rows,
            row: 0,
            column: 0,
        }
    }

    /// Next cell to paint, advancing the cursor. `None` once every cell was handed out.
    pub fn step(&mut self) -> Option<CellPos> {
        if self.is_done() {
            return None;
        }
        let pos = CellPos {
            column: self.column,
            row: self.row,
        };
        self.column += 1;
        if self.column == self.columns {
            self.column = 0;
            self.row += 1;
        }
        Some(pos)
    }

    pub fn is_done(&self) -> bool {
        self.row >= self.rows
    }

    /// `(painted, total)` cells.
    #[cfg(test)]
    pub fn progress(&self) -> (usize, usize) {
        let total = self.columns * self.rows;
        let painted = (self.row * self.columns + self.column).min(total);
        (painted, total)
    }

    #[cfg(test)]
    pub fn restart(&mut self) {
        self.row = 0;
        self.column = 0;
    }
}

impl Iterator for RevealStepper {
    type Item = CellPos;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

/// Sizes `surface` for `grid`, then paints one cell per frame in row-major
/// order. Stops at the first surface error; a detached surface surfaces as
/// [`SurfaceError::Detached`].
pub async fn reveal_into<S: Surface + ?Sized>(grid: &Grid, surface: &mut S) -> Result<(), SurfaceError> {
    if grid.is_empty() {
        return Ok(());
    }
    let (width, height) = grid.surface_size();
    surface.reset(width, height)?;

    let mut stepper = RevealStepper::new(grid);
    while let Some(pos) = stepper.step() {
        if let Some(color) = grid.get(pos.column, pos.row) {
            surface.fill_cell(pos, color)?;
        }
        if !stepper.is_done() {
            timing::next_frame().await;
        }
    }
    Ok(())
}

/// How a grid view should react to new props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintPlan {
    /// Same grid as last time; whatever is on screen stays.
    Skip,
    /// Grid changed to an empty one; stop any reveal and paint nothing.
    Clear,
    /// Grid changed and its reveal already finished once.
    Immediate,
    /// Grid changed and has not been revealed yet.
    Animate,
}

/// Only a change of the grid value leads to a repaint; flipping
/// `already_revealed` for the grid on screen is a no-op.
pub fn paint_plan(painted: Option<&Grid>, grid: &Grid, already_revealed: bool) -> PaintPlan {
    if painted == Some(grid) {
        PaintPlan::Skip
    } else if grid.is_empty() {
        PaintPlan::Clear
    } else if already_revealed {
        PaintPlan::Immediate
    } else {
        PaintPlan::Animate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::sample_grid;

    #[test]
    fn walks_row_major() {
        let order: Vec<_> = RevealStepper::with_dimensions(3, 2)
            .map(|p| (p.column, p.row))
            .collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn empty_grids_are_done_immediately() {
        assert!(RevealStepper::new(&sample_grid(0, 0)).is_done());
        let mut zero_width = RevealStepper::with_dimensions(0, 4);
        assert_eq!(zero_width.step(), None);
        assert_eq!(zero_width.progress(), (0, 0));
    }

    #[test]
    fn progress_tracks_steps_and_restart_rewinds() {
        let mut stepper = RevealStepper::new(&sample_grid(4, 4));
        for _ in 0..6 {
            stepper.step();
        }
        assert_eq!(stepper.progress(), (6, 16));
        stepper.by_ref().for_each(drop);
        assert!(stepper.is_done());
        assert_eq!(stepper.progress(), (16, 16));

        stepper.restart();
        assert_eq!(stepper.step(), Some(CellPos { column: 0, row: 0 }));
    }

    #[test]
    fn completion_flag_alone_never_repaints() {
        let grid = sample_grid(4, 3);
        assert_eq!(paint_plan(Some(&grid), &grid, false), PaintPlan::Skip);
        assert_eq!(paint_plan(Some(&grid), &grid, true), PaintPlan::Skip);
        assert_eq!(paint_plan(Some(&grid), &grid.clone(), true), PaintPlan::Skip);
    }

    #[test]
    fn changed_grid_reanimates_unless_already_revealed() {
        let before = sample_grid(4, 3);
        let after = sample_grid(5, 3);
        assert_eq!(paint_plan(None, &after, false), PaintPlan::Animate);
        assert_eq!(paint_plan(Some(&before), &after, false), PaintPlan::Animate);
        assert_eq!(paint_plan(Some(&before), &after, true), PaintPlan::Immediate);
    }

    #[test]
    fn switching_to_an_empty_grid_clears() {
        let before = sample_grid(2, 2);
        assert_eq!(paint_plan(Some(&before), &Grid::default(), false), PaintPlan::Clear);
        assert_eq!(paint_plan(Some(&Grid::default()), &Grid::default(), false), PaintPlan::Skip);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn reveal_ends_pixel_identical_to_immediate_paint() {
        use crate::core::raster::Raster;

        let grid = sample_grid(3, 2);
        let mut revealed = Raster::default();
        block_on(reveal_into(&grid, &mut revealed)).unwrap();
        assert_eq!(revealed, Raster::render(&grid));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn single_cell_reveal_finishes_without_waiting_a_frame() {
        use crate::core::raster::Raster;

        let grid = sample_grid(1, 1);
        let mut revealed = Raster::default();
        let started = std::time::Instant::now();
        block_on(reveal_into(&grid, &mut revealed)).unwrap();
        assert!(started.elapsed() < std::time::Duration::from_millis(timing::FRAME_MS));
        assert_eq!(revealed, Raster::render(&grid));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn reveal_stops_when_surface_detaches() {
        use crate::core::color::Rgb;

        struct Vanishing {
            remaining: usize,
            painted: usize,
        }

        impl Surface for Vanishing {
            fn reset(&mut self, _: u32, _: u32) -> Result<(), SurfaceError> {
                Ok(())
            }

            fn fill_cell(&mut self, _: CellPos, _: Rgb) -> Result<(), SurfaceError> {
                if self.remaining == 0 {
                    return Err(SurfaceError::Detached);
                }
                self.remaining -= 1;
                self.painted += 1;
                Ok(())
            }
        }

        let mut surface = Vanishing {
            remaining: 2,
            painted: 0,
        };
        let result = block_on(reveal_into(&sample_grid(3, 3), &mut surface));
        assert_eq!(result, Err(SurfaceError::Detached));
        assert_eq!(surface.painted, 2);
    }
}
