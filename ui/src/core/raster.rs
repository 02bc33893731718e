//! Paint targets for the magnified grid.
//!
//! `Surface` is the seam between the grid logic and whatever actually holds
//! pixels: a browser canvas, a webview canvas driven by script, or the
//! in-memory [`Raster`] used for PNG export and tests.

use super::color::Rgb;
use super::grid::{CellPos, Grid, CELL_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The backing element is no longer in the document.
    #[error("surface detached")]
    Detached,
    #[error("surface unavailable: {0}")]
    Unavailable(String),
}

pub trait Surface {
    /// Resize the backing store to `width × height` and clear it.
    fn reset(&mut self, width: u32, height: u32) -> Result<(), SurfaceError>;

    /// Fill the `CELL_SIZE` square of one grid cell.
    fn fill_cell(&mut self, pos: CellPos, color: Rgb) -> Result<(), SurfaceError>;
}

/// Sizes the surface for `grid` and paints every cell in one pass.
/// An empty grid leaves the surface untouched.
pub fn paint_immediate<S: Surface + ?Sized>(grid: &Grid, surface: &mut S) -> Result<(), SurfaceError> {
    if grid.is_empty() {
        return Ok(());
    }
    let (width, height) = grid.surface_size();
    surface.reset(width, height)?;
    for (pos, color) in grid.cells() {
        surface.fill_cell(pos, color)?;
    }
    Ok(())
}

/// Owned RGBA buffer at backing resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Immediate rendering of `grid` into a fresh raster.
    pub fn render(grid: &Grid) -> Self {
        let mut raster = Self::default();
        // An in-memory raster never detaches.
        let _ = paint_immediate(grid, &mut raster);
        raster
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels
            .get(offset..offset + 4)
            .and_then(|px| px.try_into().ok())
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, String> {
        if self.width == 0 || self.height == 0 {
            return Err("Nothing to encode for an empty grid".into());
        }
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().map_err(|err| err.to_string())?;
            writer
                .write_image_data(&self.pixels)
                .map_err(|err| err.to_string())?;
            writer.finish().map_err(|err| err.to_string())?;
        }
        Ok(out)
    }
}

impl Surface for Raster {
    fn reset(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        *self = Raster::new(width, height);
        Ok(())
    }

    fn fill_cell(&mut self, pos: CellPos, color: Rgb) -> Result<(), SurfaceError> {
        let x0 = pos.column as u32 * CELL_SIZE;
        let y0 = pos.row as u32 * CELL_SIZE;
        let rgba = [color.r(), color.g(), color.b(), 255];
        for y in y0..(y0 + CELL_SIZE).min(self.height) {
            let row_start = (y as usize * self.width as usize) * 4;
            for x in x0..(x0 + CELL_SIZE).min(self.width) {
                let offset = row_start + x as usize * 4;
                self.pixels[offset..offset + 4].copy_from_slice(&rgba);
            }
        }
        Ok(())
    }
}
