//! `<canvas>` backed paint surfaces.
//!
//! Both variants look the canvas up by id on every call. On web a removed
//! canvas ends the reveal with `Detached`; on desktop the script skips it.

use crate::core::color::Rgb;
use crate::core::grid::{CellPos, CELL_SIZE};
use crate::core::raster::{Surface, SurfaceError};

/// Direct 2D-context painting through `web-sys`.
#[cfg(target_arch = "wasm32")]
pub struct CanvasSurface {
    id: String,
}

#[cfg(target_arch = "wasm32")]
impl CanvasSurface {
    pub fn attach(id: &str) -> Self {
        Self { id: id.to_string() }
    }

    fn canvas(&self) -> Result<web_sys::HtmlCanvasElement, SurfaceError> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SurfaceError::Unavailable("document unavailable".into()))?;
        document
            .get_element_by_id(&self.id)
            .ok_or(SurfaceError::Detached)?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| SurfaceError::Unavailable("element is not a canvas".into()))
    }

    fn context(&self) -> Result<web_sys::CanvasRenderingContext2d, SurfaceError> {
        use wasm_bindgen::JsCast;

        self.canvas()?
            .get_context("2d")
            .map_err(|_| SurfaceError::Unavailable("2d context unavailable".into()))?
            .ok_or_else(|| SurfaceError::Unavailable("2d context missing".into()))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Unavailable("2d context cast failed".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl Surface for CanvasSurface {
    fn reset(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        // Assigning the size also clears the bitmap.
        let canvas = self.canvas()?;
        canvas.set_width(width);
        canvas.set_height(height);
        Ok(())
    }

    #[allow(deprecated)]
    fn fill_cell(&mut self, pos: CellPos, color: Rgb) -> Result<(), SurfaceError> {
        let context = self.context()?;
        let size = CELL_SIZE as f64;
        context.set_fill_style(&wasm_bindgen::JsValue::from_str(&color.css()));
        context.fill_rect(pos.column as f64 * size, pos.row as f64 * size, size, size);
        Ok(())
    }
}

/// Webview canvas painted through `document::eval`.
///
/// Scripts are fire-and-forget: the webview answers asynchronously, so this
/// surface never reports [`SurfaceError::Detached`]. A missing canvas is
/// skipped on the script side, and the reveal task stops because it is
/// dropped with the component.
#[cfg(not(target_arch = "wasm32"))]
pub struct CanvasSurface {
    id: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl CanvasSurface {
    pub fn attach(id: &str) -> Self {
        Self { id: id.to_string() }
    }

    /// Wraps `body` so it only runs while the canvas is in the document.
    fn guarded(&self, body: &str) -> String {
        format!(
            "const canvas = document.getElementById({id:?}); if (canvas) {{ {body} }}",
            id = self.id
        )
    }

    fn run(&self, body: &str) -> Result<(), SurfaceError> {
        let _ = dioxus::prelude::document::eval(&self.guarded(body));
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Surface for CanvasSurface {
    fn reset(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        self.run(&format!("canvas.width = {width}; canvas.height = {height};"))
    }

    fn fill_cell(&mut self, pos: CellPos, color: Rgb) -> Result<(), SurfaceError> {
        self.run(&fill_script(pos, color))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn fill_script(pos: CellPos, color: Rgb) -> String {
    let x = pos.column as u32 * CELL_SIZE;
    let y = pos.row as u32 * CELL_SIZE;
    format!(
        "const ctx = canvas.getContext(\"2d\"); ctx.fillStyle = \"{css}\"; ctx.fillRect({x}, {y}, {s}, {s});",
        css = color.css(),
        s = CELL_SIZE
    )
}
