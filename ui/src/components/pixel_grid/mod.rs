//! Magnified, hoverable rendering of a snapshot grid.
//!
//! A new grid is revealed cell by cell (one per frame) unless the owner says
//! its reveal already completed, in which case it is painted in one pass.
//! Only a change of the grid itself restarts the reveal.

use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;

use crate::core::config::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use crate::core::grid::{coordinates_label, DisplaySize, Grid, HoveredPixel};
use crate::core::raster::{paint_immediate, SurfaceError};
use crate::core::reveal::{paint_plan, reveal_into, PaintPlan};

mod canvas;
use canvas::CanvasSurface;

mod tooltip;
pub use tooltip::PixelTooltip;

static NEXT_CANVAS_ID: AtomicUsize = AtomicUsize::new(0);

fn next_canvas_id() -> String {
    format!("pixel-grid-{}", NEXT_CANVAS_ID.fetch_add(1, Ordering::Relaxed))
}

#[component]
pub fn PixelGrid(
    grid: Grid,
    // `Some(true)` when this grid was already revealed once; it is then painted immediately.
    animation_complete: Option<bool>,
    latitude: Option<String>,
    longitude: Option<String>,
    // Fired once the reveal of the current grid finishes.
    on_revealed: Option<EventHandler<()>>,
) -> Element {
    let canvas_id = use_hook(next_canvas_id);
    let mut animating = use_signal(|| false);
    let mut hovered = use_signal(|| Option::<HoveredPixel>::None);
    let mut display = use_signal(|| Option::<DisplaySize>::None);
    let mut pointer_inside = use_signal(|| false);
    let mut mounted = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut painted = use_signal(|| Option::<Grid>::None);
    let mut reveal_task = use_signal(|| Option::<Task>::None);

    let effect_canvas_id = canvas_id.clone();
    let view_grid = grid.clone();
    use_effect(use_reactive!(|(grid, animation_complete)| {
        let plan = paint_plan(
            painted.peek().as_ref(),
            &grid,
            animation_complete.unwrap_or(false),
        );
        if plan == PaintPlan::Skip {
            return;
        }
        if let Some(task) = reveal_task.write().take() {
            task.cancel();
        }
        hovered.set(None);
        painted.set(Some(grid.clone()));

        let mut surface = CanvasSurface::attach(&effect_canvas_id);
        match plan {
            PaintPlan::Skip | PaintPlan::Clear => animating.set(false),
            PaintPlan::Immediate => {
                animating.set(false);
                if let Err(err) = paint_immediate(&grid, &mut surface) {
                    tracing::debug!(%err, "immediate paint skipped");
                }
            }
            PaintPlan::Animate => {
                animating.set(true);
                tracing::debug!(
                    rows = grid.rows(),
                    columns = grid.columns(),
                    "starting grid reveal"
                );
                let task = spawn(async move {
                    match reveal_into(&grid, &mut surface).await {
                        Ok(()) => {
                            animating.set(false);
                            if let Some(handler) = on_revealed {
                                handler.call(());
                            }
                        }
                        Err(SurfaceError::Detached) => {
                            tracing::debug!("grid canvas detached, reveal stopped");
                        }
                        Err(err) => {
                            animating.set(false);
                            tracing::warn!(%err, "grid reveal aborted");
                        }
                    }
                });
                reveal_task.set(Some(task));
            }
        }
    }));

    let coordinates = coordinates_label(
        latitude.as_deref().unwrap_or(DEFAULT_LATITUDE),
        longitude.as_deref().unwrap_or(DEFAULT_LONGITUDE),
    );
    let dimensions = view_grid.dimensions_label();
    let canvas_class = if animating() {
        "pixel-grid__canvas pixel-grid__canvas--revealing"
    } else {
        "pixel-grid__canvas"
    };
    let has_cells = !view_grid.is_empty();

    rsx! {
        div { class: "pixel-grid",
            if has_cells {
                canvas {
                    id: "{canvas_id}",
                    class: canvas_class,
                    role: "img",
                    aria_label: "{dimensions}",
                    onmounted: move |evt: MountedEvent| {
                        let data = evt.data();
                        mounted.set(Some(data.clone()));
                        async move {
                            if let Some(size) = measure(&data).await {
                                display.set(Some(size));
                            }
                        }
                    },
                    onmousemove: move |evt: MouseEvent| {
                        let local = evt.element_coordinates();
                        let client = evt.client_coordinates();
                        let element = mounted.peek().clone();
                        let grid = view_grid.clone();
                        pointer_inside.set(true);
                        // Layout can change under a resting pointer (resize, zoom, the
                        // backing store being sized after mount), so measure per move.
                        async move {
                            let measured = match element {
                                Some(data) => measure(&data).await,
                                None => None,
                            };
                            if measured.is_some() {
                                display.set(measured);
                            }
                            if !*pointer_inside.peek() {
                                return;
                            }
                            let size = DisplaySize::latest(measured, *display.peek());
                            hovered.set(grid.pointer_query((local.x, local.y), size, (client.x, client.y)));
                        }
                    },
                    onmouseleave: move |_| {
                        pointer_inside.set(false);
                        hovered.set(None);
                    },
                }
            }

            p { class: "pixel-grid__meta",
                span { class: "pixel-grid__coordinates", "{coordinates}" }
                " - "
                span { class: "pixel-grid__dimensions", "{dimensions}" }
            }

            if let Some(pixel) = hovered() {
                PixelTooltip { pixel }
            }
        }
    }
}

async fn measure(data: &MountedData) -> Option<DisplaySize> {
    match data.get_client_rect().await {
        Ok(rect) => Some(DisplaySize {
            width: rect.width(),
            height: rect.height(),
        }),
        Err(err) => {
            tracing::debug!(?err, "grid canvas size unavailable");
            None
        }
    }
}
