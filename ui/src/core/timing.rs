//! Frame pacing for incremental painting.

/// Nominal frame interval used where no display-refresh callback exists.
pub const FRAME_MS: u64 = 16;

/// Resolves on the next display refresh (`requestAnimationFrame`).
#[cfg(target_arch = "wasm32")]
pub async fn next_frame() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if window.request_animation_frame(&resolve).is_err() {
            let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// The webview repaints on its own schedule; sleeping one frame keeps the
/// reveal at roughly display rate without flooding it with script calls.
#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() {
    tokio::time::sleep(std::time::Duration::from_millis(FRAME_MS)).await;
}
