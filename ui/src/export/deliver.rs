//! Hands artifacts to the user: a browser download on web, a file in the
//! user's download folder on desktop.

use std::path::PathBuf;

use super::{Artifact, ExportError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The browser took over the download.
    Downloaded,
    Saved(PathBuf),
}

#[cfg(target_arch = "wasm32")]
pub async fn deliver(artifact: Artifact) -> Result<Delivery, ExportError> {
    use wasm_bindgen::JsCast;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let browser = |what: &str| ExportError::Browser(what.to_string());

    let bytes = js_sys::Uint8Array::from(artifact.bytes.as_slice());
    let options = BlobPropertyBag::new();
    options.set_type(artifact.format.mime());
    let blob = Blob::new_with_u8_array_sequence_and_options(
        &js_sys::Array::of1(&bytes.buffer()),
        &options,
    )
    .map_err(|_| browser("blob"))?;
    let href = Url::create_object_url_with_blob(&blob).map_err(|_| browser("object url"))?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| browser("document"))?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(|| browser("anchor"))?;
    link.set_href(&href);
    link.set_download(&artifact.file_name);
    link.click();
    let _ = Url::revoke_object_url(&href);

    Ok(Delivery::Downloaded)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn deliver(artifact: Artifact) -> Result<Delivery, ExportError> {
    let dir = export_dir().ok_or(ExportError::NoExportDir)?;
    save_into(&dir, &artifact).map(Delivery::Saved)
}

#[cfg(not(target_arch = "wasm32"))]
fn save_into(dir: &std::path::Path, artifact: &Artifact) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&artifact.file_name);
    std::fs::write(&path, &artifact.bytes)?;
    Ok(path)
}

/// The user's download folder, else `exports/` in the app's data directory.
#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Option<PathBuf> {
    let downloads = directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|dir| dir.join("Berliner Grau")));
    downloads.or_else(|| {
        directories::ProjectDirs::from("de", "Berliner Grau", "berliner-grau")
            .map(|dirs| dirs.data_dir().join("exports"))
    })
}

#[cfg(target_arch = "wasm32")]
pub async fn copy_text(text: &str) -> Result<(), ExportError> {
    let window = web_sys::window().ok_or_else(|| ExportError::Clipboard("no window".into()))?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| ExportError::Clipboard(format!("{err:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn copy_text(text: &str) -> Result<(), ExportError> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text))
        .map_err(|err| ExportError::Clipboard(err.to_string()))
}
