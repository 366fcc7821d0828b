use js_sys::Uint8Array;
use vibe_core::{DEFAULT_MAX_IMAGE_BYTES, ImageBlob};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

/// Читает первый выбранный файл и кодирует его в data URL.
/// `Ok(None)`, если файл не выбран.
pub(crate) async fn read_image(input: &HtmlInputElement) -> Result<Option<ImageBlob>, String> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("failed to read {}", file.name()))?;
    let bytes = Uint8Array::new(&buffer).to_vec();

    ImageBlob::from_bytes_limited(&bytes, DEFAULT_MAX_IMAGE_BYTES)
        .map(Some)
        .map_err(|err| format!("{}: {err}", file.name()))
}
