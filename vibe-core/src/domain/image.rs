use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Лимит по умолчанию для картинок, пришедших без явного ограничения.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const DATA_URL_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("image is empty")]
    Empty,

    #[error("image is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },

    #[error("unsupported image format")]
    UnsupportedFormat,

    #[error("malformed data url")]
    MalformedDataUrl,
}

/// Самодостаточное представление картинки: `data:<mime>;base64,<payload>`.
///
/// Такую строку можно напрямую подставить в `src` у `<img>`.
/// При десериализации строка проходит те же проверки, что и `from_data_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ImageBlob(String);

impl ImageBlob {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        Self::from_bytes_limited(bytes, usize::MAX)
    }

    pub fn from_bytes_limited(bytes: &[u8], limit: usize) -> Result<Self, ImageError> {
        if bytes.is_empty() {
            return Err(ImageError::Empty);
        }
        if bytes.len() > limit {
            return Err(ImageError::TooLarge {
                size: bytes.len(),
                limit,
            });
        }

        let format = image::guess_format(bytes).map_err(|_| ImageError::UnsupportedFormat)?;
        if !is_displayable(format) {
            return Err(ImageError::UnsupportedFormat);
        }

        Ok(Self(format!(
            "{DATA_URL_PREFIX}{}{BASE64_MARKER}{}",
            format.to_mime_type(),
            STANDARD.encode(bytes)
        )))
    }

    /// Принимает уже готовый data URL (например, из `FileReader`).
    pub fn from_data_url(raw: &str) -> Result<Self, ImageError> {
        Self::from_data_url_limited(raw, DEFAULT_MAX_IMAGE_BYTES)
    }

    /// Декодирует payload и проверяет байты так же, как `from_bytes_limited`:
    /// mime в заголовке должен быть `image/*`, формат берётся из самих байтов.
    pub fn from_data_url_limited(raw: &str, limit: usize) -> Result<Self, ImageError> {
        let rest = raw
            .trim()
            .strip_prefix(DATA_URL_PREFIX)
            .ok_or(ImageError::MalformedDataUrl)?;
        let (mime, payload) = rest
            .split_once(BASE64_MARKER)
            .ok_or(ImageError::MalformedDataUrl)?;
        if !mime.starts_with("image/") {
            return Err(ImageError::UnsupportedFormat);
        }
        let bytes = STANDARD
            .decode(payload)
            .map_err(|_| ImageError::MalformedDataUrl)?;

        Self::from_bytes_limited(&bytes, limit)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn mime_type(&self) -> &str {
        self.0
            .strip_prefix(DATA_URL_PREFIX)
            .and_then(|rest| rest.split_once(BASE64_MARKER))
            .map(|(mime, _)| mime)
            .unwrap_or_default()
    }

    /// Размер исходных байтов (без base64).
    pub fn decoded_len(&self) -> usize {
        let payload = self
            .0
            .split_once(BASE64_MARKER)
            .map(|(_, payload)| payload)
            .unwrap_or_default();
        let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
        (payload.len() / 4 * 3).saturating_sub(padding)
    }
}

impl TryFrom<String> for ImageBlob {
    type Error = ImageError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::from_data_url(&raw)
    }
}

impl From<ImageBlob> for String {
    fn from(blob: ImageBlob) -> Self {
        blob.0
    }
}

impl fmt::Display for ImageBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} image, {} bytes]", self.mime_type(), self.decoded_len())
    }
}

fn is_displayable(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png
            | ImageFormat::Jpeg
            | ImageFormat::Gif
            | ImageFormat::WebP
            | ImageFormat::Bmp
            | ImageFormat::Ico
    )
}
