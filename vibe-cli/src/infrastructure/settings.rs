use anyhow::{Context, Result, anyhow};
use vibe_core::DEFAULT_MAX_IMAGE_BYTES;

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) log_level: String,
    pub(crate) max_image_bytes: usize,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        let max_image_bytes = parse_usize(
            "VIBE_MAX_IMAGE_BYTES",
            std::env::var("VIBE_MAX_IMAGE_BYTES").ok(),
            DEFAULT_MAX_IMAGE_BYTES,
        )?;

        Ok(Self {
            log_level,
            max_image_bytes,
        })
    }
}

fn parse_usize(key: &str, raw: Option<String>, default: usize) -> Result<usize> {
    let value = match raw {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?,
        None => default,
    };

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
