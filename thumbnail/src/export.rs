use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::ImageFormat;
use thumbnail_renderer::Canvas;

/// Writes `canvas` as a PNG at `path`, creating parent directories and
/// overwriting any existing file.
pub fn export(canvas: &Canvas, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    canvas
        .image()
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(
        width = canvas.width(),
        height = canvas.height(),
        "wrote {}",
        path.display()
    );
    Ok(path.to_path_buf())
}
