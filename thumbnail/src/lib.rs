pub mod compose;
pub mod design;
pub mod export;
pub mod telemetry;

use std::path::{Path, PathBuf};

use thumbnail_renderer::FontResolver;

use crate::design::ThumbnailDesign;

/// Composes `design` and writes it to `path`, returning the written path.
pub fn generate(
    design: &ThumbnailDesign,
    fonts: &mut FontResolver,
    path: impl AsRef<Path>,
) -> anyhow::Result<PathBuf> {
    let composition = compose::compose(design, fonts);
    export::export(&composition.canvas, path)
}
