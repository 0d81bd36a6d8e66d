use anyhow::Result;
use thumbnail::{
    design::{OUTPUT_PATH, ThumbnailDesign},
    telemetry,
};
use thumbnail_renderer::FontResolver;

fn main() -> Result<()> {
    telemetry::init()?;

    let path = thumbnail::generate(
        &ThumbnailDesign::default(),
        &mut FontResolver::default(),
        OUTPUT_PATH,
    )?;
    println!("Saved: {}", path.display());

    Ok(())
}
