//! Raster drawing utilities for the thumbnail generator.
//!
//! This crate provides a small RGB canvas with the primitives the thumbnail
//! needs: rings, thick lines and polylines, and horizontally centred text
//! rendered either from an outline font found on the system (via `fontdb` and
//! `fontdue`) or from an embedded bitmap font when no outline font loads.

pub mod builtin;
pub mod canvas;
pub mod font;
pub mod shape;
pub mod text;

pub use canvas::{Canvas, Color};
pub use font::{Font, FontError, FontRequest, FontResolver, FontSource};
pub use text::TextBounds;
