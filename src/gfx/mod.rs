//! Software rasterizer over a linear 15-bit framebuffer
//!
//! Everything here is plain integer arithmetic against a row-major pixel
//! buffer: packed BGR555 colors, point/rect writes, and an octant-normalized
//! Bresenham line. No floating point, no GPU, no clipping - callers keep
//! geometry inside the surface.

pub mod color;
pub mod line;
pub mod surface;

pub use color::Color;
pub use line::draw_line;
pub use surface::{Rect, Surface};
