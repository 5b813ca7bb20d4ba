mod input;
mod spec;

pub use input::{resolve_input, RgbInput};
pub use spec::{normalize_hex, parse_rgb, render, ColorSpec, RenderedColor};
