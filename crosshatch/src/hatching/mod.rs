//! Procedural cross-hatch strokes.
//!
//! Stages, leaves first: cell noise, directional line field, anti-aliased threshold,
//! ink burn compositing. Everything here is a pure function of its arguments.

mod burn;
mod lines;
mod noise;
mod threshold;

pub use burn::{blend_color_burn, burn, burn_color};
pub use lines::{calc, dominant_center, texcube, STROKE_FREQUENCY};
pub use noise::{cell_center, cell_offset, noise};
pub use threshold::{aastep, luma, smoothstep, step, ScreenDerivatives};
