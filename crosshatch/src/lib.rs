//! Procedural cross-hatch ink shading.
//!
//! [`engine::shade`] turns a lit surface fragment into ink strokes burned onto paper.
//! The rest of the crate is a small software host around it: a view-space ray caster
//! with a standard metalness/roughness surface, a procedural paper texture and a
//! parallel frame renderer, plus a [`binding::ParameterBinding`] for live tweaking.

#[macro_use]
pub mod macros;

pub mod binding;
pub mod camera;
pub mod engine;
pub mod film;
pub mod hatching;
pub mod math;
pub mod params;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod surface;
pub mod textures;

#[doc(hidden)]
pub use log;
