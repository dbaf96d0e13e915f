#[macro_use]
mod common;
mod ray;
mod spectrum;
mod vector;

pub use common::{FloatValueType, Maxi, Mini, ValueType};
pub use ray::Ray;
pub use spectrum::Spectrum;
pub use vector::{vec2, vec3, vec4, Vec2, Vec3, Vec4};
