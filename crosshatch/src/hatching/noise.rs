use crate::math::Vec2;

// Changing either of these reshuffles every stroke
const HASH_DIR: Vec2<f32> = Vec2 {
    x: 134.0,
    y: 1.61034,
};
const HASH_SCALE: Vec2<f32> = Vec2 {
    x: 416_418.0,
    y: 1_265.748_6,
};

// Largest f32 below one. Rounding in `fract` can otherwise produce exactly 1.0
const MAX_FRACT: f32 = 1.0 - f32::EPSILON / 2.0;

/// Deterministic per-cell pseudo-random vector in `[0, 1)^2`.
///
/// Deliberately discontinuous: neighbouring inputs hash to unrelated outputs.
/// Identical input always yields bit-identical output.
#[inline]
pub fn noise(cell: Vec2<f32>) -> Vec2<f32> {
    let h = cell.dot(HASH_DIR).cos();
    (HASH_SCALE * h).fract().map(|v| v.min(MAX_FRACT))
}

/// [`noise`] centered on zero, in `[-0.5, 0.5)^2`.
#[inline]
pub fn cell_offset(cell: Vec2<f32>) -> Vec2<f32> {
    noise(cell) - 0.5
}

/// Jittered center of the lattice cell with integer corner `cell`.
#[inline]
pub fn cell_center(cell: Vec2<f32>) -> Vec2<f32> {
    cell.ceil() + cell_offset(cell)
}
