use super::noise::{cell_center, cell_offset};
use crate::math::{Vec2, Vec3};

/// Stroke frequency along a cell's gradient direction at `freq = 1`.
pub const STROKE_FREQUENCY: f32 = 15.0;

// Used when a cell's gradient direction degenerates to zero
const FALLBACK_DIRECTION: Vec2<f32> = Vec2 { x: 1.0, y: 0.0 };

const CELL_CORNERS: [Vec2<f32>; 4] = [
    Vec2 { x: 0.0, y: 0.0 },
    Vec2 { x: 0.0, y: 1.0 },
    Vec2 { x: 1.0, y: 0.0 },
    Vec2 { x: 1.0, y: 1.0 },
];

/// Picks `b` only if `a` is strictly farther from `uv`, ties keep `a`.
#[inline]
fn nearer(uv: Vec2<f32>, a: Vec2<f32>, b: Vec2<f32>) -> Vec2<f32> {
    if (a - uv).len() > (b - uv).len() {
        b
    } else {
        a
    }
}

/// Finds the dominant jittered cell center for `uv`.
///
/// The four surrounding centers are reduced pairwise as `(00, 01)`, `(10, 11)` and then
/// the two survivors. This is not a plain closest-of-four: the pairing decides ties and
/// therefore where the seams between stroke cells land.
pub fn dominant_center(uv: Vec2<f32>) -> Vec2<f32> {
    let base = uv.floor();
    let [uv00, uv01, uv10, uv11] = CELL_CORNERS.map(|corner| cell_center(base + corner));

    let uv0 = nearer(uv, uv00, uv01);
    let uv1 = nearer(uv, uv10, uv11);
    nearer(uv, uv0, uv1)
}

/// Scalar line intensity of a single planar projection.
///
/// Returns `0.5 - sin(15 * freq * g)` where `g` is the offset from the dominant cell
/// center projected on that cell's pseudo-random direction. The result lies in
/// `[-0.5, 1.5]`; orientation and spacing change from cell to cell.
pub fn calc(uv: Vec2<f32>, freq: f32) -> f32 {
    let uv_c = dominant_center(uv);
    let uv_l = uv - uv_c;
    let dir = cell_offset(uv_c).normalized_or(FALLBACK_DIRECTION);
    let g = uv_l.dot(dir);
    0.5 - (STROKE_FREQUENCY * freq * g).sin()
}

/// Tri-planar blend of [`calc`] over the `yz`, `zx` and `xy` projections of `p`.
///
/// Each projection is weighted by the squared normal component along the axis it is
/// orthogonal to. For a unit `n` the weights sum to one so the result stays within the
/// range of the three planar values.
pub fn texcube(p: Vec3<f32>, n: Vec3<f32>, freq: f32) -> f32 {
    let v = Vec3 {
        x: calc(p.yz(), freq),
        y: calc(p.zx(), freq),
        z: calc(p.xy(), freq),
    };
    v.dot(n.mul_element(n))
}
