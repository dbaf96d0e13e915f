use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::{
    binding::ParameterBinding,
    camera::Camera,
    engine::{shade, Differentials, SurfaceSample},
    film::Film,
    math::{Spectrum, Vec2},
    params::HatchParameters,
    scene::{Hit, LightSettings, Scene},
    surface::{DirectionalLight, StandardSurface},
    textures::Texture,
};

#[derive(Debug, Default, Copy, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderSettings {
    pub use_single_render_thread: bool,
}

#[derive(Debug, Copy, Clone)]
pub struct RenderResult {
    pub secs: f32,
}

/// Everything a pixel needs, shared read-only by all render threads.
struct FrameContext<'a> {
    scene: &'a Scene,
    camera: &'a Camera,
    light: DirectionalLight,
    ambient: Spectrum<f32>,
    paper: &'a dyn Texture<Spectrum<f32>>,
    params: HatchParameters,
}

/// Renders `scene` into `film` with the parameters currently held by `binding`.
///
/// The parameters are snapshotted once, so a concurrent edit applies from the next frame.
pub fn render(
    film: &mut Film,
    scene: &Scene,
    camera: &Camera,
    lights: &LightSettings,
    paper: &dyn Texture<Spectrum<f32>>,
    binding: &ParameterBinding,
    settings: RenderSettings,
) -> RenderResult {
    let start = Instant::now();

    let ctx = FrameContext {
        scene,
        camera,
        light: lights.light(),
        ambient: lights.ambient,
        paper,
        params: binding.snapshot(),
    };
    hatch_debug!("render: Parameters {:?}", ctx.params);

    let res = film.res();
    hatch_info!(
        "Rendering {}x{} ({})",
        res.x,
        res.y,
        if settings.use_single_render_thread {
            "single thread"
        } else {
            "parallel"
        }
    );

    let width = res.x as usize;
    let render_row = |(y, row): (usize, &mut [Spectrum<f32>])| {
        for (x, px) in row.iter_mut().enumerate() {
            *px = shade_pixel(&ctx, x, y);
        }
    };
    if settings.use_single_render_thread {
        film.pixels_mut()
            .chunks_mut(width)
            .enumerate()
            .for_each(render_row);
    } else {
        film.pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(render_row);
    }

    let secs = start.elapsed().as_secs_f32();
    hatch_info!("Render finished in {:.2}s", secs);
    RenderResult { secs }
}

fn shade_pixel(ctx: &FrameContext, x: usize, y: usize) -> Spectrum<f32> {
    let res = ctx.camera.res();
    let raster = Vec2 {
        x: x as f32 + 0.5,
        y: y as f32 + 0.5,
    };
    // Fragment coordinates have their origin at the bottom left
    let frag_coord = Vec2 {
        x: raster.x,
        y: (res.y as f32) - raster.y,
    };
    let paper = ctx.paper.sample_screen(frag_coord);

    let ray = ctx.camera.ray(raster);
    match ctx.scene.intersect(&ray) {
        Some(hit) => {
            let surface =
                StandardSurface::new(hit.albedo, ctx.params.roughness, ctx.params.metalness);
            let base_color = surface.shade(hit.n, -ray.d, &ctx.light, ctx.ambient);

            let sample = SurfaceSample {
                position_view: hit.p.extend(1.0),
                normal: hit.n,
                base_color,
                paper_color: paper,
                differentials: differentials(ctx.camera, &hit, raster),
            };
            shade(&sample, &ctx.params).color
        }
        None => paper,
    }
}

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Texture/Sampling_and_Antialiasing#FindingtheTextureSamplingRate

/// Finds the position change toward the neighbouring pixels by intersecting their
/// camera rays with the tangent plane at `hit`.
fn differentials(camera: &Camera, hit: &Hit, raster: Vec2<f32>) -> Option<Differentials> {
    let offset = |dx: f32, dy: f32| {
        let ray = camera.ray(Vec2 {
            x: raster.x + dx,
            y: raster.y + dy,
        });
        let denom = hit.n.dot(ray.d);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = hit.n.dot(hit.p - ray.o) / denom;
        let dp = ray.point(t) - hit.p;
        if dp.is_finite() {
            Some(dp.extend(0.0))
        } else {
            None
        }
    };

    Some(Differentials {
        dpdx: offset(1.0, 0.0)?,
        dpdy: offset(0.0, 1.0)?,
    })
}
