use std::time::Instant;

use crosshatch::{
    binding::ParameterBinding,
    camera::{Camera, CameraParameters},
    engine::{shade, Differentials, SurfaceSample},
    film::{Film, FilmSettings},
    math::{Spectrum, Vec3, Vec4},
    params::HatchParameters,
    renderer::{render, RenderSettings},
    scene::{LightSettings, Scene},
    textures::{PaperSettings, PaperTexture},
};

const ITERATIONS: usize = 2_000_000;

fn bench_shade(with_differentials: bool) {
    let params = HatchParameters::default();
    let mut sample = SurfaceSample {
        position_view: Vec4::new(0.0, 0.0, -4.0, 1.0),
        normal: Vec3::new(0.0, 0.0, 1.0),
        base_color: Spectrum::splat(0.5),
        paper_color: Spectrum::splat(0.95),
        differentials: if with_differentials {
            Some(Differentials {
                dpdx: Vec4::new(0.005, 0.0, 0.0, 0.0),
                dpdy: Vec4::new(0.0, 0.005, 0.0, 0.0),
            })
        } else {
            None
        },
    };

    let start = Instant::now();
    let mut acc = 0.0;
    for i in 0..ITERATIONS {
        sample.position_view.x = (i as f32) * 1e-4;
        acc += shade(&sample, &params).color.r;
    }
    if acc.is_nan() {
        panic!("We only wanted to force the loop to be executed!")
    }
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let ns_per_shade = (elapsed_ns as f64) / (ITERATIONS as f64);
    println!(
        "Shade ({:>14}) took {:6.1} ms total, {:0.2} ns per fragment",
        if with_differentials {
            "differentials"
        } else {
            "hard step"
        },
        elapsed_ms,
        ns_per_shade
    );
}

fn bench_frame(use_single_render_thread: bool) {
    let film_settings = FilmSettings {
        width: 1280,
        height: 720,
    };
    let mut film = Film::new(&film_settings);
    let camera = Camera::new(CameraParameters::default(), film_settings.res());
    let paper = PaperTexture::new(&PaperSettings::default());
    let binding = ParameterBinding::default();

    let result = render(
        &mut film,
        &Scene::default(),
        &camera,
        &LightSettings::default(),
        &paper,
        &binding,
        RenderSettings {
            use_single_render_thread,
        },
    );
    println!(
        "Frame    ({:>14}) took {:6.1} ms total",
        if use_single_render_thread {
            "single thread"
        } else {
            "parallel"
        },
        result.secs * 1e3
    );
}

fn main() {
    bench_shade(false);
    bench_shade(true);
    bench_frame(true);
    bench_frame(false);
}
