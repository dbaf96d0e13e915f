use std::path::Path;

use crosshatch::{
    binding::ParameterBinding,
    camera::Camera,
    expect,
    film::Film,
    hatch_info,
    renderer::render,
    settings::{LogLevel, Settings},
    textures::PaperTexture,
};

fn setup_logger(level: LogLevel) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(level.into())
        .chain(std::io::stdout())
        .chain(std::fs::File::create("crosshatch.log")?)
        .apply()?;
    Ok(())
}

fn main() {
    let settings_path = std::env::args().nth(1);
    let settings = match &settings_path {
        Some(path) => expect!(Settings::load(Path::new(path)), "Settings loading failed"),
        None => Settings::default(),
    };

    if let Err(why) = setup_logger(settings.log_level) {
        panic!("{}", why);
    };
    match &settings_path {
        Some(path) => hatch_info!("Using settings from '{}'", path),
        None => hatch_info!("Using default settings"),
    }

    let binding = ParameterBinding::new(settings.hatch);
    let paper = PaperTexture::new(&settings.paper);
    let camera = Camera::new(settings.camera, settings.film.res());
    let mut film = Film::new(&settings.film);

    render(
        &mut film,
        &settings.scene,
        &camera,
        &settings.light,
        &paper,
        &binding,
        settings.render,
    );

    expect!(film.write_png(&settings.output), "Failed to write output");
}
