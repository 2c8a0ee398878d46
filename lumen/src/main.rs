use log::info;
use rand::Rng;
use rayon::prelude::*;
use std::time::Instant;

use lumen::{
    camera::Camera,
    expect,
    math::Spectrum,
    presets,
    sampling::create_rng,
    settings::RenderSettings,
};

fn setup_logger() -> Result<(), fern::InitError> {
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
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("lumen.log")?)
        .apply()?;
    Ok(())
}

fn main() {
    expect!(setup_logger(), "Failed to set up logging");

    let settings = match std::env::args().nth(1) {
        Some(path) => expect!(RenderSettings::load(&path), "Failed to load settings"),
        None => RenderSettings::default(),
    };

    let (scene, camera_params) = presets::cornell_box();
    let camera = Camera::new(camera_params, (settings.width, settings.height));

    // Stream 0 drives the photon pass, streams 1.. the render rows
    let mut rng = create_rng(settings.seed, 0);
    let integrator = settings
        .integrator
        .instantiate(&scene, &settings.photons, &mut rng);

    info!(
        "rendering {}x{} at {} samples with {}",
        settings.width, settings.height, settings.samples, settings.integrator
    );
    let render_start = Instant::now();

    let rows: Vec<Vec<Spectrum>> = (0..settings.height)
        .into_par_iter()
        .map(|y| {
            let mut rng = create_rng(settings.seed, 1 + y as u64);
            let mut row = Vec::with_capacity(settings.width as usize);
            for x in 0..settings.width {
                let mut color = Spectrum::zeros();
                for _ in 0..settings.samples {
                    let jx: f32 = rng.gen();
                    let jy: f32 = rng.gen();
                    let ray = camera.ray(x as f32 + jx, y as f32 + jy);
                    color += integrator.li(ray, &scene, &mut rng);
                }
                row.push(color / settings.samples as f32);
            }
            row
        })
        .collect();

    info!(
        "render took {:.2}s",
        render_start.elapsed().as_secs_f32()
    );

    let mut image = image::RgbImage::new(settings.width, settings.height);
    for (y, row) in rows.iter().enumerate() {
        for (x, color) in row.iter().enumerate() {
            // Clamp and apply the display gamma of 2
            let c = color.clamped();
            image.put_pixel(
                x as u32,
                y as u32,
                image::Rgb([
                    (c.r.sqrt() * 255.0) as u8,
                    (c.g.sqrt() * 255.0) as u8,
                    (c.b.sqrt() * 255.0) as u8,
                ]),
            );
        }
    }
    expect!(image.save("render.png"), "Failed to write render.png");
    info!("wrote render.png");
}
