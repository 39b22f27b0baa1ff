use flow_tracker::config::flow as config;
use flow_tracker::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use flow_tracker::image::GrayImageU8;
use flow_tracker::pyramid::Pyramid;
use flow_tracker::{FlowTracker, Point};
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    let Some(config_path) = env::args().nth(1).map(PathBuf::from) else {
        eprintln!("usage: flow_demo <config.json>");
        process::exit(2);
    };

    let config = config::load(&config_path).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    let old = load_or_exit(&config.old_frame);
    let new = load_or_exit(&config.new_frame);

    let points = seed_grid(&old, &config.seed);
    let params = config.tracker.to_params();
    let mut tracker = FlowTracker::new(params);

    let report = tracker
        .track_with_diagnostics(new.as_view(), old.as_view(), &points)
        .unwrap_or_else(|e| {
            eprintln!("tracking failed: {e}");
            process::exit(1);
        });

    println!(
        "tracked {}/{} points in {:.3} ms",
        report.result.vectors.len(),
        report.result.attempted,
        report.result.latency_ms
    );
    for stage in &report.trace.levels {
        println!(
            "  L{}: {}x{} in={} survived={} rejected={}",
            stage.level_index,
            stage.width,
            stage.height,
            stage.points_in,
            stage.survived,
            stage.outcomes.rejected()
        );
    }

    if let Some(path) = &config.output.report {
        if let Err(e) = write_json_file(path, &report) {
            eprintln!("{e}");
            process::exit(1);
        }
        println!("report written to {}", path.display());
    }

    if let Some(dir) = &config.output.pyramid_dir {
        let pyramid = Pyramid::build(old.as_view(), config.tracker.pyramid_depth);
        for (level, image) in pyramid.levels.iter().enumerate() {
            let path = dir.join(format!("level_{level}.png"));
            if let Err(e) = save_grayscale_u8(image, &path) {
                eprintln!("{e}");
                process::exit(1);
            }
        }
        println!("pyramid levels written to {}", dir.display());
    }
}

fn load_or_exit(path: &std::path::Path) -> GrayImageU8 {
    load_grayscale_image(path).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    })
}

/// Seed a regular grid of candidate points inside the frame margins.
fn seed_grid(frame: &GrayImageU8, seed: &config::SeedGridConfig) -> Vec<Point> {
    let step = seed.step.max(1);
    let mut points = Vec::new();
    let mut y = seed.margin;
    while (y as usize) < frame.h.saturating_sub(seed.margin as usize) {
        let mut x = seed.margin;
        while (x as usize) < frame.w.saturating_sub(seed.margin as usize) {
            points.push(Point { x, y });
            x += step;
        }
        y += step;
    }
    points
}
