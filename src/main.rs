use anyhow::Result;
use clap::Parser;
use colored::*;

use gazedir::args::Args;
use gazedir::config::AppConfig;
use gazedir::gaze::{GazeEngine, Geometry};
use gazedir::smoothing::PointSmoother;
use gazedir::speech::ConsoleSpeech;
use gazedir::types::{CameraFacing, Point};

/// Deterministic pupil track standing in for the detector: holds near a rest
/// position while calibration runs, then wanders in a widening circle so
/// every direction band gets visited.
fn simulate_pupil(frame: u32, settle_frames: u32) -> Point {
    let rest = Point::new(120.0, 90.0);
    let t = frame as f32 * 0.05;

    let amplitude = if frame < settle_frames {
        2.0 // calibration jitter only
    } else {
        let ramp = (frame - settle_frames) as f32 / settle_frames as f32;
        (ramp * 60.0).min(60.0)
    };

    Point::new(rest.x + t.cos() * amplitude, rest.y + t.sin() * amplitude)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load()?;

    let fps = args.fps.unwrap_or(config.capture.frames_per_second);
    let facing = match args.facing.as_deref() {
        Some("back") => CameraFacing::Back,
        Some("front") => CameraFacing::Front,
        Some(other) => {
            println!("Unknown facing '{}', using config value.", other);
            config.capture.facing
        }
        None => config.capture.facing,
    };
    let data_dir = args.data_dir.unwrap_or(config.capture.data_dir);
    let frames = args.frames.unwrap_or(config.demo.frames);

    let mut engine = GazeEngine::new(&data_dir, fps, facing, ConsoleSpeech)?;
    engine.set_capture_restart(|| {
        println!("{}", "Capture restarted.".green());
        Ok(())
    });

    if args.recalibrate || !engine.profile().calibrated {
        println!("{}", "Starting calibration. Hold your gaze steady...".yellow());
        engine.reset_calibration()?;
    } else {
        println!(
            "Profile already calibrated (center {:.1}, {:.1}).",
            engine.profile().center_x,
            engine.profile().center_y
        );
    }

    let mut smoother = PointSmoother::new(config.demo.smoothing_alpha);

    // Position window + angle window, both fps * 2 frames
    let settle_frames = fps * 4;

    for frame in 0..frames {
        let raw = simulate_pupil(frame, settle_frames);
        let pupil = smoother.filter(raw);

        // Cadence gate owned by the frame source, not the engine
        let should_act = frame % config.demo.act_interval == 0;

        if let Some(direction) = engine.process_sample(pupil, should_act)? {
            let hud = engine
                .session()
                .center()
                .map(|center| Geometry::derive(pupil, center))
                .map(|g| format!("{:.0} px from center, {:.0} deg", g.distance_to_center, g.angle))
                .unwrap_or_default();
            println!(
                "frame {:>4}: {} ({})",
                frame,
                direction.label().green().bold(),
                hud
            );
        }
    }

    println!("Session state: {:?}", engine.state());
    if let Some(direction) = engine.nearest_direction(Point::new(120.0, 90.0)) {
        println!("Nearest direction at rest position: {}", direction.label());
    }

    Ok(())
}
