//! Floor Survivor entry point
//!
//! Runs a headless game driven by the autopilot and logs what happens.
//! Usage: `floor-survivor [settings.json]`, with `RUST_LOG=info` (or `debug`
//! for per-second summaries).

use floor_survivor::Settings;
use floor_survivor::platform::{Autopilot, LogRenderer, run_frames};

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{}", err);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let seed = settings.resolved_seed();
    log::info!(
        "Floor Survivor (headless) starting: seed={} arena={}x{} frames={}",
        seed,
        settings.arena_width,
        settings.arena_height,
        settings.frames
    );

    let mut state = settings.new_game(seed);
    let mut pilot = Autopilot::default();
    let mut renderer = LogRenderer::new(settings.summary_every);
    run_frames(&mut state, &mut pilot, &mut renderer, settings.frames);

    println!(
        "seed {}: {} frames, {:?} on floor {}, {} total kills, {}/{} hearts",
        seed,
        renderer.frames(),
        state.phase,
        state.floor,
        state.total_kills,
        state.player.hearts,
        state.player.max_hearts
    );
}
