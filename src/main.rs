//! Pittari Laser entry point
//!
//! Native builds run the game headlessly under the autopilot: useful for
//! soak-testing the simulation and for watching the logs.
//!
//! Usage: `pittari-laser [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use pittari_laser::app::{Autopilot, run_frames};
    use pittari_laser::consts::FPS;
    use pittari_laser::renderer::VertexCanvas;
    use pittari_laser::{App, Settings};

    env_logger::init();
    log::info!("Pittari Laser (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let frames = settings.demo_frames;

    let mut app = App::new(settings);
    let mut pilot = Autopilot::new();
    let mut canvas = VertexCanvas::new();

    log::info!(
        "Running {} frames ({}s at {} FPS) on autopilot",
        frames,
        frames / FPS as u64,
        FPS
    );
    let summary = run_frames(&mut app, &mut pilot, &mut canvas, frames);

    println!("Frames:      {}", summary.frames);
    println!("Shots:       {}", summary.shots);
    println!("Rounds won:  {}", summary.rounds_won);
    println!("Games over:  {}", summary.games_over);
    println!("Best score:  {}", summary.best_score);
    println!("Final score: {}", app.state.score());
    println!(
        "Last frame:  {} vertices, {} text runs",
        canvas.vertices().len(),
        canvas.texts().len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web builds are driven by the host page through the library API
}
