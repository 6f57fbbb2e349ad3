//! Headless demo driver: runs a scripted drag and spin-down against a
//! recording surface, standing in for the platform's canvas and pointer
//! source.

use std::path::Path;

use foundation::math::Vec2;
use render::surface::RecordingSurface;
use runtime::ticker::Ticker;
use tracing::info;
use tracing_subscriber::EnvFilter;
use viewer::{SphereApp, ViewerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ViewerConfig::load(Path::new(&path))?,
        None => ViewerConfig::default(),
    };
    info!(?config, "starting sphere viewer (headless)");

    let mut app = SphereApp::new(&config, RecordingSurface::new());
    let mut ticker = Ticker::new(config.dt_s());
    ticker.start();

    // Hover, then a short drag across the surface.
    app.pointer_move(Vec2::new(400.0, 300.0), 0.0);
    info!(highlighted = ?app.highlighted(), "hover pick");

    app.pointer_down(Vec2::new(200.0, 300.0), 10.0);
    for step in 1..=10 {
        let t_ms = 10.0 + step as f64 * 16.0;
        app.pointer_move(Vec2::new(200.0 + step as f64 * 30.0, 300.0), t_ms);
        ticker.tick(&mut app);
    }
    app.pointer_up();
    info!(velocity = ?app.controller().velocity(), "drag released");

    // Let the inertia decay to rest.
    let mut frames = 0u64;
    while app.controller().velocity() != Vec2::ZERO {
        ticker.tick(&mut app);
        frames += 1;
        if frames > 10_000 {
            return Err("spin-down did not terminate".into());
        }
    }
    info!(frames, "spin-down settled");

    ticker.tick(&mut app);
    info!(
        ops = app.surface().ops.len(),
        lines = app.surface().lines().count(),
        quads = app.surface().quads().count(),
        "recorded surface calls"
    );

    ticker.stop();
    ticker.stop(); // idempotent
    info!(running = ticker.is_running(), "stopped");
    Ok(())
}
