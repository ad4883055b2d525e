//! Headless demo of the session core wired to a stub engine.
//!
//! Usage: cargo run --example transport -- <file-or-url>...

use std::path::Path;

use cyclops_player::{
    CaptureError, EngineError, PlaybackEngine, PlaybackState, PlayerSession, RecentItems,
    SurfaceHandle,
};

/// Engine stand-in that prints transport calls instead of decoding.
struct StubEngine {
    state: PlaybackState,
}

impl PlaybackEngine for StubEngine {
    fn open(&mut self, reference: &str) -> Result<(), EngineError> {
        println!("engine: open {reference}");
        Ok(())
    }

    fn play(&mut self) -> Result<(), EngineError> {
        println!("engine: play");
        self.state = PlaybackState::Playing;
        Ok(())
    }

    fn pause(&mut self) {
        println!("engine: pause");
        self.state = PlaybackState::Paused;
    }

    fn stop(&mut self) {
        println!("engine: stop");
        self.state = PlaybackState::Stopped;
    }

    fn attach_to_surface(&mut self, surface: SurfaceHandle) -> Result<(), EngineError> {
        println!("engine: attach to surface {}", surface.0);
        Ok(())
    }

    fn capture_still(&mut self, destination: &Path) -> Result<(), CaptureError> {
        println!("engine: capture still to {}", destination.display());
        Ok(())
    }

    fn current_state(&self) -> PlaybackState {
        self.state
    }
}

fn main() -> anyhow::Result<()> {
    let recent = match cyclops_player::paths::config_file() {
        Ok(path) => RecentItems::load(path),
        Err(e) => {
            eprintln!("{e}; recent list is in-memory only for this run");
            RecentItems::ephemeral()
        }
    };

    let engine = StubEngine {
        state: PlaybackState::Stopped,
    };
    let mut session = PlayerSession::new(engine, recent);

    for reference in std::env::args().skip(1) {
        session.open_media(&reference)?;
    }

    println!("recent items:");
    for (i, item) in session.recent_items().iter().enumerate() {
        println!("{:2}. {item}", i + 1);
    }

    Ok(())
}
