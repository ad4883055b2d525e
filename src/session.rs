//! Transport wiring between a GUI shell, the playback engine, and the
//! recent-items store. Holds no widgets; the shell renders whatever
//! [`PlayerSession::recent_items`] reports after each call.

use std::path::Path;

use tracing::warn;

use crate::engine::{PlaybackEngine, PlaybackState, SurfaceHandle};
use crate::error::{CaptureError, EngineError, Error};
use crate::recent::RecentItems;

/// One player window's worth of session state. Both collaborators are
/// injected at construction; nothing here is a singleton.
pub struct PlayerSession<E> {
    engine: E,
    recent: RecentItems,
    surface_attached: bool,
}

impl<E: PlaybackEngine> PlayerSession<E> {
    pub fn new(engine: E, recent: RecentItems) -> Self {
        Self {
            engine,
            recent,
            surface_attached: false,
        }
    }

    /// Hand the engine its output surface. Only the first call reaches
    /// the engine; repeat calls are no-ops.
    pub fn attach_surface(&mut self, surface: SurfaceHandle) -> Result<(), EngineError> {
        if self.surface_attached {
            return Ok(());
        }
        self.engine.attach_to_surface(surface)?;
        self.surface_attached = true;
        Ok(())
    }

    /// Open a media reference (file path or URL) and start playback,
    /// recording it in the recent list.
    ///
    /// Blank input is rejected before it reaches the engine or the
    /// store. An engine failure is returned for the shell to display; a
    /// storage failure while recording is logged and does not fail the
    /// call.
    pub fn open_media(&mut self, reference: &str) -> Result<(), Error> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(Error::InvalidReference);
        }
        self.engine.open(reference)?;
        self.engine.play()?;
        if let Err(e) = self.recent.record_use(reference) {
            warn!(error = %e, "recent list not persisted");
        }
        Ok(())
    }

    /// Start or resume playback.
    pub fn play(&mut self) -> Result<(), EngineError> {
        self.engine.play()
    }

    /// Pause playback.
    pub fn pause(&mut self) {
        self.engine.pause();
    }

    /// Stop playback.
    pub fn stop(&mut self) {
        self.engine.stop();
    }

    /// Capture the current frame to `destination`, pausing playback
    /// first. Only meaningful while playing or paused.
    pub fn capture_frame(&mut self, destination: &Path) -> Result<(), Error> {
        match self.engine.current_state() {
            PlaybackState::Playing => {
                self.engine.pause();
                self.engine.capture_still(destination)?;
            }
            PlaybackState::Paused => self.engine.capture_still(destination)?,
            _ => return Err(CaptureError::Inactive.into()),
        }
        Ok(())
    }

    /// Recent references for display, most recent first.
    pub fn recent_items(&self) -> &[String] {
        self.recent.current()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}
