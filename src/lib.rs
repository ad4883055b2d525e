//! Non-GUI core of the Cyclops video player: the recent-media list with
//! durable JSON persistence, per-user config path resolution, and the
//! boundary to the external playback engine a shell drives.

pub mod engine;
pub mod error;
pub mod paths;
pub mod recent;
pub mod session;

pub use engine::{PlaybackEngine, PlaybackState, SurfaceHandle};
pub use error::{CaptureError, EngineError, Error, StorageUnavailable};
pub use recent::{RECENT_CAPACITY, RecentItems};
pub use session::PlayerSession;
