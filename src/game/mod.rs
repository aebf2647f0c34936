//! Deterministic game logic module
//!
//! All gameplay rules live here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Collaborators injected behind the traits in `hooks`

pub mod hooks;
pub mod level;
pub mod placement;
pub mod session;
pub mod state;

pub use hooks::{ProgressSink, ScoreStore, Signal, SignalSink};
pub use level::generate_level;
pub use placement::place;
pub use session::Session;
pub use state::{Level, Phase, Tile};
