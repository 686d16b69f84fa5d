//! # Mapdice Core
//!
//! GUI-free model for the map picker.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      AppState (ui)                   │
//! │  ┌────────────┐  ┌────────────┐  ┌────────────────┐  │
//! │  │  MapPool   │  │   Picker   │  │  Timer / Rng   │  │
//! │  │ ┌────────┐ │  │ Idle       │  │  (injected)    │  │
//! │  │ │MapItem │ │  │ Animating  │  └────────────────┘  │
//! │  │ └────────┘ │  └────────────┘                      │
//! │  └────────────┘                                      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Learning: Injected Collaborators
//!
//! The picker never sleeps and never reads a clock. It is handed a
//! random source (`rand::Rng`) and a [`Timer`] on every call, so tests
//! can drive a whole animation with a seeded RNG and a manual timer.

pub mod assets;
pub mod config;
pub mod item;
pub mod layout;
pub mod picker;
pub mod pool;
pub mod timer;

pub use assets::{AssetCatalog, AssetKey};
pub use config::{Config, ConfigError};
pub use item::{MapId, MapItem, Visual};
pub use layout::{Area, GridMetrics};
pub use picker::{
    AnimationSchedule, Display, Picker, PickerMode, PressOutcome, RevealClick, TickOutcome,
};
pub use pool::MapPool;
pub use timer::{ManualTimer, Timer, TimerCall};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Map roster is empty")]
    EmptyRoster,

    #[error("Duplicate map name: {0}")]
    DuplicateMap(String),

    #[error("Invalid animation schedule: {0}")]
    InvalidSchedule(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
