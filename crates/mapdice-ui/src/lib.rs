//! # Mapdice UI
//!
//! The picker window, built with the iced framework.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`] owns the map pool, the picker, the RNG and the timer
//! - **Message**: card presses, picker presses, timer ticks, resizes
//! - **Update**: forwards each message to the core state machine
//! - **View**: pure function of the model
//!
//! The animation timer is not started or stopped by hand. The picker
//! arms a [`SubscriptionTimer`](app::SubscriptionTimer), and
//! [`App::subscription`] turns the armed interval into `iced::time::every`.

pub mod app;
pub mod images;
pub mod theme;

pub use app::{run, App, Flags, Message, UiError};
pub use images::ImageTable;
