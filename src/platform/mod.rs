//! Platform abstraction layer
//!
//! Handles the host-facing seams:
//! - Input events → a single-slot intent mailbox
//! - Frame scheduling with explicit cancellation
//! - `requestAnimationFrame` scheduling on the web

pub mod input;
pub mod scheduler;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputMailbox, Intent, IntentSender, is_activate_key};
pub use scheduler::{CancellationToken, FrameLoop, FrameScheduler};
