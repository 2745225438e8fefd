//! Command implementations for jpg-glitch.

pub mod glitch;

pub use glitch::{GlitchCommand, GlitchStats};
