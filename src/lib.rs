//! jpg-glitch: glitch art by destructive line editing
//!
//! This library corrupts binary image files on purpose. A file is split into
//! newline-delimited segments, random segments are deleted or collapsed to a
//! single byte, and the result is written next to the input under a fresh
//! numbered name.
//!
//! # Features
//!
//! - **Binary-safe**: segments are raw bytes, never decoded as text
//! - **Guard band**: the first and last few segments are never mutated
//! - **Reproducible**: every random choice comes from a caller-supplied RNG
//!
//! # Example
//!
//! ```rust,no_run
//! use jpg_glitch::{GlitchCommand, GlitchConfig};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let config = GlitchConfig {
//!     input: "photo.jpg".into(),
//!     iterations: 3,
//!     ..Default::default()
//! };
//! let mut rng = SmallRng::seed_from_u64(42);
//! let stats = GlitchCommand::new(config)
//!     .run(&mut rng, &mut std::io::stdout())
//!     .unwrap();
//! println!("{}", stats);
//! ```

pub mod buffer;
pub mod commands;
pub mod config;
pub mod error;
pub mod glitch;
pub mod naming;

// Re-export commonly used types
pub use buffer::LineBuffer;
pub use commands::{GlitchCommand, GlitchStats};
pub use config::{GlitchConfig, GlitchCounts, GuardBand};
pub use error::{GlitchError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::buffer::LineBuffer;
    pub use crate::commands::{GlitchCommand, GlitchStats};
    pub use crate::config::{GlitchConfig, GlitchCounts, GuardBand};
    pub use crate::error::GlitchError;
    pub use crate::glitch::{delete_random_byte, delete_random_line};
    pub use crate::naming::generate_name;
}
