//! Run configuration for jpg-glitch.
//!
//! Everything here is plain data: it is built once from the command line and
//! then only read by the iteration driver.

use std::path::PathBuf;

/// Lines skipped at the start of the buffer (presumed JPEG header).
pub const DEFAULT_START_SKIP: usize = 3;

/// Lines skipped at the end of the buffer (presumed JPEG footer).
pub const DEFAULT_END_SKIP: usize = 2;

/// Upper bound (inclusive) of a random-mode count draw.
pub const RANDOM_COUNT_MAX: usize = 15;

/// Segments protected from mutation at both ends of a line buffer.
///
/// The defaults are guesses at where a JPEG keeps its header and footer
/// markers. They apply to each glitch call independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardBand {
    pub start_skip: usize,
    pub end_skip: usize,
}

impl GuardBand {
    pub fn new(start_skip: usize, end_skip: usize) -> Self {
        Self {
            start_skip,
            end_skip,
        }
    }

    /// Segment indices eligible for mutation in a buffer of `len` segments.
    ///
    /// Returns `None` when the guards leave nothing to pick from.
    #[inline]
    pub fn eligible(&self, len: usize) -> Option<std::ops::Range<usize>> {
        let end = len.checked_sub(self.end_skip)?;
        if end > self.start_skip {
            Some(self.start_skip..end)
        } else {
            None
        }
    }
}

impl Default for GuardBand {
    fn default() -> Self {
        Self::new(DEFAULT_START_SKIP, DEFAULT_END_SKIP)
    }
}

/// Number of each glitch applied during one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlitchCounts {
    pub delete_lines: usize,
    pub delete_bytes: usize,
}

/// Configuration for the glitch command.
#[derive(Debug, Clone)]
pub struct GlitchConfig {
    pub input: PathBuf,
    pub iterations: u32,
    pub delete_lines: usize,
    pub delete_bytes: usize,
    /// Redraw both counts in `1..=RANDOM_COUNT_MAX` every iteration.
    pub random: bool,
    pub guard: GuardBand,
}

impl GlitchConfig {
    /// The fixed per-iteration counts, ignoring random mode.
    pub fn counts(&self) -> GlitchCounts {
        GlitchCounts {
            delete_lines: self.delete_lines,
            delete_bytes: self.delete_bytes,
        }
    }
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            iterations: 1,
            delete_lines: 1,
            delete_bytes: 1,
            random: false,
            guard: GuardBand::default(),
        }
    }
}
