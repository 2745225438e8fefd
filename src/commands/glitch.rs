//! The glitch command: the iteration driver behind `jpg-glitch`.
//!
//! Each iteration reloads the input from disk, applies the configured number
//! of line deletions and byte collapses, and writes the result to the next
//! free `<stem>-<n><ext>` name beside the input. Iterations never see each
//! other's mutations; they only influence naming because earlier outputs
//! already exist when later names are chosen.

use crate::buffer::LineBuffer;
use crate::config::{GlitchConfig, GlitchCounts, RANDOM_COUNT_MAX};
use crate::error::Result;
use crate::glitch::{delete_random_byte, delete_random_line};
use crate::naming::generate_name;
use rand::Rng;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

/// Statistics from a glitch run.
#[derive(Debug, Default, Clone)]
pub struct GlitchStats {
    pub outputs: Vec<PathBuf>,
    pub lines_deleted: u64,
    pub bytes_collapsed: u64,
    pub elapsed_secs: f64,
}

impl GlitchStats {
    pub fn files_written(&self) -> usize {
        self.outputs.len()
    }
}

impl std::fmt::Display for GlitchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} files, {} lines deleted, {} lines collapsed ({:.3}s)",
            self.files_written(),
            self.lines_deleted,
            self.bytes_collapsed,
            self.elapsed_secs
        )
    }
}

/// Produces glitched copies of one input file.
#[derive(Debug, Clone)]
pub struct GlitchCommand {
    config: GlitchConfig,
}

impl GlitchCommand {
    pub fn new(config: GlitchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GlitchConfig {
        &self.config
    }

    /// Counts for the next iteration: fixed, or redrawn in random mode.
    pub fn draw_counts<R: Rng + ?Sized>(&self, rng: &mut R) -> GlitchCounts {
        if !self.config.random {
            return self.config.counts();
        }
        // bytes are drawn before lines
        let delete_bytes = 1 + rng.gen_range(0..RANDOM_COUNT_MAX);
        let delete_lines = 1 + rng.gen_range(0..RANDOM_COUNT_MAX);
        GlitchCounts {
            delete_lines,
            delete_bytes,
        }
    }

    /// Apply one iteration's glitches to a freshly loaded buffer.
    pub fn glitch_buffer<R: Rng + ?Sized>(
        &self,
        buffer: &mut LineBuffer,
        counts: GlitchCounts,
        rng: &mut R,
    ) -> Result<()> {
        let guard = self.config.guard;
        for _ in 0..counts.delete_lines {
            delete_random_line(buffer, guard, rng)?;
        }
        for _ in 0..counts.delete_bytes {
            delete_random_byte(buffer, guard, rng)?;
        }
        Ok(())
    }

    /// Run every iteration, reporting each written file to `out`.
    pub fn run<R: Rng + ?Sized, W: Write>(&self, rng: &mut R, out: &mut W) -> Result<GlitchStats> {
        let start = Instant::now();
        let mut stats = GlitchStats::default();

        for iteration in 0..self.config.iterations {
            let counts = self.draw_counts(rng);
            debug!(
                iteration,
                delete_lines = counts.delete_lines,
                delete_bytes = counts.delete_bytes,
                "starting iteration"
            );

            // The glitch is destructive, so always start from the file on disk
            let mut buffer = LineBuffer::from_path(&self.config.input)?;
            self.glitch_buffer(&mut buffer, counts, rng)?;

            let output = generate_name(&self.config.input, 1)?;
            buffer.write_to_path(&output)?;
            writeln!(out, "Outputting {}", output.display())?;

            stats.lines_deleted += counts.delete_lines as u64;
            stats.bytes_collapsed += counts.delete_bytes as u64;
            stats.outputs.push(output);
        }

        stats.elapsed_secs = start.elapsed().as_secs_f64();
        Ok(stats)
    }
}
