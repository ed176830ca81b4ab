//! Surface trait definition
//!
//! The seam between the sync engine and whatever actually renders. The
//! controller owns a single surface instance and invokes it synchronously
//! with each patch; a real deployment attaches the browser glue here, tests
//! attach a recording surface.

use log::info;

use crate::view::Patch;

/// Receives display patches and interactive prompts
pub trait Surface: Send {
    /// Apply one display mutation
    fn apply(&mut self, patch: &Patch);

    /// Ask the user a yes/no question, e.g. before a large trade
    ///
    /// Default implementation accepts.
    fn confirm(&mut self, message: &str) -> bool {
        let _ = message;
        true
    }

    /// Reload the whole page, e.g. after an admin action succeeds
    fn reload(&mut self) {}
}

/// A surface that drops everything, for running the engine headless
#[derive(Debug, Default)]
pub struct NoOpSurface;

impl Surface for NoOpSurface {
    fn apply(&mut self, _patch: &Patch) {}
}

/// A surface that writes every patch to the log
///
/// Used by the standalone binary, where the "page" is the terminal.
#[derive(Debug, Default)]
pub struct LogSurface;

impl Surface for LogSurface {
    fn apply(&mut self, patch: &Patch) {
        info!("{patch}");
    }

    fn reload(&mut self) {
        info!("page reload requested");
    }
}
