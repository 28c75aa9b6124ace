//! Lazy resolution state for the display flags.

use filtrace_params::OutputParams;
use std::path::PathBuf;

/// The two display flags that gate debug and progress output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlags {
    /// Whether debug messages are shown.
    pub debug: bool,
    /// Whether progress messages and meters are shown.
    pub progress: bool,
}

impl From<&OutputParams> for DisplayFlags {
    fn from(output: &OutputParams) -> Self {
        Self {
            debug: output.show_debug_messages,
            progress: output.show_progress_messages,
        }
    }
}

/// Where the display flags come from.
///
/// `Fixed` flags are set at construction and never touch the filesystem.
/// `Lazy` flags are loaded from `default.parameters` in `dir` on first use;
/// `resolved` stays `None` until a load succeeds, so every gated call before
/// that re-runs the load-and-recover sequence.
#[derive(Debug)]
pub(crate) enum ParamGate {
    Fixed(DisplayFlags),
    Lazy {
        dir: PathBuf,
        resolved: Option<DisplayFlags>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_from_output_params() {
        let output = OutputParams {
            show_debug_messages: true,
            show_progress_messages: false,
        };
        let flags = DisplayFlags::from(&output);
        assert!(flags.debug);
        assert!(!flags.progress);
    }

    #[test]
    fn flags_from_default_params() {
        let flags = DisplayFlags::from(&OutputParams::default());
        assert!(!flags.debug);
        assert!(flags.progress);
    }
}
