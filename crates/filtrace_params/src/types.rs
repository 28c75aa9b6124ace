//! Parameter types deserialized from `default.parameters`.

use serde::{Deserialize, Serialize};

/// The top-level parameter set parsed from `default.parameters`.
///
/// Every section is optional in the file; a missing section resolves to its
/// defaults, so a partial (or empty) file is always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Params {
    /// Display settings consumed by the diagnostics layer.
    #[serde(default)]
    pub output: OutputParams,
    /// Tuning knobs for the tracing pipeline.
    #[serde(default)]
    pub trace: TraceParams,
}

/// Display settings controlling which diagnostic categories are shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputParams {
    /// Whether debug messages are printed.
    pub show_debug_messages: bool,
    /// Whether progress messages and progress meters are printed.
    pub show_progress_messages: bool,
}

impl Default for OutputParams {
    fn default() -> Self {
        Self {
            show_debug_messages: false,
            show_progress_messages: true,
        }
    }
}

/// Tuning parameters for the tracing pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceParams {
    /// Minimum accepted trace length, in pixels.
    pub min_length: f64,
    /// Correlation threshold for accepting a seed point.
    pub seed_threshold: f64,
    /// Upper bound on refinement iterations per trace.
    pub max_iterations: u32,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            min_length: 20.0,
            seed_threshold: 0.99,
            max_iterations: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults() {
        let output = OutputParams::default();
        assert!(!output.show_debug_messages);
        assert!(output.show_progress_messages);
    }

    #[test]
    fn trace_defaults() {
        let trace = TraceParams::default();
        assert_eq!(trace.min_length, 20.0);
        assert_eq!(trace.seed_threshold, 0.99);
        assert_eq!(trace.max_iterations, 500);
    }

    #[test]
    fn params_default_is_section_defaults() {
        let params = Params::default();
        assert_eq!(params.output, OutputParams::default());
        assert_eq!(params.trace, TraceParams::default());
    }
}
