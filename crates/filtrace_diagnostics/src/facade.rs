//! The diagnostics facade: four message categories and the progress meter.

use crate::exit::ExitRequest;
use crate::gate::{DisplayFlags, ParamGate};
use crate::meter;
use filtrace_params::{load_params, write_default_params, PARAMS_FILE_NAME};
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

/// Provides the brief usage banner printed by [`Diagnostics::help`].
///
/// The CLI crate implements this by rendering its argument parser's usage
/// line; tests implement it with a fixed string.
pub trait UsageSource {
    /// Renders the brief usage banner, without a trailing newline.
    fn brief(&self) -> String;
}

/// Formats and emits diagnostics to a single output sink.
///
/// Owns the display-flag state explicitly instead of consulting globals;
/// construct one at startup and thread it through the program. Debug and
/// progress output is gated by the flags resolved from `default.parameters`
/// (or fixed at construction via [`with_flags`](Self::with_flags)).
///
/// Writes are best-effort: a diagnostics facade has no channel to report its
/// own I/O failures, so sink errors are swallowed. Each emission flushes the
/// sink so output interleaves predictably with other streams.
pub struct Diagnostics<W: Write> {
    sink: W,
    gate: ParamGate,
}

impl Diagnostics<io::Stdout> {
    /// Production wiring: messages to standard output, parameters resolved
    /// from the current working directory.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Diagnostics<W> {
    /// Creates a facade that lazily resolves `default.parameters` from the
    /// current working directory.
    pub fn new(sink: W) -> Self {
        Self::with_params_dir(sink, ".")
    }

    /// Creates a facade that lazily resolves `default.parameters` from `dir`.
    pub fn with_params_dir(sink: W, dir: impl Into<PathBuf>) -> Self {
        Self {
            sink,
            gate: ParamGate::Lazy {
                dir: dir.into(),
                resolved: None,
            },
        }
    }

    /// Creates a facade with fixed display flags that never reads the
    /// parameters file.
    pub fn with_flags(sink: W, show_debug: bool, show_progress: bool) -> Self {
        Self {
            sink,
            gate: ParamGate::Fixed(DisplayFlags {
                debug: show_debug,
                progress: show_progress,
            }),
        }
    }

    /// Reports an unrecoverable error: `*** ERROR: ` plus the message.
    ///
    /// Returns [`ExitRequest::Fatal`]; the driver must terminate the process
    /// with a non-zero status.
    pub fn error(&mut self, msg: fmt::Arguments<'_>) -> ExitRequest {
        self.emit("*** ERROR: ", msg);
        ExitRequest::Fatal
    }

    /// Reports an advisory condition: `--- Warning: ` plus the message.
    ///
    /// Never gated; always emitted.
    pub fn warning(&mut self, msg: fmt::Arguments<'_>) {
        self.emit("--- Warning: ", msg);
    }

    /// Emits an unprefixed debug message when the resolved parameters enable
    /// debug output. Suppressed silently when resolution fails.
    pub fn debug(&mut self, msg: fmt::Arguments<'_>) {
        if self.resolve_flags().is_some_and(|f| f.debug) {
            self.emit("", msg);
        }
    }

    /// Emits an unprefixed progress message when the resolved parameters
    /// enable progress output. Suppressed silently when resolution fails.
    pub fn progress(&mut self, msg: fmt::Arguments<'_>) {
        if self.resolve_flags().is_some_and(|f| f.progress) {
            self.emit("", msg);
        }
    }

    /// Renders a single-line progress meter, gated like
    /// [`progress`](Self::progress).
    ///
    /// The line is anchored by carriage returns on both sides and carries no
    /// newline, so repeated calls overwrite each other on a terminal. The
    /// visible width (label plus bracketed bar) is `width`; the filled
    /// portion is proportional to `(current - min) / (max - min)`, clamped
    /// to the bar. A degenerate range (`max == min`) renders a full bar.
    pub fn progress_meter(
        &mut self,
        current: f64,
        min: f64,
        max: f64,
        width: usize,
        label: fmt::Arguments<'_>,
    ) {
        if self.resolve_flags().is_some_and(|f| f.progress) {
            let line = meter::render(&label.to_string(), current, min, max, width);
            self.emit(&line, format_args!(""));
        }
    }

    /// Prints the brief usage banner and the message, then requests a
    /// successful exit. A no-op returning `None` when `show` is false.
    pub fn help(
        &mut self,
        show: bool,
        usage: &dyn UsageSource,
        msg: fmt::Arguments<'_>,
    ) -> Option<ExitRequest> {
        if !show {
            return None;
        }
        let banner = usage.brief();
        self.emit(&banner, format_args!("\n"));
        self.emit("", msg);
        Some(ExitRequest::Usage)
    }

    /// Resolves the display flags, loading the parameters file on first use.
    ///
    /// Recovery on a failed load: warn, write a defaults file, retry once.
    /// Success (initial or retry) is recorded so no further filesystem
    /// access happens for the lifetime of this value. A failed retry warns
    /// again and leaves the gate unresolved, so the next gated call re-runs
    /// the whole sequence.
    fn resolve_flags(&mut self) -> Option<DisplayFlags> {
        let dir = match &self.gate {
            ParamGate::Fixed(flags) => return Some(*flags),
            ParamGate::Lazy {
                resolved: Some(flags),
                ..
            } => return Some(*flags),
            ParamGate::Lazy { dir, resolved: None } => dir.clone(),
        };

        match load_params(&dir) {
            Ok(params) => Some(self.mark_resolved(DisplayFlags::from(&params.output))),
            Err(first) => {
                self.warning(format_args!(
                    "could not load parameters from {PARAMS_FILE_NAME}: {first}\n\
                     make sure {PARAMS_FILE_NAME} is in the calling directory\n\
                     \twriting defaults there and trying again...\n"
                ));
                // A failed write surfaces through the retry below.
                let _ = write_default_params(&dir);
                match load_params(&dir) {
                    Ok(params) => Some(self.mark_resolved(DisplayFlags::from(&params.output))),
                    Err(second) => {
                        self.warning(format_args!(
                            "\tstill could not load parameters: {second}\n"
                        ));
                        None
                    }
                }
            }
        }
    }

    fn mark_resolved(&mut self, flags: DisplayFlags) -> DisplayFlags {
        if let ParamGate::Lazy { resolved, .. } = &mut self.gate {
            *resolved = Some(flags);
        }
        flags
    }

    fn emit(&mut self, prefix: &str, msg: fmt::Arguments<'_>) {
        let _ = self.sink.write_all(prefix.as_bytes());
        let _ = self.sink.write_fmt(msg);
        let _ = self.sink.flush();
    }
}
