//! Exit outcomes returned by the facade instead of terminating the process.

/// A requested process termination.
///
/// The facade reports fatal errors and usage-requested exits as values; the
/// top-level driver is responsible for mapping them to an actual
/// `process::exit` with [`code`](Self::code). Keeping termination out of the
/// facade makes every operation testable in-process.
#[must_use = "an exit request terminates nothing until the driver maps it to process::exit"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitRequest {
    /// An unrecoverable error was reported; the process must exit non-zero.
    Fatal,
    /// Usage text was printed on request; the process must exit successfully.
    Usage,
}

impl ExitRequest {
    /// The process exit code this request maps to.
    pub fn code(self) -> i32 {
        match self {
            ExitRequest::Fatal => 1,
            ExitRequest::Usage => 0,
        }
    }

    /// Returns `true` for [`Fatal`](ExitRequest::Fatal) requests.
    pub fn is_fatal(self) -> bool {
        self == ExitRequest::Fatal
    }
}
