//! Printf-shaped convenience macros over [`Diagnostics`](crate::Diagnostics).
//!
//! Each macro forwards a `format_args!` invocation to the matching facade
//! method, so format strings and argument counts are checked at compile
//! time while call sites keep the variadic shape.

/// Reports a fatal error; evaluates to the [`ExitRequest`](crate::ExitRequest).
#[macro_export]
macro_rules! error {
    ($diag:expr, $($arg:tt)*) => {
        $diag.error(format_args!($($arg)*))
    };
}

/// Reports an advisory warning.
#[macro_export]
macro_rules! warning {
    ($diag:expr, $($arg:tt)*) => {
        $diag.warning(format_args!($($arg)*))
    };
}

/// Emits a gated debug message.
#[macro_export]
macro_rules! debug {
    ($diag:expr, $($arg:tt)*) => {
        $diag.debug(format_args!($($arg)*))
    };
}

/// Emits a gated progress message.
#[macro_export]
macro_rules! progress {
    ($diag:expr, $($arg:tt)*) => {
        $diag.progress(format_args!($($arg)*))
    };
}

/// Renders a gated progress meter line.
#[macro_export]
macro_rules! progress_meter {
    ($diag:expr, $current:expr, $min:expr, $max:expr, $width:expr, $($arg:tt)*) => {
        $diag.progress_meter($current, $min, $max, $width, format_args!($($arg)*))
    };
}

/// Prints usage plus a message when `$show` is true; evaluates to
/// `Option<ExitRequest>`.
#[macro_export]
macro_rules! help {
    ($diag:expr, $show:expr, $usage:expr, $($arg:tt)*) => {
        $diag.help($show, $usage, format_args!($($arg)*))
    };
}
