//! Rendering of the single-line ASCII progress meter.

/// Renders one carriage-return-anchored meter line.
///
/// Layout is `\r{label}[{filled}{rest}]\r` with no trailing newline, so a
/// repeated call overwrites the previous line on a terminal. The visible
/// width (label, brackets, and bar interior) equals `width`; the interior
/// shrinks to absorb the label and degrades to an empty `[]` when the label
/// alone exceeds `width`.
pub(crate) fn render(label: &str, current: f64, min: f64, max: f64, width: usize) -> String {
    let interior = width.saturating_sub(label.chars().count() + 2);
    // A zero-length range is treated as already complete.
    let fraction = if max == min {
        1.0
    } else {
        ((current - min) / (max - min)).clamp(0.0, 1.0)
    };
    let filled = if fraction.is_finite() {
        ((interior as f64 * fraction) as usize).min(interior)
    } else {
        0
    };

    let mut out = String::with_capacity(width + 2);
    out.push('\r');
    out.push_str(label);
    out.push('[');
    out.push_str(&"|".repeat(filled));
    out.push_str(&"-".repeat(interior - filled));
    out.push(']');
    out.push('\r');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halfway_meter() {
        let line = render("Loading", 50.0, 0.0, 100.0, 20);
        // width 20 = 7 label + 2 brackets + 11 interior
        assert_eq!(line, "\rLoading[|||||------]\r");
        assert_eq!(line.len() - 2, 20);
    }

    #[test]
    fn empty_and_full() {
        assert_eq!(render("x", 0.0, 0.0, 10.0, 8), "\rx[-----]\r");
        assert_eq!(render("x", 10.0, 0.0, 10.0, 8), "\rx[|||||]\r");
    }

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(render("x", -5.0, 0.0, 10.0, 8), render("x", 0.0, 0.0, 10.0, 8));
        assert_eq!(render("x", 99.0, 0.0, 10.0, 8), render("x", 10.0, 0.0, 10.0, 8));
    }

    #[test]
    fn degenerate_range_renders_full() {
        assert_eq!(render("x", 3.0, 3.0, 3.0, 8), "\rx[|||||]\r");
    }

    #[test]
    fn non_finite_input_renders_empty() {
        assert_eq!(render("x", f64::NAN, 0.0, 10.0, 8), "\rx[-----]\r");
    }

    #[test]
    fn label_longer_than_width() {
        assert_eq!(render("very long label", 1.0, 0.0, 2.0, 4), "\rvery long label[]\r");
    }

    #[test]
    fn no_trailing_newline() {
        let line = render("Loading", 50.0, 0.0, 100.0, 20);
        assert!(line.starts_with('\r'));
        assert!(line.ends_with('\r'));
        assert!(!line.contains('\n'));
    }
}
