pub mod unit;

/// `sqrt(3)`, which shows up all over hex geometry
pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs the elapsed time at the given level (default `Debug`),
/// then evaluates to the value of the expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Calculate the number of hexes in a filled hex-disc of the given radius.
/// Radius 0 means 1 hex, 1 is 7 hexes, 2 is 19, etc. Saturates at
/// `usize::MAX` for radii too big to count.
pub fn hex_count(radius: u32) -> usize {
    // We'll always have 3r^2+3r+1 hexes (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r hexes for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    r.checked_add(1)
        .and_then(|n| n.checked_mul(r))
        .and_then(|n| n.checked_mul(3))
        .and_then(|n| n.checked_add(1))
        .unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_count() {
        assert_eq!(hex_count(0), 1);
        assert_eq!(hex_count(1), 7);
        assert_eq!(hex_count(2), 19);
        assert_eq!(hex_count(3), 37);
        assert_eq!(hex_count(5), 91);
    }

    #[test]
    fn test_hex_count_saturates() {
        assert_eq!(hex_count(u32::MAX), usize::MAX);
    }

    #[test]
    fn test_timed_passes_value_through() {
        let value = timed!("Adding", 2 + 2);
        assert_eq!(value, 4);
        let value = timed!("Adding loudly", log::Level::Info, 3 * 3);
        assert_eq!(value, 9);
    }
}
