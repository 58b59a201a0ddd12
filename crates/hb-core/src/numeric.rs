//! Float comparison and finiteness checks shared by the equation crates.

use crate::HbError;

/// Absolute and relative bounds used when comparing two evaluated terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within `tol.abs`, or within `tol.rel` of the
/// larger magnitude. Fugacities and fractions span many decades, so the
/// relative bound does most of the work.
pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Pass `value` through unchanged, or report which term went NaN or infinite.
pub fn ensure_finite(value: f64, what: &'static str) -> Result<f64, HbError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HbError::NonFinite { what, value })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
