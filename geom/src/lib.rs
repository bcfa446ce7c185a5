mod line;
mod pt;

pub use crate::line::{cross_product, Line};
pub use crate::pt::{HashablePt2D, Pt2D};

/// Slack used whenever we test whether a computed point lies on a segment. Intersection
/// coordinates come out of a floating-point division and can miss exact containment by a rounding
/// error, so every bounded membership check inflates by this much.
pub const EPSILON_DIST: f64 = 1e-10;

/// Round for display purposes only; all internal math keeps full precision.
pub fn trim_f64(x: f64) -> f64 {
    let trimmed = (x * 100.0).round() / 100.0;
    // Rounding a tiny negative value can resurrect -0.0
    if trimmed == 0.0 {
        0.0
    } else {
        trimmed
    }
}
