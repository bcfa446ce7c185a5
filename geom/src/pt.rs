use std::fmt;

use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

/// A point in the planar Cartesian space streets live in.
///
/// Equality is exact f64 comparison on both fields; there is deliberately no epsilon at this
/// layer. The constructor normalizes `-0.0` to `0.0` on both axes, so a coordinate's sign of zero
/// never produces two vertices at the same location.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pt2D {
    x: f64,
    y: f64,
}

impl Pt2D {
    pub fn new(x: f64, y: f64) -> Pt2D {
        if !x.is_finite() || !y.is_finite() {
            panic!("Bad Pt2D ({}, {})", x, y);
        }

        Pt2D {
            x: if x == 0.0 { 0.0 } else { x },
            y: if y == 0.0 { 0.0 } else { y },
        }
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    /// Euclidean distance. Used only for ordering points along a segment, never for equality.
    pub fn dist_to(self, other: Pt2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_hashable(self) -> HashablePt2D {
        HashablePt2D::new(self.x, self.y)
    }
}

impl fmt::Display for Pt2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pt2D({}, {})", self.x(), self.y())
    }
}

/// A Pt2D that can be used as a set/map key. The `Ord` impl (x first, then y) is the documented
/// ordering for vertex numbering.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HashablePt2D {
    x_nan: NotNan<f64>,
    y_nan: NotNan<f64>,
}

impl HashablePt2D {
    pub fn new(x: f64, y: f64) -> HashablePt2D {
        HashablePt2D {
            x_nan: NotNan::new(x).unwrap(),
            y_nan: NotNan::new(y).unwrap(),
        }
    }

    pub fn x(self) -> f64 {
        self.x_nan.into_inner()
    }

    pub fn y(self) -> f64 {
        self.y_nan.into_inner()
    }

    pub fn to_pt2d(self) -> Pt2D {
        Pt2D::new(self.x(), self.y())
    }
}

impl From<Pt2D> for HashablePt2D {
    fn from(pt: Pt2D) -> Self {
        pt.to_hashable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_is_normalized() {
        let pt = Pt2D::new(-0.0, 5.0);
        assert_eq!(pt, Pt2D::new(0.0, 5.0));
        assert!(pt.x().is_sign_positive());
        assert_eq!(pt.to_hashable(), Pt2D::new(0.0, 5.0).to_hashable());
    }

    #[test]
    fn hashable_orders_by_x_then_y() {
        let mut pts = vec![
            Pt2D::new(3.0, 1.0).to_hashable(),
            Pt2D::new(1.0, 2.0).to_hashable(),
            Pt2D::new(1.0, 1.0).to_hashable(),
        ];
        pts.sort();
        assert_eq!(
            pts,
            vec![
                Pt2D::new(1.0, 1.0).to_hashable(),
                Pt2D::new(1.0, 2.0).to_hashable(),
                Pt2D::new(3.0, 1.0).to_hashable(),
            ]
        );
    }
}
