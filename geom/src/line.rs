use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Pt2D, EPSILON_DIST};

/// A segment between two points. The pt1 -> pt2 direction matters for walking a street's polyline
/// in order and for display; intersection math treats the segment as undirected.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line(Pt2D, Pt2D);

impl Line {
    pub fn new(pt1: Pt2D, pt2: Pt2D) -> Line {
        Line(pt1, pt2)
    }

    pub fn pt1(&self) -> Pt2D {
        self.0
    }

    pub fn pt2(&self) -> Pt2D {
        self.1
    }

    pub fn reversed(&self) -> Line {
        Line(self.pt2(), self.pt1())
    }

    /// Euclidean length. Only used for ordering intersection points along the segment.
    pub fn length(&self) -> f64 {
        self.pt1().dist_to(self.pt2())
    }

    /// True if `pt` lies on this segment: inside the endpoint bounding box inflated by
    /// `EPSILON_DIST` on both axes, and collinear with the endpoints up to the same tolerance.
    pub fn contains_pt(&self, pt: Pt2D) -> bool {
        let (a, b) = (self.pt1(), self.pt2());
        let in_x_range =
            a.x().min(b.x()) - EPSILON_DIST <= pt.x() && pt.x() <= a.x().max(b.x()) + EPSILON_DIST;
        let in_y_range =
            a.y().min(b.y()) - EPSILON_DIST <= pt.y() && pt.y() <= a.y().max(b.y()) + EPSILON_DIST;
        in_x_range && in_y_range && cross_product(a, pt, b).abs() <= EPSILON_DIST
    }

    /// Where this segment meets `other`, if anywhere.
    ///
    /// When the determinant is exactly zero the lines are parallel or collinear; the caller is
    /// expected to have checked `overlaps_collinearly` first, so the only case reported here is
    /// the coincidence of this segment ending exactly where `other` starts.
    pub fn intersection(&self, other: &Line) -> Option<Pt2D> {
        let (x1, y1) = (self.pt1().x(), self.pt1().y());
        let (x2, y2) = (self.pt2().x(), self.pt2().y());
        let (x3, y3) = (other.pt1().x(), other.pt1().y());
        let (x4, y4) = (other.pt2().x(), other.pt2().y());

        let det = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if det == 0.0 {
            if self.pt2() == other.pt1() {
                return Some(self.pt2());
            }
            return None;
        }

        let c1 = x1 * y2 - y1 * x2;
        let c2 = x3 * y4 - y3 * x4;
        let hit = Pt2D::new(
            (c1 * (x3 - x4) - (x1 - x2) * c2) / det,
            (c1 * (y3 - y4) - (y1 - y2) * c2) / det,
        );

        // A determinant that barely escapes zero can place the solved point far outside both
        // segments. The bounded containment check rejects those instead of reporting them.
        if self.contains_pt(hit) && other.contains_pt(hit) {
            Some(hit)
        } else {
            None
        }
    }

    /// True if the two segments are collinear and share a run of points, not just a crossing.
    ///
    /// The containment part of the test only looks at x-ranges, matching the observable behavior
    /// this tool has always had. Callers treat a hit as "keep all four endpoints"; the exact
    /// overlapping sub-range is never computed.
    pub fn overlaps_collinearly(&self, other: &Line) -> bool {
        if cross_product(self.pt1(), self.pt2(), other.pt1()) != 0.0
            || cross_product(self.pt1(), self.pt2(), other.pt2()) != 0.0
        {
            return false;
        }
        within(self.pt1().x(), other.pt1().x(), self.pt2().x())
            || within(self.pt1().x(), other.pt2().x(), self.pt2().x())
            || within(other.pt1().x(), self.pt1().x(), other.pt2().x())
            || within(other.pt1().x(), self.pt2().x(), other.pt2().x())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Line({} -> {})", self.pt1(), self.pt2())
    }
}

/// Signed-area proxy of the triangle (p1, p2, p3). Exactly zero means the three points are
/// collinear.
pub fn cross_product(p1: Pt2D, p2: Pt2D, p3: Pt2D) -> f64 {
    (p2.y() - p1.y()) * (p3.x() - p2.x()) - (p2.x() - p1.x()) * (p3.y() - p2.y())
}

fn within(a: f64, query: f64, b: f64) -> bool {
    (a <= query && query <= b) || (b <= query && query <= a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::new(Pt2D::new(x1, y1), Pt2D::new(x2, y2))
    }

    #[test]
    fn proper_crossing() {
        let l1 = line(0.0, 0.0, 10.0, 10.0);
        let l2 = line(0.0, 10.0, 10.0, 0.0);
        assert_eq!(l1.intersection(&l2), Some(Pt2D::new(5.0, 5.0)));
        assert_eq!(l2.intersection(&l1), Some(Pt2D::new(5.0, 5.0)));
    }

    #[test]
    fn parallel_segments_dont_intersect() {
        let l1 = line(0.0, 0.0, 10.0, 0.0);
        let l2 = line(0.0, 1.0, 10.0, 1.0);
        assert_eq!(l1.intersection(&l2), None);
        assert!(!l1.overlaps_collinearly(&l2));
    }

    #[test]
    fn lines_cross_but_segments_dont() {
        let l1 = line(0.0, 0.0, 1.0, 1.0);
        let l2 = line(10.0, 0.0, 11.0, -5.0);
        assert_eq!(l1.intersection(&l2), None);
    }

    #[test]
    fn collinear_shared_endpoint_coincidence() {
        // det == 0, but l1 ends exactly where l2 starts
        let l1 = line(0.0, 0.0, 5.0, 0.0);
        let l2 = line(5.0, 0.0, 10.0, 0.0);
        assert_eq!(l1.intersection(&l2), Some(Pt2D::new(5.0, 0.0)));
        // The reversed orientation doesn't share pt2/pt1, so nothing is reported
        assert_eq!(l2.intersection(&l1), None);
        assert_eq!(l1.reversed().intersection(&l2), None);
    }

    #[test]
    fn t_junction_endpoint_on_segment() {
        let l1 = line(0.0, 0.0, 10.0, 0.0);
        let l2 = line(5.0, 0.0, 5.0, 5.0);
        assert_eq!(l1.intersection(&l2), Some(Pt2D::new(5.0, 0.0)));
        assert!(l1.contains_pt(Pt2D::new(5.0, 0.0)));
    }

    #[test]
    fn collinear_overlap() {
        let l1 = line(0.0, 0.0, 10.0, 0.0);
        let l2 = line(5.0, 0.0, 15.0, 0.0);
        assert!(l1.overlaps_collinearly(&l2));
        assert!(l2.overlaps_collinearly(&l1));

        // Collinear but disjoint in x
        let l3 = line(20.0, 0.0, 30.0, 0.0);
        assert!(!l1.overlaps_collinearly(&l3));
    }

    #[test]
    fn contains_pt_tolerates_rounding() {
        let l = line(0.0, 0.0, 10.0, 10.0);
        assert!(l.contains_pt(Pt2D::new(5.0 + 1e-12, 5.0)));
        assert!(!l.contains_pt(Pt2D::new(5.0, 5.1)));
        assert!(!l.contains_pt(Pt2D::new(11.0, 11.0)));
    }
}
