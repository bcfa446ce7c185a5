use std::collections::BTreeSet;

use geom::HashablePt2D;

use crate::Street;

/// Finds every point where segments from two different streets cross, touch, or collinearly
/// overlap. A street is deliberately never tested against its own segments.
///
/// Collinear overlap takes precedence over single-point reporting: an overlapping pair
/// contributes all four of its endpoints (the overlap sub-range itself is never computed), and
/// only pairs that fail the overlap test can report a shared endpoint or a crossing.
pub fn find_intersections(streets: &[&Street]) -> BTreeSet<HashablePt2D> {
    let mut pts = BTreeSet::new();

    for (idx, street1) in streets.iter().enumerate() {
        for street2 in &streets[idx + 1..] {
            for l1 in street1.lines() {
                for l2 in street2.lines() {
                    if l1.overlaps_collinearly(&l2) {
                        pts.insert(l1.pt1().to_hashable());
                        pts.insert(l1.pt2().to_hashable());
                        pts.insert(l2.pt1().to_hashable());
                        pts.insert(l2.pt2().to_hashable());
                    } else if let Some(hit) =
                        l1.intersection(&l2).or_else(|| l2.intersection(&l1))
                    {
                        pts.insert(hit.to_hashable());
                    }
                }
            }
        }
    }

    debug!("found {} intersection points among {} streets", pts.len(), streets.len());
    pts
}

#[cfg(test)]
mod tests {
    use geom::Pt2D;

    use super::*;

    fn street(name: &str, raw: &[(f64, f64)]) -> Street {
        Street::new(
            name,
            raw.iter().map(|(x, y)| Pt2D::new(*x, *y)).collect(),
        )
        .unwrap()
    }

    fn hashable(x: f64, y: f64) -> HashablePt2D {
        Pt2D::new(x, y).to_hashable()
    }

    #[test]
    fn proper_crossing() {
        let a = street("a", &[(0.0, 0.0), (10.0, 10.0)]);
        let b = street("b", &[(0.0, 10.0), (10.0, 0.0)]);
        let pts = find_intersections(&[&a, &b]);
        let expected: BTreeSet<HashablePt2D> = [hashable(5.0, 5.0)].into_iter().collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn parallel_streets_dont_intersect() {
        let a = street("a", &[(0.0, 0.0), (10.0, 0.0)]);
        let b = street("b", &[(0.0, 1.0), (10.0, 1.0)]);
        assert!(find_intersections(&[&a, &b]).is_empty());
    }

    #[test]
    fn collinear_overlap_keeps_all_four_endpoints() {
        let a = street("a", &[(0.0, 0.0), (10.0, 0.0)]);
        let b = street("b", &[(5.0, 0.0), (15.0, 0.0)]);
        let pts = find_intersections(&[&a, &b]);
        let expected: BTreeSet<HashablePt2D> = [
            hashable(0.0, 0.0),
            hashable(5.0, 0.0),
            hashable(10.0, 0.0),
            hashable(15.0, 0.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn own_segments_never_tested() {
        // A street that crosses itself produces nothing on its own
        let a = street("a", &[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);
        assert!(find_intersections(&[&a]).is_empty());
    }

    #[test]
    fn multiple_crossings_along_one_segment() {
        let a = street("a", &[(0.0, 0.0), (10.0, 0.0)]);
        let b = street("b", &[(2.0, -1.0), (2.0, 1.0)]);
        let c = street("c", &[(7.0, -1.0), (7.0, 1.0)]);
        let pts = find_intersections(&[&a, &b, &c]);
        let expected: BTreeSet<HashablePt2D> =
            [hashable(2.0, 0.0), hashable(7.0, 0.0)].into_iter().collect();
        assert_eq!(pts, expected);
    }
}
