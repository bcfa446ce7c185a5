use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use geom::{trim_f64, HashablePt2D, Pt2D};

use crate::{find_intersections, Street};

/// An undirected planar graph of street intersections and the endpoints needed to keep each
/// street connected.
///
/// Vertices are numbered 1..=n in ascending (x, y) order, so the same street set always produces
/// the same labeling. Edges store label pairs with the smaller label first and keep
/// first-discovery order; no self-loops, no duplicate unordered pairs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Graph {
    vertices: Vec<Pt2D>,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Builds the graph from an immutable snapshot of streets. Pure: same streets in, same graph
    /// out.
    pub fn generate(streets: &[&Street]) -> Graph {
        let intersections = find_intersections(streets);

        let mut vertices: BTreeSet<HashablePt2D> = intersections.clone();
        let mut edges: Vec<(HashablePt2D, HashablePt2D)> = Vec::new();

        for street in streets {
            for line in street.lines() {
                // Which intersection points lie on this segment, ordered by distance from its
                // start?
                let mut on_segment: Vec<HashablePt2D> = intersections
                    .iter()
                    .filter(|pt| line.contains_pt(pt.to_pt2d()))
                    .cloned()
                    .collect();
                on_segment.sort_by(|a, b| {
                    line.pt1()
                        .dist_to(a.to_pt2d())
                        .partial_cmp(&line.pt1().dist_to(b.to_pt2d()))
                        .unwrap()
                });

                let src = line.pt1().to_hashable();
                let dst = line.pt2().to_hashable();
                match on_segment.len() {
                    // An uncrossed segment contributes nothing; its endpoints only matter if a
                    // neighboring segment or another street references them.
                    0 => {}
                    // A single point splits the segment into at most two edges.
                    1 => {
                        let pt = on_segment[0];
                        add_edge(&mut edges, &mut vertices, pt, src);
                        add_edge(&mut edges, &mut vertices, pt, dst);
                        vertices.insert(src);
                        vertices.insert(dst);
                    }
                    // Chain consecutive points, then connect the segment's own endpoints to the
                    // nearest/farthest point so the polyline stays connected even when all the
                    // crossings cluster toward one side.
                    _ => {
                        for pair in on_segment.windows(2) {
                            add_edge(&mut edges, &mut vertices, pair[0], pair[1]);
                        }
                        add_edge(&mut edges, &mut vertices, src, on_segment[0]);
                        add_edge(&mut edges, &mut vertices, *on_segment.last().unwrap(), dst);
                    }
                }
            }
        }

        // Assign labels in ascending (x, y) order
        let labels: BTreeMap<HashablePt2D, usize> = vertices
            .iter()
            .enumerate()
            .map(|(idx, pt)| (*pt, idx + 1))
            .collect();

        // Deduplicate, treating (a, b) and (b, a) as the same edge. This has to run over the
        // fully collected list, since two different segments can discover the same pair.
        let mut seen: BTreeSet<(usize, usize)> = BTreeSet::new();
        let mut deduped: Vec<(usize, usize)> = Vec::new();
        for (a, b) in edges {
            let pair = (labels[&a].min(labels[&b]), labels[&a].max(labels[&b]));
            if seen.insert(pair) {
                deduped.push(pair);
            }
        }

        let graph = Graph {
            vertices: vertices.iter().map(|pt| pt.to_pt2d()).collect(),
            edges: deduped,
        };
        debug!(
            "generated graph with {} vertices and {} edges from {} streets",
            graph.vertices.len(),
            graph.edges.len(),
            streets.len()
        );
        graph
    }

    /// Vertices in label order: `vertices()[i]` has label `i + 1`.
    pub fn vertices(&self) -> &Vec<Pt2D> {
        &self.vertices
    }

    pub fn edges(&self) -> &Vec<(usize, usize)> {
        &self.edges
    }

    /// One shortest path between two vertex labels, as the sequence of labels visited. Plain BFS;
    /// every edge has the same cost.
    pub fn shortest_path(&self, from: usize, to: usize) -> Result<Vec<usize>> {
        let n = self.vertices.len();
        if from < 1 || from > n || to < 1 || to > n {
            bail!("vertices must be between 1 and {}", n);
        }
        if from == to {
            return Ok(vec![from]);
        }

        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n + 1];
        for (a, b) in &self.edges {
            adjacency[*a].push(*b);
            adjacency[*b].push(*a);
        }

        let mut prev: Vec<usize> = vec![0; n + 1];
        let mut queue: VecDeque<usize> = VecDeque::new();
        prev[from] = from;
        queue.push_back(from);
        while let Some(current) = queue.pop_front() {
            if current == to {
                let mut path = vec![to];
                let mut at = to;
                while at != from {
                    at = prev[at];
                    path.push(at);
                }
                path.reverse();
                return Ok(path);
            }
            for next in &adjacency[current] {
                if prev[*next] == 0 {
                    prev[*next] = current;
                    queue.push_back(*next);
                }
            }
        }

        bail!("no path exists between {} and {}", from, to)
    }
}

fn add_edge(
    edges: &mut Vec<(HashablePt2D, HashablePt2D)>,
    vertices: &mut BTreeSet<HashablePt2D>,
    pt1: HashablePt2D,
    pt2: HashablePt2D,
) {
    // Never a self-loop
    if pt1 == pt2 {
        return;
    }
    edges.push((pt1, pt2));
    vertices.insert(pt1);
    vertices.insert(pt2);
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "V = {{")?;
        for (idx, pt) in self.vertices.iter().enumerate() {
            writeln!(f, " {}:  ({}, {})", idx + 1, trim_f64(pt.x()), trim_f64(pt.y()))?;
        }
        writeln!(f, "}}")?;
        writeln!(f, "E = {{")?;
        for (idx, (a, b)) in self.edges.iter().enumerate() {
            let comma = if idx == self.edges.len() - 1 { "" } else { "," };
            writeln!(f, "  <{},{}>{}", a, b, comma)?;
        }
        write!(f, "}}")
    }
}
