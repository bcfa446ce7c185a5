//! The street model: named polyline streets, the registry that owns them, and the undirected
//! intersection graph generated from a snapshot of the registry.

#[macro_use]
extern crate log;

mod graph;
mod intersections;

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use geom::{Line, Pt2D};

pub use crate::graph::Graph;
pub use crate::intersections::find_intersections;

/// A named polyline. The name is stored lower-cased; lookups are case-insensitive because of
/// that. Consecutive points are guaranteed distinct by construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Street {
    name: String,
    pts: Vec<Pt2D>,
}

impl Street {
    pub fn new(name: &str, pts: Vec<Pt2D>) -> Result<Street> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            bail!("no street name provided");
        }
        if pts.len() < 2 {
            bail!("at least 2 coordinates are required");
        }
        for pair in pts.windows(2) {
            if pair[0] == pair[1] {
                bail!("duplicate consecutive coordinates found: {}", pair[0]);
            }
        }
        Ok(Street { name, pts })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &Vec<Pt2D> {
        &self.pts
    }

    /// The polyline's segments, in walking order. Segment i's pt2 is segment i+1's pt1.
    pub fn lines(&self) -> Vec<Line> {
        self.pts
            .windows(2)
            .map(|pair| Line::new(pair[0], pair[1]))
            .collect()
    }
}

/// Owns all currently registered streets. The command loop holds one of these and passes an
/// immutable snapshot to `Graph::generate`; nothing here is global.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StreetRegistry {
    streets: BTreeMap<String, Street>,
}

impl StreetRegistry {
    pub fn new() -> StreetRegistry {
        StreetRegistry::default()
    }

    pub fn add_street(&mut self, street: Street) -> Result<()> {
        if self.streets.contains_key(street.name()) {
            bail!("street '{}' already exists", street.name());
        }
        debug!("added street '{}' with {} points", street.name(), street.points().len());
        self.streets.insert(street.name().to_string(), street);
        Ok(())
    }

    pub fn modify_street(&mut self, street: Street) -> Result<()> {
        if !self.streets.contains_key(street.name()) {
            bail!("street '{}' does not exist", street.name());
        }
        debug!("changed street '{}'", street.name());
        self.streets.insert(street.name().to_string(), street);
        Ok(())
    }

    pub fn remove_street(&mut self, name: &str) -> Result<()> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            bail!("no street name provided");
        }
        if self.streets.remove(&name).is_none() {
            bail!("street '{}' does not exist", name);
        }
        debug!("removed street '{}'", name);
        Ok(())
    }

    /// Snapshot in deterministic (name) order.
    pub fn streets(&self) -> Vec<&Street> {
        self.streets.values().collect()
    }

    pub fn len(&self) -> usize {
        self.streets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streets.is_empty()
    }
}
