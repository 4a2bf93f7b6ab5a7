use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::coord::ValidatedCoordinate;

/// A named reference point in the gazetteer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazetteerEntry {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// The fixed table of named areas used for nearest-area assignment.
///
/// Loaded once at startup and immutable thereafter; it can be shared by
/// reference across concurrent pipeline invocations. Non-empty by
/// construction — every constructor rejects an empty table.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    entries: Vec<GazetteerEntry>,
}

/// The nearest entry to a queried coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub entry: &'a GazetteerEntry,
    /// Planar squared-Euclidean distance in raw degrees. Intentionally not
    /// geodesic: the table covers one metropolitan area, and existing area
    /// assignments depend on this metric.
    pub squared_distance: f64,
}

impl Gazetteer {
    /// The compiled-in default table: Ottawa neighborhoods, in canonical
    /// order. Order matters — exact distance ties resolve to the earlier
    /// entry.
    pub fn builtin() -> Self {
        let entry = |name: &str, latitude: f64, longitude: f64| GazetteerEntry {
            name: name.to_string(),
            latitude,
            longitude,
        };
        Self {
            entries: vec![
                entry("Fallingbrook", 45.47752571586377, -75.48460802698182),
                entry("Chapel Hill North", 45.454842401889394, -75.53607001110123),
                entry("Chapel Hill South", 45.43416897289973, -75.50546579748969),
                entry("Convent Glen - Orléans Woods", 45.477863087522415, -75.53804919723913),
                entry("Queenswood - Chatelaine", 45.49353312598147, -75.50191371363908),
                entry("Orléans Village - Chateauneuf", 45.46081908983043, -75.51522700808438),
                entry("Centrum", 45.3089, -75.8967),
                entry("Barrhaven", 45.2732, -75.7338),
                entry("Kanata", 45.3260, -75.9002),
                entry("Centretown", 45.41672663442016, -75.69760785498559),
                entry("Glebe", 45.40118461665449, -75.69275129527401),
                entry("Westboro", 45.392880394585596, -75.74996147842012),
            ],
        }
    }

    /// Build a gazetteer from explicit entries.
    pub fn from_entries(entries: Vec<GazetteerEntry>) -> Result<Self> {
        anyhow::ensure!(!entries.is_empty(), "Gazetteer must contain at least one entry");
        Ok(Self { entries })
    }

    /// Load a gazetteer from a JSON file (an array of entries), or fall
    /// back to the builtin table when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::builtin());
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read gazetteer file {}", path.display()))?;
        let entries: Vec<GazetteerEntry> =
            serde_json::from_str(&contents).context("Failed to parse gazetteer file")?;
        log::debug!("Loaded {} gazetteer entries from {}", entries.len(), path.display());
        Self::from_entries(entries)
    }

    pub fn entries(&self) -> &[GazetteerEntry] {
        &self.entries
    }

    /// Find the entry nearest to a validated coordinate.
    ///
    /// Strict `<` comparison during the scan makes exact ties resolve to
    /// the first entry in table order — stable and deterministic, no
    /// secondary key.
    pub fn nearest(&self, coordinate: &ValidatedCoordinate) -> MatchResult<'_> {
        let mut best = &self.entries[0];
        let mut best_distance = f64::INFINITY;

        for entry in &self.entries {
            let d_lat = coordinate.latitude() - entry.latitude;
            let d_lng = coordinate.longitude() - entry.longitude;
            let distance = d_lat * d_lat + d_lng * d_lng;

            if distance < best_distance {
                best_distance = distance;
                best = entry;
            }
        }

        MatchResult {
            entry: best,
            squared_distance: best_distance,
        }
    }
}
