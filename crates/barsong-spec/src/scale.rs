//! Named scale tables.
//!
//! A scale is an ordered list of semitone offsets within one octave. Every
//! table entry must be non-empty, start at 0, be strictly increasing and
//! stay within 0-11.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Major scale degrees.
pub const MAJOR: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Natural minor scale degrees.
pub const MINOR: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];

/// Major pentatonic scale degrees.
pub const PENTATONIC: [u8; 5] = [0, 2, 4, 7, 9];

/// Scale names in derivation order. Parameter derivation indexes this list
/// with `digest[0] % 3`, so the order is part of the output contract.
pub const DERIVED_SCALE_NAMES: [&str; 3] = ["major", "minor", "pentatonic"];

/// Lookup table from scale name to degree offsets.
///
/// Names are stored lower-case and looked up case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleTable {
    scales: BTreeMap<String, Vec<u8>>,
}

impl ScaleTable {
    /// Creates an empty table.
    pub fn empty() -> Self {
        Self {
            scales: BTreeMap::new(),
        }
    }

    /// The built-in table: major, minor and pentatonic.
    pub fn builtin() -> Self {
        let mut scales = BTreeMap::new();
        scales.insert("major".to_string(), MAJOR.to_vec());
        scales.insert("minor".to_string(), MINOR.to_vec());
        scales.insert("pentatonic".to_string(), PENTATONIC.to_vec());
        Self { scales }
    }

    /// Looks up a scale by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.scales
            .get(&name.to_lowercase())
            .map(|degrees| degrees.as_slice())
    }

    /// Returns true if the table has a scale with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Adds or replaces a scale after checking its degrees.
    pub fn insert(&mut self, name: &str, degrees: Vec<u8>) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("scale name cannot be empty".to_string());
        }
        check_degrees(&degrees)?;
        self.scales.insert(name.to_lowercase(), degrees);
        Ok(())
    }

    /// Merges another table over this one. Entries in `other` win.
    pub fn merged_with(&self, other: &ScaleTable) -> ScaleTable {
        let mut scales = self.scales.clone();
        for (name, degrees) in &other.scales {
            scales.insert(name.to_lowercase(), degrees.clone());
        }
        ScaleTable { scales }
    }

    /// Scale names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.scales.keys().map(String::as_str).collect()
    }

    /// Iterates `(name, degrees)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.scales
            .iter()
            .map(|(name, degrees)| (name.as_str(), degrees.as_slice()))
    }

    /// Number of scales in the table.
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Returns true if the table has no scales.
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

impl Default for ScaleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Checks the degree invariants of a single scale.
pub fn check_degrees(degrees: &[u8]) -> Result<(), String> {
    let Some(&first) = degrees.first() else {
        return Err("scale must have at least one degree".to_string());
    };
    if first != 0 {
        return Err(format!("scale must start at 0, got {}", first));
    }
    if let Some(&d) = degrees.iter().find(|&&d| d > 11) {
        return Err(format!("degree {} is outside 0-11", d));
    }
    if degrees.windows(2).any(|w| w[0] >= w[1]) {
        return Err("degrees must be strictly increasing".to_string());
    }
    Ok(())
}
