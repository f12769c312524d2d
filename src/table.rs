//! Fingering table: canonical note key → hole pattern + display label.
//!
//! The built-in table covers the instrument's playable range. A replacement
//! can be loaded from JSON in the source format:
//!
//! ```json
//! {
//!   "fingerings": { "do": "222222", "re": "202222" },
//!   "labels":     { "do": "до",     "re": "ре" }
//! }
//! ```
//!
//! Pattern digits: 0 open, 1 half, 2 closed. Holes are ordered four upper
//! left-to-right, then two lower left-to-right.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, TableError};
use crate::model::*;
use crate::normalizer::{self, Rejection};

/// Directory prefix used in image references unless overridden.
pub const DEFAULT_ASSET_DIR: &str = "notes";

// key, pattern, label
const BUILTIN_ROWS: [(&str, &str, &str); 24] = [
    // First octave
    ("do", "222222", "до"),
    ("do+", "212222", "до♯"),
    ("re", "202222", "ре"),
    ("re+", "222122", "ре♯"),
    ("re-", "212222", "ре♭"), // same as do+
    ("mi", "222022", "ми"),
    ("mi-", "222122", "ми♭"),
    ("fa", "202022", "фа"),
    ("fa+", "022222", "фа♯"),
    ("sol", "002222", "соль"),
    ("sol+", "022022", "соль♯"),
    ("sol-", "022222", "соль♭"),
    ("la", "002022", "ля"),
    ("la+", "000222", "ля♯"),
    ("la-", "022022", "ля♭"),
    ("si", "020022", "си"),
    ("si-", "000222", "си♭"),
    // Upper notes
    ("2do", "000022", "до"),
    ("2do+", "020002", "до♯"),
    ("2re", "000002", "ре"),
    ("2re+", "020000", "ре♯"),
    ("2re-", "020002", "ре♭"),
    ("2mi", "000000", "ми"),
    ("2mi-", "020000", "ми♭"),
];

static BUILTIN: Lazy<Result<FingeringTable, TableError>> = Lazy::new(|| {
    let mut source = TableSource::default();
    for (key, pattern, label) in BUILTIN_ROWS {
        source.fingerings.insert(key.to_string(), Value::from(pattern));
        source.labels.insert(key.to_string(), Value::from(label));
    }
    FingeringTable::from_source(source)
});

/// Table in its on-disk source form: two maps keyed identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSource {
    pub fingerings: Map<String, Value>,
    pub labels: Map<String, Value>,
}

/// Immutable, validated fingering table.
#[derive(Debug, Clone)]
pub struct FingeringTable {
    entries: Vec<FingeringEntry>,
    /// Canonical key string → index into `entries`
    index: HashMap<String, usize>,
    asset_dir: String,
}

impl FingeringTable {
    /// The table shipped with the library, validated on first use.
    pub fn builtin() -> Result<&'static FingeringTable, TableError> {
        match &*BUILTIN {
            Ok(table) => Ok(table),
            Err(e) => Err(e.clone()),
        }
    }

    /// Validate a source table. Any defect fails the whole load.
    pub fn from_source(source: TableSource) -> Result<Self, TableError> {
        if source.fingerings.is_empty() {
            return Err(TableError::Empty);
        }
        if let Some(orphan) = source
            .labels
            .keys()
            .find(|k| !source.fingerings.contains_key(*k))
        {
            return Err(TableError::OrphanLabel(orphan.clone()));
        }

        let mut entries = Vec::with_capacity(source.fingerings.len());
        let mut index = HashMap::with_capacity(source.fingerings.len());

        for (raw_key, pattern) in &source.fingerings {
            let key: NoteKey = raw_key
                .parse()
                .map_err(|_| TableError::InvalidKey(raw_key.clone()))?;
            let holes = parse_pattern(raw_key, pattern)?;
            let label = match source.labels.get(raw_key) {
                Some(Value::String(label)) => label.clone(),
                Some(_) => return Err(TableError::InvalidLabel(raw_key.clone())),
                None => return Err(TableError::MissingLabel(raw_key.clone())),
            };
            index.insert(key.to_string(), entries.len());
            entries.push(FingeringEntry { key, holes, label });
        }

        Ok(Self {
            entries,
            index,
            asset_dir: DEFAULT_ASSET_DIR.to_string(),
        })
    }

    /// Parse a table from its JSON source form.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let source: TableSource =
            serde_json::from_str(json).map_err(|e| TableError::Source(e.to_string()))?;
        Self::from_source(source)
    }

    /// Read and validate a JSON table file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let table = Self::from_json(&json)?;
        log::info!("Loaded {} fingerings from {}", table.len(), path.display());
        Ok(table)
    }

    /// Use a different directory prefix in asset paths. An empty prefix
    /// becomes "." so references never start with a bare note key.
    pub fn with_asset_dir(mut self, dir: impl Into<String>) -> Self {
        let dir = dir.into();
        let dir = dir.trim_end_matches('/');
        self.asset_dir = if dir.is_empty() { ".".to_string() } else { dir.to_string() };
        self
    }

    pub fn asset_dir(&self) -> &str {
        &self.asset_dir
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[FingeringEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by canonical key string.
    pub fn get(&self, key: &str) -> Option<&FingeringEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, key: &NoteKey) -> bool {
        self.index.contains_key(&key.to_string())
    }

    /// Image path for a key present in the table.
    pub fn asset_path(&self, key: &NoteKey) -> Option<String> {
        if !self.contains(key) {
            return None;
        }
        Some(format!("{}/{}", self.asset_dir, asset_file_name(key)))
    }

    /// Normalize a raw (base, accidental) pair and map it to its asset path.
    ///
    /// Well-formed keys the table has no fingering for are rejected as
    /// [`Rejection::OutOfRange`].
    pub fn resolve(&self, base: &str, accidental: &str) -> Result<String, Rejection> {
        let key = normalizer::normalize(base, accidental)?;
        self.asset_path(&key).ok_or(Rejection::OutOfRange(key))
    }

    /// Back to the JSON source form.
    pub fn to_source(&self) -> TableSource {
        let mut source = TableSource::default();
        for entry in &self.entries {
            let key = entry.key.to_string();
            source
                .fingerings
                .insert(key.clone(), Value::from(entry.pattern()));
            source.labels.insert(key, Value::from(entry.label.as_str()));
        }
        source
    }
}

/// File name of the diagram for a key. Shared by the renderer and the
/// scanner so references always match rendered files.
pub fn asset_file_name(key: &NoteKey) -> String {
    format!("{key}.svg")
}

/// Serialize a table to pretty JSON in source form.
pub fn table_to_json(table: &FingeringTable) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&table.to_source())?)
}

fn parse_pattern(key: &str, pattern: &Value) -> Result<[HoleState; HOLE_COUNT], TableError> {
    let invalid = || TableError::InvalidPattern {
        key: key.to_string(),
        pattern: match pattern {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    };

    let digits = pattern.as_str().ok_or_else(invalid)?;
    if digits.chars().count() != HOLE_COUNT {
        return Err(invalid());
    }
    let mut holes = [HoleState::Open; HOLE_COUNT];
    for (slot, digit) in holes.iter_mut().zip(digits.chars()) {
        *slot = HoleState::from_digit(digit).ok_or_else(invalid)?;
    }
    Ok(holes)
}
