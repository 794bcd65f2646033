use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::Gender;

/// Read-only lookup of normalized core names to known genders.
///
/// Keys are stored lowercase with periods stripped, matching the core-name
/// normalization the predictor applies before stage-3 lookup. The map is
/// injected at predictor construction and never mutated; publishing updates
/// means building a fresh snapshot.
#[derive(Debug, Clone, Default)]
pub struct NameDatabase {
    entries: HashMap<String, Gender>,
}

impl NameDatabase {
    /// A database with no known names. Lookup simply never fires.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Gender)>,
        S: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, gender)| (normalize_key(&name.into()), gender))
            .collect();
        Self { entries }
    }

    pub fn get(&self, core_name: &str) -> Option<Gender> {
        self.entries.get(core_name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a JSON object of `"name": "male" | "female"` entries.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, NameDbImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(file)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, NameDbImportError> {
        let raw: HashMap<String, String> = serde_json::from_reader(reader)?;
        let mut entries = HashMap::with_capacity(raw.len());
        for (name, label) in raw {
            let gender = parse_label(&name, &label)?;
            entries.insert(normalize_key(&name), gender);
        }
        Ok(Self { entries })
    }

    /// Load a CSV export with `Name` and `Gender` columns.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, NameDbImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, NameDbImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = HashMap::new();
        for record in csv_reader.deserialize::<NameRow>() {
            let row = record?;
            let gender = parse_label(&row.name, &row.gender)?;
            entries.insert(normalize_key(&row.name), gender);
        }
        Ok(Self { entries })
    }
}

#[derive(Debug, Deserialize)]
struct NameRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Gender")]
    gender: String,
}

fn parse_label(name: &str, label: &str) -> Result<Gender, NameDbImportError> {
    Gender::from_label(label).ok_or_else(|| NameDbImportError::UnknownLabel {
        name: name.to_string(),
        label: label.to_string(),
    })
}

fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase().replace('.', "")
}

/// Error raised while loading a name database from disk.
#[derive(Debug, thiserror::Error)]
pub enum NameDbImportError {
    #[error("failed to read name database: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid name database JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid name database CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unrecognized gender label '{label}' for name '{name}'")]
    UnknownLabel { name: String, label: String },
}
