//! The catalog of cities with known trip datasets.
//!
//! Built once at startup from the resolved data directory and injected into
//! the loader, so nothing downstream depends on ambient global state.

use std::path::{Path, PathBuf};

/// Immutable configuration record for one city's dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityEntry {
    /// Canonical lowercase city name, as accepted at the prompt.
    pub name: String,
    /// File name of the backing CSV inside the data directory.
    pub file_name: String,
}

/// Immutable (city → file) mapping rooted at a data directory.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    data_dir: PathBuf,
    entries: Vec<CityEntry>,
}

impl CityCatalog {
    /// Build the standard catalog rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let entries = [
            ("chicago", "chicago.csv"),
            ("new york city", "new_york_city.csv"),
            ("washington", "washington.csv"),
        ]
        .into_iter()
        .map(|(name, file_name)| CityEntry {
            name: name.to_string(),
            file_name: file_name.to_string(),
        })
        .collect();

        Self {
            data_dir: data_dir.into(),
            entries,
        }
    }

    /// The directory the catalog resolves files against.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Canonical city names in stable catalog order, for prompt enumeration.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Look up a city by name, case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<&CityEntry> {
        let lowered = name.trim().to_lowercase();
        self.entries.iter().find(|e| e.name == lowered)
    }

    /// Absolute path of the CSV backing `entry`.
    pub fn path_for(&self, entry: &CityEntry) -> PathBuf {
        self.data_dir.join(&entry.file_name)
    }

    /// Catalog entries whose backing file exists on disk right now.
    pub fn available(&self) -> Vec<&CityEntry> {
        self.entries
            .iter()
            .filter(|e| self.path_for(e).is_file())
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
