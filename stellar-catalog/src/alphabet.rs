//! Symbol-table (`key = value`) file loading.
//!
//! The alphabet file maps abbreviations to full names, one pair per line:
//!
//! ```text
//! Alp = α
//! Bet = β
//! ```
//!
//! Unlike the catalog files this one is ordinary UTF-8. Blank lines are
//! skipped; a non-blank line without `=` is a format error; duplicate keys
//! overwrite, last one wins. Insertion order is preserved — the table is
//! tiny (an alphabet), so a `Vec` of pairs is the whole data structure.

use crate::errors::{CatalogError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Insertion-ordered `key = value` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<(String, String)>,
}

impl SymbolTable {
    /// Looks a key up; duplicate keys were already collapsed at load time.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

/// Loads a symbol-table file.
pub fn load(path: &Path) -> Result<SymbolTable> {
    let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
    let reader = BufReader::new(file);
    let mut table = SymbolTable::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CatalogError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) = line.split_once('=').ok_or_else(|| {
            CatalogError::format(path, index + 1, "expected 'key = value'")
        })?;
        table.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(table)
}
