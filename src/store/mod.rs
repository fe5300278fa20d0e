//! Record store module
//!
//! Keeps every record in memory keyed by canonical name, loaded once from
//! the CSV data file and written back in full after each mutation.
//! A mutation whose write-back fails is undone in memory as well.

mod csv_file;

#[cfg(test)]
pub use csv_file::HEADER;

use log::{debug, info, warn};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{BioError, Result};
use crate::models::{canonical_name, Record};

/// In-memory record set bound to its data file
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    records: BTreeMap<String, Record>,
}

impl Store {
    /// Empty store that will be written to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: BTreeMap::new(),
        }
    }

    /// Load the store from a data file; a missing or malformed file is an error
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(path);

        for record in csv_file::read_records(&store.path)? {
            let key = record.key().to_string();
            if store.records.insert(key, record).is_some() {
                return Err(BioError::StoreLoad(format!(
                    "{}: duplicate name",
                    store.path.display()
                )));
            }
        }

        debug!(
            "Loaded {} records from {}",
            store.len(),
            store.path().display()
        );
        Ok(store)
    }

    /// Insert a new record and write the store back
    pub fn create(&mut self, record: Record) -> Result<()> {
        let key = record.key().to_string();
        match self.records.entry(key.clone()) {
            Entry::Occupied(_) => return Err(BioError::DuplicateKey),
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
        }

        if let Err(e) = self.flush() {
            warn!("Rolling back create of {}", key);
            self.records.remove(&key);
            return Err(e);
        }

        info!("Created {}", key);
        Ok(())
    }

    /// Look up a record by name, ignoring case
    pub fn read(&self, name: &str) -> Result<&Record> {
        self.records
            .get(&canonical_name(name))
            .ok_or(BioError::NotFound)
    }

    /// Replace an existing record and write the store back; returns the old record
    pub fn update(&mut self, record: Record) -> Result<Record> {
        let key = record.key().to_string();
        let previous = match self.records.get_mut(&key) {
            Some(existing) => std::mem::replace(existing, record),
            None => return Err(BioError::NotFound),
        };

        if let Err(e) = self.flush() {
            warn!("Rolling back update of {}", key);
            self.records.insert(key, previous);
            return Err(e);
        }

        info!("Updated {}", key);
        Ok(previous)
    }

    /// Remove a record by name and write the store back; returns the removed record
    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let key = canonical_name(name);
        let removed = self.records.remove(&key).ok_or(BioError::NotFound)?;

        if let Err(e) = self.flush() {
            warn!("Rolling back delete of {}", key);
            self.records.insert(key, removed);
            return Err(e);
        }

        info!("Deleted {}", key);
        Ok(removed)
    }

    /// Write every record to the data file, replacing its content
    pub fn flush(&self) -> Result<()> {
        csv_file::write_records(&self.path, self.records.values())?;
        debug!("Wrote {} records to {}", self.len(), self.path().display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
