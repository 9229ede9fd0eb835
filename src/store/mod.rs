// Tue Aug 04 2026 - Alex

pub mod error;

pub use error::StoreError;

use std::collections::HashMap;

use crate::config::Persistence;

pub type AliasMap = HashMap<String, String>;

/// Alias registry backed by a persistence port. The map is loaded once on
/// open and written back whole after every mutation.
pub struct AliasStore {
    aliases: AliasMap,
    backend: Box<dyn Persistence>,
}

impl AliasStore {
    pub fn open(backend: Box<dyn Persistence>) -> Result<Self, StoreError> {
        let aliases = backend.load()?;
        log::debug!("loaded {} aliases", aliases.len());

        Ok(Self { aliases, backend })
    }

    pub fn add(&mut self, alias: &str, directory: &str) -> Result<(), StoreError> {
        // TODO: check for an existing alias before overwriting.
        self.aliases.insert(alias.to_string(), directory.to_string());
        log::debug!("added alias '{}' -> {}", alias, directory);

        self.backend.save(&self.aliases)?;
        Ok(())
    }

    pub fn remove(&mut self, alias: &str) -> Result<(), StoreError> {
        if self.aliases.remove(alias).is_some() {
            log::debug!("removed alias '{}'", alias);
        }

        self.backend.save(&self.aliases)?;
        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Resolve an alias to its directory. An exact match wins outright, even
    /// when the alias also prefixes other registered names. Otherwise a
    /// unique prefix match resolves, and multiple prefix matches report the
    /// whole candidate set.
    pub fn resolve(&self, alias: &str) -> Result<&str, StoreError> {
        if let Some(directory) = self.aliases.get(alias) {
            return Ok(directory);
        }

        let matches: Vec<&str> = self
            .aliases
            .keys()
            .map(String::as_str)
            .filter(|name| name.starts_with(alias))
            .collect();

        match matches.len() {
            0 => Err(StoreError::NotRegistered(alias.to_string())),
            1 => Ok(self.aliases[matches[0]].as_str()),
            _ => {
                let mut candidates: Vec<String> =
                    matches.into_iter().map(str::to_string).collect();
                candidates.sort();

                Err(StoreError::Ambiguous {
                    alias: alias.to_string(),
                    candidates,
                })
            }
        }
    }
}
