//! JSON book of record backing the CLI.
//!
//! One file holds the company profile, client roster, claims, and the
//! submission audit trail. Commands load it into a [`MemoryStore`], run
//! the lifecycle operation, and write the updated book back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use claims_model::{ClaimRecord, ClaimSubmission, ClientRecord, CompanyRecord};
use claims_submit::MemoryStore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookOfRecord {
    pub company: CompanyRecord,
    #[serde(default)]
    pub clients: Vec<ClientRecord>,
    #[serde(default)]
    pub claims: Vec<ClaimRecord>,
    #[serde(default)]
    pub submissions: Vec<ClaimSubmission>,
}

impl BookOfRecord {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read book of record {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parse book of record {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("serialize book of record")?;
        fs::write(path, text)
            .with_context(|| format!("write book of record {}", path.display()))?;
        Ok(())
    }

    pub fn into_store(self) -> MemoryStore {
        MemoryStore::new(self.company)
            .with_clients(self.clients)
            .with_claims(self.claims)
            .with_submissions(self.submissions)
    }

    /// Rebuild the book from a store after a mutating operation.
    pub fn from_store(store: MemoryStore) -> Self {
        Self {
            // Commands build stores via `into_store`, so the company is
            // always present here.
            company: store.company.unwrap_or_default(),
            clients: store.clients.into_values().collect(),
            claims: store.claims.into_values().collect(),
            submissions: store.submissions,
        }
    }
}
