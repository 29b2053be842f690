//! Expense repository over a blob store
//!
//! The full expense sequence lives under the single key `"expenses"` as a JSON
//! array, newest first.

use tracing::warn;

use crate::error::PersistenceWarning;
use crate::models::Expense;

use super::blob::BlobStore;

/// Key the expense list is stored under
pub const EXPENSES_KEY: &str = "expenses";

/// Loads and saves the expense sequence
#[derive(Debug, Clone)]
pub struct ExpenseRepository<S> {
    blobs: S,
}

impl<S: BlobStore> ExpenseRepository<S> {
    /// Create a repository backed by `blobs`
    pub fn new(blobs: S) -> Self {
        Self { blobs }
    }

    /// The underlying blob store
    pub fn blobs(&self) -> &S {
        &self.blobs
    }

    /// Read the stored sequence
    ///
    /// `Ok(None)` means nothing has been stored yet. A blob that cannot be
    /// read or parsed comes back as a warning so the caller can start empty.
    pub fn load(&self) -> Result<Option<Vec<Expense>>, PersistenceWarning> {
        let raw = self.blobs.get(EXPENSES_KEY).map_err(|e| {
            let warning = PersistenceWarning::Read {
                key: EXPENSES_KEY.to_string(),
                reason: e.to_string(),
            };
            warn!(%warning, "failed to load expenses");
            warning
        })?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        serde_json::from_str::<Vec<Expense>>(&raw)
            .map_err(|e| e.to_string())
            .and_then(|records| {
                records.iter().try_for_each(check_stored)?;
                Ok(Some(records))
            })
            .map_err(|reason| {
                let warning = PersistenceWarning::Corrupt {
                    key: EXPENSES_KEY.to_string(),
                    reason,
                };
                warn!(%warning, "ignoring corrupt expense blob");
                warning
            })
    }

    /// Replace the stored sequence with `records`
    pub fn save(&mut self, records: &[Expense]) -> Result<(), PersistenceWarning> {
        let to_warning = |e: String| {
            let warning = PersistenceWarning::Write {
                key: EXPENSES_KEY.to_string(),
                reason: e,
            };
            warn!(%warning, "failed to save expenses");
            warning
        };

        let raw = serde_json::to_string(records).map_err(|e| to_warning(e.to_string()))?;
        self.blobs
            .set(EXPENSES_KEY, &raw)
            .map_err(|e| to_warning(e.to_string()))
    }
}

// A stored record must still satisfy the rules a draft is validated against.
fn check_stored(expense: &Expense) -> Result<(), String> {
    if !expense.amount.is_positive() {
        return Err(format!("expense {} has a non-positive amount", expense.id));
    }
    if expense.note.trim().is_empty() {
        return Err(format!("expense {} has an empty note", expense.id));
    }
    Ok(())
}
