//! Expense store
//!
//! Owns the ordered expense sequence for a session and routes every mutation
//! through add/update/remove. After each mutation the full sequence is saved
//! through the repository; a failed save is reported, never rolled back.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult, PersistenceWarning};
use crate::models::{Expense, ExpenseFields, ExpenseId, IdGenerator};
use crate::storage::{BlobStore, ExpenseRepository};

/// The result of an operation plus any persistence problem it ran into
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Outcome<T> {
    pub value: T,
    pub warning: Option<PersistenceWarning>,
}

impl<T> Outcome<T> {
    fn new(value: T, warning: Option<PersistenceWarning>) -> Self {
        Self { value, warning }
    }

    /// Drop the warning and keep the value
    pub fn into_value(self) -> T {
        self.value
    }

    /// Split into the value and the warning
    pub fn into_parts(self) -> (T, Option<PersistenceWarning>) {
        (self.value, self.warning)
    }
}

/// The session's expense collection, newest first
pub struct ExpenseStore<S> {
    expenses: Vec<Expense>,
    repository: ExpenseRepository<S>,
    ids: IdGenerator,
}

impl<S: BlobStore> ExpenseStore<S> {
    /// Hydrate a store from `repository`
    ///
    /// Missing data gives an empty store. Unreadable or corrupt data also gives
    /// an empty store, with the warning attached.
    pub fn open(repository: ExpenseRepository<S>) -> Outcome<Self> {
        let (expenses, warning) = match repository.load() {
            Ok(Some(expenses)) => (expenses, None),
            Ok(None) => (Vec::new(), None),
            Err(warning) => (Vec::new(), Some(warning)),
        };

        debug!(count = expenses.len(), "hydrated expense store");

        let ids = IdGenerator::seeded(expenses.iter().map(|e| &e.id));
        Outcome::new(
            Self {
                expenses,
                repository,
                ids,
            },
            warning,
        )
    }

    /// Commit a new expense, stamped now
    pub fn add(&mut self, fields: ExpenseFields) -> Outcome<Expense> {
        self.add_at(fields, Utc::now())
    }

    /// Commit a new expense created at `now`
    pub fn add_at(&mut self, fields: ExpenseFields, now: DateTime<Utc>) -> Outcome<Expense> {
        let id = self.ids.next_at(now);
        let expense = Expense::new(id, fields, now);
        self.expenses.insert(0, expense.clone());

        info!(id = %expense.id, amount = expense.amount.value(), "added expense");
        let warning = self.persist();
        Outcome::new(expense, warning)
    }

    /// Replace the editable fields of expense `id` in place
    ///
    /// Every record carrying `id` is updated, so stored duplicates stay in
    /// step.
    pub fn update(&mut self, id: ExpenseId, fields: ExpenseFields) -> ExpenseResult<Outcome<Expense>> {
        let mut updated = None;
        for expense in self.expenses.iter_mut().filter(|e| e.id == id) {
            expense.replace_fields(fields.clone());
            updated.get_or_insert_with(|| expense.clone());
        }
        let updated = updated.ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        info!(id = %updated.id, "updated expense");
        let warning = self.persist();
        Ok(Outcome::new(updated, warning))
    }

    /// Remove expense `id`
    ///
    /// Every record carrying `id` goes. Removing an id that is not present is
    /// a no-op and saves nothing.
    pub fn remove(&mut self, id: ExpenseId) -> Outcome<Option<Expense>> {
        let Some(index) = self.expenses.iter().position(|e| e.id == id) else {
            debug!(%id, "remove of missing expense ignored");
            return Outcome::new(None, None);
        };

        let removed = self.expenses.remove(index);
        self.expenses.retain(|e| e.id != id);
        info!(%id, "removed expense");
        let warning = self.persist();
        Outcome::new(Some(removed), warning)
    }

    /// Every expense, newest first
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    /// Look up one expense
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The repository the store saves through
    pub fn repository(&self) -> &ExpenseRepository<S> {
        &self.repository
    }

    fn persist(&mut self) -> Option<PersistenceWarning> {
        self.repository.save(&self.expenses).err()
    }
}
