use crate::models::{Doctor, SpecialityCatalog, SPECIALITIES_DOCUMENT_ID};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use service_core::error::AppError;
use std::sync::Mutex;

/// Data access used by the handlers.
///
/// Normalization of the specialities document happens behind this trait, so
/// callers only ever see the list form.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// `Ok(None)` when the specialities document does not exist.
    async fn load_specialities(&self) -> Result<Option<SpecialityCatalog>, AppError>;

    /// Overwrite the specialities document with `catalog`. Fails with a
    /// database error if the document no longer exists.
    async fn save_specialities(&self, catalog: &SpecialityCatalog) -> Result<(), AppError>;

    /// Insert a new doctor record and return the identifier the store assigned.
    async fn insert_doctor(&self, doctor: &Doctor) -> Result<String, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}

/// Process-local store for tests and local runs without MongoDB.
pub struct InMemoryStore {
    specialities: Mutex<Option<Document>>,
    doctors: Mutex<Vec<(String, Doctor)>>,
    write_failure: Mutex<Option<String>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Empty store: no specialities document, no doctors.
    pub fn new() -> Self {
        Self {
            specialities: Mutex::new(None),
            doctors: Mutex::new(Vec::new()),
            write_failure: Mutex::new(None),
        }
    }

    pub fn with_specialities<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let catalog = SpecialityCatalog::new(names.into_iter().map(Into::into).collect());
        Self::with_specialities_document(catalog.to_document())
    }

    /// Seed the raw stored document, e.g. a legacy single-string form.
    pub fn with_specialities_document(mut document: Document) -> Self {
        document.insert("_id", SPECIALITIES_DOCUMENT_ID);
        let store = Self::new();
        *lock(&store.specialities) = Some(document);
        store
    }

    /// Make every subsequent write fail with `message`.
    pub fn fail_writes_with(&self, message: impl Into<String>) {
        *lock(&self.write_failure) = Some(message.into());
    }

    pub fn specialities_document(&self) -> Option<Document> {
        lock(&self.specialities).clone()
    }

    pub fn doctors(&self) -> Vec<(String, Doctor)> {
        lock(&self.doctors).clone()
    }

    fn check_writable(&self) -> Result<(), AppError> {
        match lock(&self.write_failure).as_ref() {
            Some(message) => Err(AppError::DatabaseError(anyhow::anyhow!(message.clone()))),
            None => Ok(()),
        }
    }
}

// A poisoned lock only means another test thread panicked mid-write; the data
// is still usable.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl DirectoryStore for InMemoryStore {
    async fn load_specialities(&self) -> Result<Option<SpecialityCatalog>, AppError> {
        let stored = lock(&self.specialities).clone();
        stored.map(SpecialityCatalog::from_document).transpose()
    }

    async fn save_specialities(&self, catalog: &SpecialityCatalog) -> Result<(), AppError> {
        self.check_writable()?;
        let mut stored = lock(&self.specialities);
        if stored.is_none() {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "conflict: {} was removed before it could be saved",
                SPECIALITIES_DOCUMENT_ID
            )));
        }
        *stored = Some(catalog.to_document());
        Ok(())
    }

    async fn insert_doctor(&self, doctor: &Doctor) -> Result<String, AppError> {
        self.check_writable()?;
        let id = ObjectId::new().to_hex();
        lock(&self.doctors).push((id.clone(), doctor.clone()));
        Ok(id)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
