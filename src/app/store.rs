// ABOUTME: Form state store - working applicant record and validation errors
// Every record mutation is written through to storage before returning

use crate::models::{FieldErrors, FormData, FormPatch};
use crate::storage::{self, keys, Storage};
use std::sync::Arc;
use tracing::debug;

pub struct FormStore {
    storage: Arc<dyn Storage>,
    form_data: FormData,
    errors: FieldErrors,
}

impl FormStore {
    /// Restore the persisted record, or start from an empty one
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let form_data = storage::load_json(storage.as_ref(), keys::FORM_DATA_KEY).unwrap_or_default();
        Self {
            storage,
            form_data,
            errors: FieldErrors::new(),
        }
    }

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Merge `patch` into the record and persist the result
    pub fn set_form_data(&mut self, patch: FormPatch) {
        self.form_data.apply(patch);
        storage::save_json(self.storage.as_ref(), keys::FORM_DATA_KEY, &self.form_data);
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Reset record and errors, dropping the persisted record and step index
    pub fn clear_form_data(&mut self) {
        debug!("Clearing working form data");
        self.form_data = FormData::default();
        self.errors.clear();
        storage::remove_or_warn(self.storage.as_ref(), keys::FORM_DATA_KEY);
        storage::remove_or_warn(self.storage.as_ref(), keys::CURRENT_STEP_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CustomField, FieldKey, FixedField};
    use crate::storage::{MemoryStorage, MockStorage, StorageError};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_empty_without_persisted_data() {
        let store = FormStore::load(Arc::new(MemoryStorage::new()));
        assert_eq!(store.form_data(), &FormData::default());
        assert!(store.errors().is_empty());
    }

    #[test]
    fn test_malformed_persisted_data_falls_back_to_defaults() {
        let storage = Arc::new(MemoryStorage::new());
        storage.save(keys::FORM_DATA_KEY, "{\"firstName\":").unwrap();

        let store = FormStore::load(storage);
        assert_eq!(store.form_data(), &FormData::default());
    }

    #[test]
    fn test_set_form_data_writes_through() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = FormStore::load(storage.clone());

        store.set_form_data(FormPatch::field(FixedField::Email, "ada@example.com"));

        let persisted: FormData = storage::load_json(storage.as_ref(), keys::FORM_DATA_KEY).unwrap();
        assert_eq!(persisted.email, "ada@example.com");
        assert_eq!(&persisted, store.form_data());
    }

    #[test]
    fn test_reload_yields_equal_record() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = FormStore::load(storage.clone());
        store.set_form_data(
            FormPatch::field(FixedField::FirstName, "Ada")
                .with(FixedField::Phone, "0123456789"),
        );
        store.set_form_data(FormPatch::fields(vec![CustomField::new("GitHub", "h", "e")]));

        let reloaded = FormStore::load(storage);
        assert_eq!(reloaded.form_data(), store.form_data());
    }

    #[test]
    fn test_errors_are_not_persisted() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = FormStore::load(storage.clone());

        let mut errors = FieldErrors::new();
        errors.insert(FieldKey::Fixed(FixedField::FirstName), "First Name is required".to_string());
        store.set_errors(errors);

        assert_eq!(store.errors().len(), 1);
        assert!(storage.keys().is_empty());

        store.clear_errors();
        assert!(store.errors().is_empty());
    }

    #[test]
    fn test_clear_removes_record_and_step() {
        let storage = Arc::new(MemoryStorage::new());
        storage.save(keys::CURRENT_STEP_KEY, "1").unwrap();
        let mut store = FormStore::load(storage.clone());
        store.set_form_data(FormPatch::field(FixedField::LastName, "Lovelace"));

        store.clear_form_data();

        assert_eq!(store.form_data(), &FormData::default());
        assert!(!storage.contains(keys::FORM_DATA_KEY));
        assert!(!storage.contains(keys::CURRENT_STEP_KEY));
    }

    #[test]
    fn test_write_failure_keeps_in_memory_update() {
        let mut mock = MockStorage::new();
        mock.expect_load().returning(|_| Ok(None));
        mock.expect_save().returning(|_, _| {
            Err(StorageError::Io {
                path: "storage.json".to_string(),
                source: std::io::Error::other("read-only filesystem"),
            })
        });

        let mut store = FormStore::load(Arc::new(mock));
        store.set_form_data(FormPatch::field(FixedField::FirstName, "Ada"));

        assert_eq!(store.form_data().first_name, "Ada");
    }
}
