use super::backend::StorageBackend;
use super::{DataStore, Statistics};
use crate::error::{Result, RosterError};
use crate::model::{round2, Category, NewRecord, Record, RecordPatch};
use crate::validation::{
    check_contact, check_department, check_entry_year, check_gpa, check_id, check_name,
    check_status, current_year,
};
use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Wrap a backend without touching its contents.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Wrap a backend and make sure it holds a readable list.
    ///
    /// A missing list is initialized empty; a corrupt one is logged and
    /// replaced with an empty list. Other read errors are returned.
    pub fn open(backend: B) -> Result<Self> {
        let store = Self::with_backend(backend);
        match store.backend.load_records() {
            Ok(Some(records)) => {
                debug!(count = records.len(), "loaded records");
            }
            Ok(None) => {
                debug!(path = %store.backend.location().display(), "initializing empty store");
                store.backend.save_records(&[])?;
            }
            Err(RosterError::Corrupt { path, source }) => {
                warn!(path = %path.display(), error = %source, "data file is corrupt, starting empty");
                store.backend.save_records(&[])?;
            }
            Err(e) => return Err(e),
        }
        Ok(store)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Strict load used by mutations: read errors propagate.
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.backend.load_records()?.unwrap_or_default())
    }

    /// Lenient load used by reads: any failure reads as empty.
    fn load_or_empty(&self) -> Vec<Record> {
        match self.backend.load_records() {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "could not read records, treating store as empty");
                Vec::new()
            }
        }
    }
}

/// Builds the record that results from applying `patch` to `current`.
/// Fields are checked in order; the first failure aborts.
fn apply_patch(current: &Record, patch: &RecordPatch) -> Result<Record> {
    let mut next = current.clone();

    if let Some(name) = &patch.name {
        check_name(name)?;
        next.name = name.trim().to_string();
    }
    if let Some(department) = &patch.department {
        check_department(department)?;
        next.department = department.trim().to_string();
    }
    if let Some(contact) = &patch.contact {
        check_contact(contact)?;
        next.contact = contact.trim().to_string();
    }
    if let Some(status) = &patch.status {
        next.status = check_status(status)?;
    }
    if let Some(year) = patch.entry_year {
        check_entry_year(year)?;
        next.entry_year = year;
    }
    if let Some(gpa) = patch.gpa {
        if current.gpa.is_some() {
            check_gpa(gpa)?;
            next.gpa = Some(round2(gpa));
        } else {
            debug!(id = %current.id, "record carries no gpa, ignoring gpa update");
        }
    }

    Ok(next)
}

impl<B: StorageBackend> DataStore for RecordStore<B> {
    fn create(&mut self, input: NewRecord) -> Result<Record> {
        check_name(&input.name)?;
        check_id(&input.id)?;
        check_contact(&input.contact)?;
        check_department(&input.department)?;
        let entry_year = match input.entry_year {
            Some(year) => {
                check_entry_year(year)?;
                year
            }
            None => current_year(),
        };
        if let (Category::Returning, Some(gpa)) = (input.category, input.gpa) {
            check_gpa(gpa)?;
        }

        let mut records = self.load()?;
        let id = input.id.trim().to_string();
        if records.iter().any(|r| r.id == id) {
            return Err(RosterError::DuplicateKey(id));
        }

        let defaults = input.category.apply_defaults(&input);
        let record = Record {
            name: input.name.trim().to_string(),
            id,
            department: input.department.trim().to_string(),
            contact: input.contact.trim().to_string(),
            entry_year,
            status: defaults.status,
            category: input.category,
            created_at: Utc::now(),
            gpa: defaults.gpa,
            orientation_done: defaults.orientation_done,
        };

        records.push(record.clone());
        self.backend.save_records(&records)?;
        info!(id = %record.id, category = %record.category, "record created");

        Ok(record)
    }

    fn read_all(&self) -> Vec<Record> {
        self.load_or_empty()
    }

    fn read_by_id(&self, id: &str) -> Result<Record> {
        let key = id.trim();
        self.load_or_empty()
            .into_iter()
            .find(|r| r.id == key)
            .ok_or_else(|| RosterError::NotFound(key.to_string()))
    }

    fn update(&mut self, id: &str, patch: RecordPatch) -> Result<Record> {
        let key = id.trim();
        let mut records = self.load()?;
        let pos = records
            .iter()
            .position(|r| r.id == key)
            .ok_or_else(|| RosterError::NotFound(key.to_string()))?;

        let updated = apply_patch(&records[pos], &patch)?;
        records[pos] = updated.clone();
        self.backend.save_records(&records)?;
        info!(id = %updated.id, "record updated");

        Ok(updated)
    }

    fn delete(&mut self, id: &str) -> Result<Record> {
        let key = id.trim();
        let mut records = self.load()?;
        let pos = records
            .iter()
            .position(|r| r.id == key)
            .ok_or_else(|| RosterError::NotFound(key.to_string()))?;

        let removed = records.remove(pos);
        self.backend.save_records(&records)?;
        info!(id = %removed.id, "record deleted");

        Ok(removed)
    }

    fn statistics(&self) -> Statistics {
        let records = self.load_or_empty();
        let mut stats = Statistics {
            total: records.len(),
            ..Default::default()
        };

        let mut gpa_sum = 0.0;
        for record in &records {
            *stats
                .per_department
                .entry(record.department.clone())
                .or_insert(0) += 1;
            *stats.per_status.entry(record.status).or_insert(0) += 1;
            if let Some(gpa) = record.gpa {
                gpa_sum += gpa;
                stats.records_with_gpa += 1;
            }
        }
        if stats.records_with_gpa > 0 {
            stats.average_gpa = round2(gpa_sum / stats.records_with_gpa as f64);
        }

        stats
    }

    fn location(&self) -> PathBuf {
        self.backend.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, Status};
    use crate::store::mem_backend::MemBackend;

    fn make_store() -> RecordStore<MemBackend> {
        RecordStore::open(MemBackend::new()).unwrap()
    }

    fn budi() -> NewRecord {
        NewRecord::new(
            "Budi Santoso",
            "12345678",
            "Teknik Informatika",
            "budi@domain.com",
        )
    }

    fn returning(id: &str, gpa: f64) -> NewRecord {
        NewRecord::new("Sari Dewi", id, "Akuntansi", "sari@domain.com")
            .with_category(Category::Returning)
            .with_gpa(gpa)
    }

    fn assert_validation(result: Result<Record>, expected: Field) {
        match result {
            Err(RosterError::Validation { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected validation error on {}, got {:?}", expected, other),
        }
    }

    // --- Open / Initialization ---

    #[test]
    fn open_initializes_missing_store() {
        let store = make_store();
        assert_eq!(store.backend().raw().as_deref(), Some("[]"));
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn open_replaces_corrupt_store() {
        let backend = MemBackend::new();
        backend.set_raw("{ not json");
        let store = RecordStore::open(backend).unwrap();
        assert_eq!(store.backend().raw().as_deref(), Some("[]"));
    }

    #[test]
    fn reads_mask_corruption_after_open() {
        let mut store = make_store();
        store.create(budi()).unwrap();
        store.backend().set_raw("garbage");

        assert!(store.read_all().is_empty());
        assert!(matches!(
            store.read_by_id("12345678"),
            Err(RosterError::NotFound(_))
        ));
        assert_eq!(store.statistics(), Statistics::default());
    }

    #[test]
    fn mutations_propagate_corruption() {
        let mut store = make_store();
        store.backend().set_raw("garbage");
        assert!(matches!(
            store.create(budi()),
            Err(RosterError::Corrupt { .. })
        ));
        // nothing was written over the corrupt content
        assert_eq!(store.backend().raw().as_deref(), Some("garbage"));
    }

    // --- Create ---

    #[test]
    fn create_then_read_returns_input_plus_defaults() {
        let mut store = make_store();
        let created = store.create(budi().with_entry_year(2022)).unwrap();

        let read = store.read_by_id("12345678").unwrap();
        assert_eq!(read, created);
        assert_eq!(read.name, "Budi Santoso");
        assert_eq!(read.department, "Teknik Informatika");
        assert_eq!(read.contact, "budi@domain.com");
        assert_eq!(read.entry_year, 2022);
        assert_eq!(read.status, Status::Active);
        assert_eq!(read.category, Category::General);
        assert_eq!(read.gpa, None);
        assert_eq!(read.orientation_done, None);
    }

    #[test]
    fn create_defaults_entry_year_to_current_year() {
        let mut store = make_store();
        let created = store.create(budi()).unwrap();
        assert_eq!(created.entry_year, current_year());
    }

    #[test]
    fn create_duplicate_id_fails() {
        let mut store = make_store();
        store.create(budi()).unwrap();

        let other = NewRecord::new("Another One", "12345678", "Manajemen", "x@y.com");
        match store.create(other) {
            Err(RosterError::DuplicateKey(id)) => assert_eq!(id, "12345678"),
            other => panic!("expected duplicate key, got {:?}", other),
        }
        assert_eq!(store.read_all().len(), 1);
    }

    #[test]
    fn create_duplicate_detection_ignores_surrounding_whitespace() {
        let mut store = make_store();
        store.create(budi()).unwrap();
        let mut again = budi();
        again.id = " 12345678 ".into();
        assert!(matches!(
            store.create(again),
            Err(RosterError::DuplicateKey(_))
        ));
    }

    #[test]
    fn create_validates_in_field_order() {
        let mut store = make_store();

        let mut input = budi();
        input.name = "Al".into();
        input.id = "abc".into();
        assert_validation(store.create(input), Field::Name);

        let mut input = budi();
        input.id = "abc12345".into();
        input.contact = "nope".into();
        assert_validation(store.create(input), Field::Id);

        let mut input = budi();
        input.contact = "nope".into();
        input.department = "".into();
        assert_validation(store.create(input), Field::Contact);

        let mut input = budi();
        input.department = "  ".into();
        assert_validation(store.create(input), Field::Department);

        assert_validation(store.create(budi().with_entry_year(1989)), Field::EntryYear);
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn create_returning_carries_rounded_gpa() {
        let mut store = make_store();
        let created = store.create(returning("20200001", 3.456)).unwrap();
        assert_eq!(created.gpa, Some(3.46));
        assert_eq!(created.category, Category::Returning);
    }

    #[test]
    fn create_returning_rejects_out_of_range_gpa() {
        let mut store = make_store();
        assert_validation(store.create(returning("20200001", 4.5)), Field::Gpa);
    }

    #[test]
    fn create_general_ignores_gpa() {
        let mut store = make_store();
        let created = store.create(budi().with_gpa(9.0)).unwrap();
        assert_eq!(created.gpa, None);
    }

    #[test]
    fn create_new_student_is_active_with_orientation() {
        let mut store = make_store();
        let created = store
            .create(
                budi()
                    .with_category(Category::New)
                    .with_status(Status::Leave),
            )
            .unwrap();
        assert_eq!(created.status, Status::Active);
        assert_eq!(created.orientation_done, Some(true));
    }

    #[test]
    fn create_trims_text_fields() {
        let mut store = make_store();
        let input = NewRecord::new("  Budi  ", " 12345678", " TI ", " budi@domain.com ");
        let created = store.create(input).unwrap();
        assert_eq!(created.name, "Budi");
        assert_eq!(created.id, "12345678");
        assert_eq!(created.department, "TI");
        assert_eq!(created.contact, "budi@domain.com");
    }

    #[test]
    fn create_write_failure_propagates() {
        let mut store = make_store();
        store.backend().set_simulate_write_error(true);
        assert!(matches!(
            store.create(budi()),
            Err(RosterError::Storage(_))
        ));
        store.backend().set_simulate_write_error(false);
        assert!(store.read_all().is_empty());
    }

    // --- Read ---

    #[test]
    fn read_all_preserves_insertion_order() {
        let mut store = make_store();
        for (name, id) in [("Zulu", "30000000"), ("Alpha", "10000000"), ("Mike", "20000000")] {
            store
                .create(NewRecord::new(name, id, "TI", "a@b.com"))
                .unwrap();
        }
        let names: Vec<_> = store.read_all().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Zulu", "Alpha", "Mike"]);
    }

    #[test]
    fn read_filtered_by_department_and_status() {
        let mut store = make_store();
        store
            .create(NewRecord::new("Ani", "10000001", "TI", "a@b.com"))
            .unwrap();
        store
            .create(NewRecord::new("Bob", "10000002", "SI", "b@b.com").with_status(Status::Leave))
            .unwrap();
        store
            .create(NewRecord::new("Cici", "10000003", "TI", "c@b.com").with_status(Status::Leave))
            .unwrap();

        let filter = crate::model::RecordFilter {
            departments: vec!["TI".into()],
            statuses: vec![Status::Leave],
        };
        let ids: Vec<_> = store
            .read_filtered(&filter)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["10000003"]);

        let everything = store.read_filtered(&Default::default());
        assert_eq!(everything.len(), 3);
    }

    #[test]
    fn read_by_id_missing() {
        let store = make_store();
        assert!(matches!(
            store.read_by_id("99999999"),
            Err(RosterError::NotFound(_))
        ));
    }

    // --- Update ---

    #[test]
    fn update_applies_provided_fields() {
        let mut store = make_store();
        let created = store.create(budi()).unwrap();

        let updated = store
            .update(
                "12345678",
                RecordPatch::new()
                    .name("Budi S.")
                    .status("GRADUATED")
                    .contact("budi@uni.ac.id"),
            )
            .unwrap();

        assert_eq!(updated.name, "Budi S.");
        assert_eq!(updated.status, Status::Graduated);
        assert_eq!(updated.contact, "budi@uni.ac.id");
        assert_eq!(updated.department, created.department);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(store.read_by_id("12345678").unwrap(), updated);
    }

    #[test]
    fn update_gpa_out_of_range_fails() {
        let mut store = make_store();
        store.create(returning("20200001", 3.0)).unwrap();

        assert_validation(
            store.update("20200001", RecordPatch::new().gpa(5.0)),
            Field::Gpa,
        );
        assert_eq!(store.read_by_id("20200001").unwrap().gpa, Some(3.0));
    }

    #[test]
    fn update_gpa_rounds_to_two_decimals() {
        let mut store = make_store();
        store.create(returning("20200001", 3.0)).unwrap();
        let updated = store
            .update("20200001", RecordPatch::new().gpa(3.14159))
            .unwrap();
        assert_eq!(updated.gpa, Some(3.14));
    }

    #[test]
    fn update_gpa_ignored_without_gpa_field() {
        let mut store = make_store();
        store.create(budi()).unwrap();
        let updated = store
            .update("12345678", RecordPatch::new().gpa(5.0))
            .unwrap();
        assert_eq!(updated.gpa, None);
    }

    #[test]
    fn update_invalid_field_writes_nothing() {
        let mut store = make_store();
        let created = store.create(budi()).unwrap();

        let result = store.update(
            "12345678",
            RecordPatch::new().name("Valid Name").status("expelled"),
        );
        assert_validation(result, Field::Status);
        assert_eq!(store.read_by_id("12345678").unwrap(), created);
    }

    #[test]
    fn update_missing_record_fails() {
        let mut store = make_store();
        assert!(matches!(
            store.update("99999999", RecordPatch::new().name("Nobody")),
            Err(RosterError::NotFound(_))
        ));
    }

    // --- Delete ---

    #[test]
    fn delete_removes_exactly_one() {
        let mut store = make_store();
        store.create(budi()).unwrap();
        store.create(returning("20200001", 3.2)).unwrap();

        let removed = store.delete("12345678").unwrap();
        assert_eq!(removed.name, "Budi Santoso");
        assert_eq!(store.read_all().len(), 1);
        assert!(matches!(
            store.read_by_id("12345678"),
            Err(RosterError::NotFound(_))
        ));
    }

    #[test]
    fn delete_missing_record_fails() {
        let mut store = make_store();
        store.create(budi()).unwrap();
        assert!(matches!(
            store.delete("87654321"),
            Err(RosterError::NotFound(_))
        ));
        assert_eq!(store.read_all().len(), 1);
    }

    // --- Statistics ---

    #[test]
    fn statistics_empty_store() {
        let store = make_store();
        let stats = store.statistics();
        assert_eq!(stats.total, 0);
        assert!(stats.per_department.is_empty());
        assert!(stats.per_status.is_empty());
        assert_eq!(stats.average_gpa, 0.0);
        assert_eq!(stats.records_with_gpa, 0);
    }

    #[test]
    fn statistics_aggregates() {
        let mut store = make_store();
        store.create(budi()).unwrap();
        store.create(returning("20200001", 3.0)).unwrap();
        store
            .create(returning("20200002", 3.5).with_status(Status::Graduated))
            .unwrap();

        let stats = store.statistics();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.per_department["Teknik Informatika"], 1);
        assert_eq!(stats.per_department["Akuntansi"], 2);
        assert_eq!(stats.per_status[&Status::Active], 2);
        assert_eq!(stats.per_status[&Status::Graduated], 1);
        assert_eq!(stats.records_with_gpa, 2);
        assert_eq!(stats.average_gpa, 3.25);
    }
}
