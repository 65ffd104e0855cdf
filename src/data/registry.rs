use super::error::RegistryError;
use super::page::PageId;
use super::snapshot::SnapshotRecord;
use std::collections::BTreeMap;
use std::path::Path;

/// Snapshot data compiled into the binary, one entry per dashboard page.
const EMBEDDED_SNAPSHOTS: [(&str, &str); 3] = [
    ("Page11", include_str!("../../snapshots/Page11.json")),
    ("Page13", include_str!("../../snapshots/Page13.json")),
    ("Page14", include_str!("../../snapshots/Page14.json")),
];

/// Owns every snapshot record for the lifetime of the process. Records are
/// keyed by their id; a separate assignment map binds page identifiers to
/// the record shown on that page. Consumers only ever get shared references.
#[derive(Debug, Default)]
pub struct SnapshotRegistry {
    records: BTreeMap<String, SnapshotRecord>,
    assignments: BTreeMap<PageId, String>,
}

impl SnapshotRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the registry from the snapshots compiled into the binary.
    pub fn embedded() -> Result<Self, RegistryError> {
        let mut registry = SnapshotRegistry::empty();
        for (page_name, raw) in EMBEDDED_SNAPSHOTS {
            let record = serde_json::from_str::<SnapshotRecord>(raw)?;
            let page = PageId::try_from(page_name)?;
            registry.insert_assigned(page, record)?;
        }
        Ok(registry)
    }

    /// Register a record without binding it to a page.
    pub fn insert(&mut self, record: SnapshotRecord) -> Result<(), RegistryError> {
        record.validate()?;
        if self.records.contains_key(&record.id) {
            return Err(RegistryError::DuplicateRecord(record.id));
        }
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    /// Register a record and bind it to a page.
    pub fn insert_assigned(
        &mut self,
        page: PageId,
        record: SnapshotRecord,
    ) -> Result<(), RegistryError> {
        let id = record.id.clone();
        self.insert(record)?;
        if let Some(previous) = self.assignments.insert(page, id) {
            tracing::warn!("{page} was reassigned away from record {previous}");
        }
        Ok(())
    }

    /// Load every `.json` snapshot file in a directory. A file whose stem is
    /// a valid page name is assigned to that page; anything else is
    /// registered by record id only. Files that fail to parse are skipped
    /// with a warning. Returns the number of records loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, RegistryError> {
        let mut loaded = 0;
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let raw = std::fs::read_to_string(&path)?;
            let record = match serde_json::from_str::<SnapshotRecord>(&raw) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Skipping snapshot file {}: {e}", path.display());
                    continue;
                }
            };
            let stem = path.file_stem().and_then(|stem| stem.to_str());
            match stem.map(PageId::try_from) {
                Some(Ok(page)) => self.insert_assigned(page, record)?,
                _ => self.insert(record)?,
            }
            loaded += 1;
        }
        Ok(loaded)
    }

    pub fn get(&self, id: &str) -> Option<&SnapshotRecord> {
        self.records.get(id)
    }

    /// The record bound to a page, if any.
    pub fn page_record(&self, page: PageId) -> Option<&SnapshotRecord> {
        self.assignments.get(&page).and_then(|id| self.get(id))
    }

    /// Every page with a record bound to it, in page order.
    pub fn assigned_pages(&self) -> Vec<PageId> {
        self.assignments.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SnapshotRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent as-of date across all records. ISO dates compare
    /// correctly as strings.
    pub fn latest_as_of(&self) -> Option<&str> {
        self.iter().map(|record| record.as_of.as_str()).max()
    }

    /// The record with the highest probability output.
    pub fn peak_probability(&self) -> Option<&SnapshotRecord> {
        self.iter().max_by(|a, b| {
            a.probability_pct
                .partial_cmp(&b.probability_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE2_JSON: &str = r#"{"id":"page2","as_of":"2025-05-01","title":"Page two","probability_pct":12.0,"z":-1.9,"features":{},"contributions":{},"notes":{}}"#;
    const STANDALONE_JSON: &str = r#"{"id":"standalone","as_of":"2025-04-01","title":"Unassigned","probability_pct":8.0,"z":-2.4,"features":{},"contributions":{},"notes":{}}"#;

    #[test]
    fn embedded_loads_every_page() {
        let registry = SnapshotRegistry::embedded().unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.assigned_pages(),
            vec![PageId::Page(11), PageId::Page(13), PageId::Page(14)]
        );
        assert_eq!(
            registry.page_record(PageId::Page(13)).unwrap().id,
            "recessionResult10"
        );
        assert!(registry.page_record(PageId::Page(1)).is_none());
    }

    #[test]
    fn embedded_records_pass_integrity_checks() {
        let registry = SnapshotRegistry::embedded().unwrap();
        for record in registry.iter() {
            record.validate().unwrap();
            assert!(record.z.is_finite());
        }
    }

    #[test]
    fn aggregates_cover_the_whole_registry() {
        let registry = SnapshotRegistry::embedded().unwrap();
        assert_eq!(registry.latest_as_of(), Some("2025-06-01"));
        assert_eq!(registry.peak_probability().unwrap().id, "recessionResult10");
    }

    #[test]
    fn duplicate_record_ids_are_rejected() {
        let mut registry = SnapshotRegistry::empty();
        let record: SnapshotRecord = serde_json::from_str(PAGE2_JSON).unwrap();
        registry.insert(record.clone()).unwrap();
        assert!(matches!(
            registry.insert(record),
            Err(RegistryError::DuplicateRecord(_))
        ));
    }

    #[test]
    fn load_dir_assigns_by_file_stem() {
        let dir = std::env::temp_dir().join("finance_deck_load_dir_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("Page2.json"), PAGE2_JSON).unwrap();
        std::fs::write(dir.join("standalone.json"), STANDALONE_JSON).unwrap();
        std::fs::write(dir.join("broken.json"), "{not json").unwrap();
        std::fs::write(dir.join("readme.txt"), "ignored").unwrap();

        let mut registry = SnapshotRegistry::empty();
        let loaded = registry.load_dir(&dir).unwrap();
        assert_eq!(loaded, 2);
        assert_eq!(registry.assigned_pages(), vec![PageId::Page(2)]);
        assert!(registry.page_record(PageId::Page(2)).is_some());
        assert!(registry.get("standalone").is_some());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
