use std::sync::Arc;

use sha2::{Digest, Sha256};

use super::error::LoadError;
use super::loader::{parse_upload, Format, Upload};
use super::model::RawTable;

/// Hex SHA-256 of an upload's format tag and bytes, so the same bytes under
/// another extension are parsed again.
pub fn upload_key(format: Format, bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format.as_str().as_bytes());
    hasher.update([0u8]);
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// The parsed upload currently held by the cache.
#[derive(Debug, Clone)]
pub struct CachedUpload {
    key: String,
    pub name: String,
    pub table: Arc<RawTable>,
}

/// Holds the most recent parsed upload so interactions never re-parse.
///
/// Entries are write-once: a different upload replaces the entry, the same
/// bytes in the same format hit it. A failed parse leaves the previous entry
/// in place; callers that must forget it use [`UploadCache::clear`].
#[derive(Debug, Default)]
pub struct UploadCache {
    entry: Option<CachedUpload>,
}

impl UploadCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed table for `upload`, parsing only on a miss.
    pub fn load(&mut self, upload: &Upload) -> Result<Arc<RawTable>, LoadError> {
        let key = upload_key(upload.format()?, &upload.bytes);
        if let Some(entry) = &self.entry {
            if entry.key == key {
                log::debug!("Upload cache hit for {} ({})", upload.name, &key[..12]);
                return Ok(Arc::clone(&entry.table));
            }
        }

        log::debug!("Upload cache miss for {} ({})", upload.name, &key[..12]);
        let table = Arc::new(parse_upload(upload)?);
        self.entry = Some(CachedUpload {
            key,
            name: upload.name.clone(),
            table: Arc::clone(&table),
        });
        Ok(table)
    }

    pub fn current(&self) -> Option<&CachedUpload> {
        self.entry.as_ref()
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_stable_hex_sha256() {
        assert_eq!(
            upload_key(Format::Csv, b""),
            "c2e1133ef3ac7902f66e8429f74262ed745d1b22241769c551a28a2d55afb61f"
        );
        assert_eq!(upload_key(Format::Csv, b"abc"), upload_key(Format::Csv, b"abc"));
        assert_ne!(upload_key(Format::Csv, b"abc"), upload_key(Format::Csv, b"abd"));
    }

    #[test]
    fn key_depends_on_format() {
        let csv = upload_key(Format::Csv, b"[]");
        assert_eq!(csv, upload_key(Format::Csv, b"[]"));
        assert_ne!(csv, upload_key(Format::Json, b"[]"));
        assert_eq!(csv.len(), 64);
    }

    #[test]
    fn same_bytes_hit_the_cache() {
        let mut cache = UploadCache::new();
        let upload = Upload::new("a.csv", b"Title\nA\n".to_vec());
        let first = cache.load(&upload).unwrap();
        let renamed = Upload::new("copy.csv", upload.bytes.clone());
        let second = cache.load(&renamed).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.current().unwrap().name, "a.csv");
    }

    #[test]
    fn same_bytes_in_another_format_are_parsed_again() {
        let mut cache = UploadCache::new();
        let bytes = b"Title\nA\n".to_vec();
        cache.load(&Upload::new("x.csv", bytes.clone())).unwrap();
        let err = cache.load(&Upload::new("x.json", bytes)).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn new_upload_replaces_entry() {
        let mut cache = UploadCache::new();
        let first = cache.load(&Upload::new("a.csv", b"Title\nA\n".to_vec())).unwrap();
        let second = cache.load(&Upload::new("b.csv", b"Title\nB\n".to_vec())).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(cache.current().unwrap().name, "b.csv");
    }

    #[test]
    fn failed_parse_keeps_previous_entry() {
        let mut cache = UploadCache::new();
        cache.load(&Upload::new("a.csv", b"Title\nA\n".to_vec())).unwrap();
        assert!(cache.load(&Upload::new("b.json", b"not json".to_vec())).is_err());
        assert_eq!(cache.current().unwrap().name, "a.csv");
        cache.clear();
        assert!(cache.current().is_none());
    }
}
