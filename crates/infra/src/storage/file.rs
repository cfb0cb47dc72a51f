//! JSON file credential store
//!
//! The file is a flat JSON object, `{"tld-api-key": "..."}`, so other entries
//! written by hand survive a save.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tldcheck_core::CredentialStore;
use tldcheck_domain::{Credential, Result, TldCheckError};
use tracing::{debug, warn};

use crate::errors::InfraError;

pub struct FileCredentialStore {
    path: PathBuf,
    entry_name: String,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>, entry_name: impl Into<String>) -> Self {
        Self { path: path.into(), entry_name: entry_name.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(InfraError::from(e).into()),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&contents).map_err(InfraError::from)? {
            Value::Object(entries) => Ok(entries),
            _ => Err(TldCheckError::Storage(format!(
                "credential file {} is not a JSON object",
                self.path.display()
            ))),
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(InfraError::from)?;
        }

        let contents = serde_json::to_string_pretty(entries).map_err(InfraError::from)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, contents).map_err(InfraError::from)?;
        restrict_permissions(&staging)?;
        fs::rename(&staging, &self.path).map_err(InfraError::from)?;
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|e| TldCheckError::from(InfraError::from(e)))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<Credential>> {
        let entries = self.read_entries()?;
        match entries.get(&self.entry_name) {
            Some(Value::String(key)) if !key.is_empty() => Ok(Some(Credential::new(key.clone()))),
            Some(Value::String(_)) | Some(Value::Null) | None => Ok(None),
            Some(_) => {
                warn!(path = %self.path.display(), entry = %self.entry_name, "ignoring non-string credential entry");
                Ok(None)
            }
        }
    }

    fn save(&self, credential: &Credential) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(self.entry_name.clone(), Value::String(credential.expose().to_string()));
        self.write_entries(&entries)?;

        debug!(path = %self.path.display(), key = %credential.fingerprint(), "API key written to file");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(&self.entry_name).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> FileCredentialStore {
        FileCredentialStore::new(dir.path().join("nested").join("credentials.json"), "tld-api-key")
    }

    #[test]
    fn missing_file_loads_nothing() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load().unwrap(), None);
    }

    #[test]
    fn save_then_load_across_instances() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).save(&Credential::new("abc123")).unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.load().unwrap(), Some(Credential::new("abc123")));

        let raw: Value = serde_json::from_str(&fs::read_to_string(reopened.path()).unwrap()).unwrap();
        assert_eq!(raw["tld-api-key"], "abc123");
    }

    #[test]
    fn save_overwrites_and_keeps_other_entries() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"other": "keep", "tld-api-key": "old"}"#).unwrap();

        store.save(&Credential::new("new")).unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["tld-api-key"], "new");
        assert_eq!(raw["other"], "keep");
    }

    #[test]
    fn clear_removes_entry_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&Credential::new("abc")).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.load(), Err(TldCheckError::Storage(_))));
    }

    #[test]
    fn empty_value_counts_as_absent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"tld-api-key": ""}"#).unwrap();

        assert_eq!(store.load().unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&Credential::new("secret")).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
