use super::*;

#[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
struct Profile {
    username: String,
}

/// Backend that throws on every call, like a locked-down browser profile.
struct BrokenStorage;

impl KeyValueStore for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Backend("SecurityError".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("QuotaExceededError".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("SecurityError".to_owned()))
    }
}

fn store_with(entries: &[(&str, &str)]) -> (CredentialStore, MemoryStorage) {
    let backend = MemoryStorage::new();
    for (key, value) in entries {
        backend.set(key, value).unwrap();
    }
    (CredentialStore::new(backend.clone()), backend)
}

// =============================================================
// read
// =============================================================

#[test]
fn read_returns_stored_value() {
    let (store, _) = store_with(&[("userToken", "abc123")]);
    assert_eq!(store.read("userToken").as_deref(), Some("abc123"));
}

#[test]
fn read_missing_key_is_none() {
    let (store, _) = store_with(&[]);
    assert_eq!(store.read("userToken"), None);
}

#[test]
fn read_swallows_backend_errors() {
    let store = CredentialStore::new(BrokenStorage);
    assert_eq!(store.read("userToken"), None);
}

#[test]
fn browser_store_reads_absent_outside_browser() {
    let store = CredentialStore::browser();
    assert_eq!(store.read("userToken"), None);
    store.write("userToken", "ignored");
    store.remove("userToken");
}

// =============================================================
// read_json
// =============================================================

#[test]
fn read_json_parses_valid_entry() {
    let (store, _) = store_with(&[("user", r#"{"username":"a@b.com"}"#)]);
    let profile: Option<Profile> = store.read_json("user");
    assert_eq!(profile, Some(Profile { username: "a@b.com".to_owned() }));
}

#[test]
fn read_json_treats_markers_as_absent_without_deleting() {
    for marker in ["undefined", "null"] {
        let (store, backend) = store_with(&[("user", marker)]);
        assert_eq!(store.read_json::<Profile>("user"), None);
        assert_eq!(backend.get("user").unwrap().as_deref(), Some(marker));
    }
}

#[test]
fn read_json_removes_malformed_entries() {
    for junk in ["{", "not json", "{\"username\":", "[1,2", "\u{0}"] {
        let (store, backend) = store_with(&[("user", junk)]);
        assert_eq!(store.read_json::<Profile>("user"), None, "input {junk:?}");
        assert_eq!(backend.get("user").unwrap(), None, "input {junk:?} not removed");
        assert_eq!(store.read_json::<Profile>("user"), None, "second read of {junk:?}");
    }
}

#[test]
fn read_json_removes_wrong_shape() {
    let (store, backend) = store_with(&[("user", "42")]);
    assert_eq!(store.read_json::<Profile>("user"), None);
    assert_eq!(backend.get("user").unwrap(), None);
}

#[test]
fn read_json_leaves_other_slots_alone() {
    let (store, backend) = store_with(&[("user", "{"), ("userToken", "abc")]);
    assert_eq!(store.read_json::<Profile>("user"), None);
    assert_eq!(backend.get("userToken").unwrap().as_deref(), Some("abc"));
}

// =============================================================
// write / remove
// =============================================================

#[test]
fn write_json_then_read_json() {
    let (store, _) = store_with(&[]);
    store.write_json("user", &Profile { username: "x@y.z".to_owned() });
    assert_eq!(store.read_json::<Profile>("user"), Some(Profile { username: "x@y.z".to_owned() }));
}

#[test]
fn write_overwrites_and_remove_deletes() {
    let (store, _) = store_with(&[("userToken", "old")]);
    store.write("userToken", "new");
    assert_eq!(store.read("userToken").as_deref(), Some("new"));
    store.remove("userToken");
    assert_eq!(store.read("userToken"), None);
}

#[test]
fn writes_to_broken_backend_do_not_panic() {
    let store = CredentialStore::new(BrokenStorage);
    store.write("userToken", "abc");
    store.write_json("user", &Profile { username: "a".to_owned() });
    store.remove("user");
}
