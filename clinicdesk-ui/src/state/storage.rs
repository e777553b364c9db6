//! Browser storage backend for the session store

use clinicdesk::{SessionError, SessionStorage};

/// `window.localStorage`. Every call looks the storage object up again, so
/// a browser that blocks storage degrades to "nothing stored".
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn handle() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::handle()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let storage = Self::handle()
            .ok_or_else(|| SessionError::Storage("localStorage is unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::handle() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn set_get_remove_round_trip() {
        let storage = LocalStorage;
        storage.set("clinicdesk_test_key", "{\"id\":1}").unwrap();
        assert_eq!(
            storage.get("clinicdesk_test_key").as_deref(),
            Some("{\"id\":1}")
        );
        storage.remove("clinicdesk_test_key");
        assert!(storage.get("clinicdesk_test_key").is_none());
    }
}
