//! Key/value persistence backing the theme and session contexts.
//!
//! On wasm this is `window.localStorage`. Other targets get a process-local
//! map so the contexts behave the same under test.

use serde::{de::DeserializeOwned, Serialize};

use super::error::StorageError;

pub fn read(key: &str) -> Result<Option<String>, StorageError> {
    backend::read(key)
}

pub fn write(key: &str, value: &str) -> Result<(), StorageError> {
    backend::write(key, value)
}

pub fn remove(key: &str) -> Result<(), StorageError> {
    backend::remove(key)
}

/// Make every operation on `key` fail with [`StorageError::Access`].
#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) fn fail_access_to(key: &str, failing: bool) {
    backend::fail_access_to(key, failing)
}

/// Read and decode a JSON value. A missing key is `Ok(None)`.
pub fn read_json<T: DeserializeOwned>(key: &str) -> Result<Option<T>, StorageError> {
    match read(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn write_json<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    write(key, &raw)
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::StorageError;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }

    pub fn read(key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Access {
                op: "read",
                key: key.to_string(),
            })
    }

    pub fn write(key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Access {
                op: "write",
                key: key.to_string(),
            })
    }

    pub fn remove(key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Access {
                op: "remove",
                key: key.to_string(),
            })
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::StorageError;

    // Per thread, so parallel tests never observe each other's writes.
    thread_local! {
        static MEMORY: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    #[cfg(test)]
    thread_local! {
        static FAILING: RefCell<std::collections::HashSet<String>> = RefCell::default();
    }

    #[cfg(test)]
    pub fn fail_access_to(key: &str, failing: bool) {
        FAILING.with(|keys| {
            let mut keys = keys.borrow_mut();
            if failing {
                keys.insert(key.to_string());
            } else {
                keys.remove(key);
            }
        });
    }

    #[cfg_attr(not(test), allow(unused_variables))]
    fn check(op: &'static str, key: &str) -> Result<(), StorageError> {
        #[cfg(test)]
        if FAILING.with(|keys| keys.borrow().contains(key)) {
            return Err(StorageError::Access {
                op,
                key: key.to_string(),
            });
        }
        Ok(())
    }

    pub fn read(key: &str) -> Result<Option<String>, StorageError> {
        check("read", key)?;
        Ok(MEMORY.with(|map| map.borrow().get(key).cloned()))
    }

    pub fn write(key: &str, value: &str) -> Result<(), StorageError> {
        check("write", key)?;
        MEMORY.with(|map| {
            map.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove(key: &str) -> Result<(), StorageError> {
        check("remove", key)?;
        MEMORY.with(|map| {
            map.borrow_mut().remove(key);
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Coin {
        name: String,
    }

    #[test]
    fn missing_key_reads_as_none() {
        assert_eq!(read("storage-test-missing").unwrap(), None);
        assert!(read_json::<Coin>("storage-test-missing").unwrap().is_none());
    }

    #[test]
    fn json_values_survive_a_write() {
        let coin = Coin {
            name: "btc".into(),
        };
        write_json("storage-test-coin", &coin).unwrap();
        assert_eq!(read_json::<Coin>("storage-test-coin").unwrap(), Some(coin));

        remove("storage-test-coin").unwrap();
        assert_eq!(read("storage-test-coin").unwrap(), None);
    }

    #[test]
    fn malformed_json_is_reported() {
        write("storage-test-garbage", "{not json").unwrap();
        let err = read_json::<Coin>("storage-test-garbage").unwrap_err();
        assert!(matches!(err, StorageError::Malformed(_)));
    }
}
