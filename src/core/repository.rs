use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    InMemory,
}

impl RepositoryStore {
    // from_env selects the in-memory store when LMS_STORE=memory, otherwise the json file
    pub fn from_env() -> Self {
        match std::env::var("LMS_STORE") {
            Ok(store) if store.eq_ignore_ascii_case("memory") => RepositoryStore::InMemory,
            _ => RepositoryStore::JsonFile,
        }
    }
}
