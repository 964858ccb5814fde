//! Zotero API credentials.
//!
//! Loaded from the process environment, with `.env` in the working directory
//! taken into account first.

use crate::error::{Error, Result};

/// Whether the library belongs to a single user or a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LibraryType {
    #[default]
    User,
    Group,
}

impl LibraryType {
    /// URL path prefix for this library, e.g. `users/12345`.
    pub fn prefix(&self, library_id: &str) -> String {
        match self {
            LibraryType::User => format!("users/{}", library_id),
            LibraryType::Group => format!("groups/{}", library_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ZoteroConfig {
    pub api_key: String,
    pub library_id: String,
    pub library_type: LibraryType,
}

impl ZoteroConfig {
    /// Read credentials from `.env` / the environment.
    ///
    /// `ZOTERO_API_KEY` and `ZOTERO_LIBRARY_ID` are required;
    /// `ZOTERO_LIBRARY_TYPE` defaults to `user`.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let api_key = std::env::var("ZOTERO_API_KEY").unwrap_or_default();
        let library_id = std::env::var("ZOTERO_LIBRARY_ID").unwrap_or_default();

        if api_key.is_empty() {
            return Err(Error::MissingCredentials("ZOTERO_API_KEY"));
        }
        if library_id.is_empty() {
            return Err(Error::MissingCredentials("ZOTERO_LIBRARY_ID"));
        }

        let library_type = match std::env::var("ZOTERO_LIBRARY_TYPE").as_deref() {
            Ok("group") => LibraryType::Group,
            _ => LibraryType::User,
        };

        Ok(Self {
            api_key,
            library_id,
            library_type,
        })
    }

    pub fn library_prefix(&self) -> String {
        self.library_type.prefix(&self.library_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_prefix() {
        assert_eq!(LibraryType::User.prefix("12345"), "users/12345");
        assert_eq!(LibraryType::Group.prefix("67890"), "groups/67890");
    }

    #[test]
    fn test_config_prefix() {
        let config = ZoteroConfig {
            api_key: "k".to_string(),
            library_id: "42".to_string(),
            library_type: LibraryType::Group,
        };
        assert_eq!(config.library_prefix(), "groups/42");
    }
}
