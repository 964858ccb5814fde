//! External service adapters
//!
//! - Zotero: Web API v3 client for collection and item operations

pub mod zotero;

pub use zotero::ZoteroClient;
