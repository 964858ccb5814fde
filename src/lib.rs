//! Zotero library management and export.
//!
//! The crate backs two binaries: `zotman` (collection management) and
//! `zotman-export` (BibTeX/JSON/Markdown export). All state lives in the
//! remote Zotero library; every operation is a stateless fetch-transform-
//! render pass.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod organize;
pub mod tree;

pub use adapters::ZoteroClient;
pub use config::ZoteroConfig;
pub use error::{Error, Result};
