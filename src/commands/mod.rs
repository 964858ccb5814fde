//! CLI command handlers. Each takes the client handle constructed in `main`.

pub mod create;
pub mod export;
pub mod list;
pub mod organize;
pub mod test;
pub mod tree;
