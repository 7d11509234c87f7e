//! Database access for catalog-api
//!
//! One module per entity. Each operation is a single statement against the
//! shared pool; SQLite provides all isolation.

pub mod artists;
pub mod genres;
pub mod songs;
