// Rust guideline compliant 2026-10-17

//! Command implementations for the Albert collections CLI.

pub mod update_collections_dict;
