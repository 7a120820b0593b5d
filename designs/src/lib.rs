//! Design library: named records over the scene crate's snapshots.
//!
//! Wraps [`scene::model::DesignData`] in named, timestamped records and
//! persists the whole library as one JSON document on disk. Loads never
//! fail; corrupt content is logged and skipped so one bad byte cannot take
//! the library down with it. Saves rewrite the file atomically and report
//! their errors, with the in-memory list staying authoritative either way.
//!
//! | Module | Role |
//! |--------|------|
//! | [`record`] | Record type, stored format, and timestamp handling |
//! | [`store`] | File-backed library with create/open/save/rename/duplicate/delete |

pub mod record;
pub mod store;
