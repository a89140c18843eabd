// Stored devotionals: persistence, create/read endpoints, and export/share renderings.
// Records are write-once; nothing here updates or deletes them.

pub mod export;
pub mod handlers;
pub mod postgres;
pub mod store;
pub mod validation;
