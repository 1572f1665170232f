//! Thin, untyped syscall wrappers.
//!
//! Each function fixes one operation id, marshals its typed argument list
//! into trap words, and returns the raw scalar result unchanged. Mapping
//! results into `Result`/`Option` lives one layer up, in the typed modules
//! at the crate root.

pub mod fs;
pub mod mailbox;
pub mod proc;
pub mod window;
