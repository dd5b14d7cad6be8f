//! Service layer for the job tracker.
//! - `db` holds the SeaORM statements, one per operation.
//! - `jobs` wraps them behind a repository trait and a `JobService`.
//! - Validation and the entity live in the `models` crate.

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod db;
pub mod jobs;
