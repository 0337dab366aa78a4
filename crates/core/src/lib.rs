//! StageConnect domain layer.
//!
//! Enumerations, validation rules, the talent browse filter, the audition
//! lifecycle, and analytics rollups. No I/O lives here; the db and api
//! crates build on these types.

pub mod analytics;
pub mod audition;
pub mod blog;
pub mod error;
pub mod job;
pub mod portfolio;
pub mod profile;
pub mod roles;
pub mod search;
pub mod talent;
pub mod talent_filter;
mod text_enum;
pub mod types;
