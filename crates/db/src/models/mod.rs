//! Row models and DTOs, one module per table (plus joined read models).

pub mod audition;
pub mod blog;
pub mod education;
pub mod experience;
pub mod job;
pub mod portfolio;
pub mod profile;
pub mod session;
pub mod talent;
pub mod user;
