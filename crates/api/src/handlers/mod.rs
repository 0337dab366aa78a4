//! HTTP handlers, one module per resource.

pub mod analytics;
pub mod auditions;
pub mod auth;
pub mod blogs;
pub mod jobs;
pub mod portfolio;
pub mod profiles;
pub mod talents;
