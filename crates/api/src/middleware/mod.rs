//! Request extractors for authentication and role guards.

pub mod auth;
pub mod rbac;
