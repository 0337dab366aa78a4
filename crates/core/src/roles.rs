//! Account roles.
//!
//! The role lives on the profile row and is copied into access-token claims,
//! so route guards never need a database round-trip.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_TALENT: &str = "talent";
pub const ROLE_EMPLOYER: &str = "employer";

/// Whether an account offers services (talent) or posts jobs (employer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Talent,
    Employer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Talent => ROLE_TALENT,
            Role::Employer => ROLE_EMPLOYER,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_TALENT => Ok(Role::Talent),
            ROLE_EMPLOYER => Ok(Role::Employer),
            other => Err(CoreError::Validation(format!(
                "Invalid role '{other}'. Must be one of: {ROLE_TALENT}, {ROLE_EMPLOYER}"
            ))),
        }
    }
}
