//! The closed role set and its landing routes.
//!
//! Every authenticated user carries exactly one role. Role strings arrive
//! from two untrusted-ish directions (the backend's profile payload and
//! per-route allow-lists written by hand), so parsing is case-insensitive
//! and everything is compared through the canonical uppercase form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::SessionError;

/// A user's role within the FYP management app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Admin,
    Hod,
    Dean,
    Principal,
    Supervisor,
    /// Generic account with no dedicated area of its own.
    User,
}

impl Role {
    /// All roles, in no particular order.
    pub const ALL: [Role; 7] = [
        Role::Student,
        Role::Admin,
        Role::Hod,
        Role::Dean,
        Role::Principal,
        Role::Supervisor,
        Role::User,
    ];

    /// Canonical uppercase form, used for persistence and comparison.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Admin => "ADMIN",
            Role::Hod => "HOD",
            Role::Dean => "DEAN",
            Role::Principal => "PRINCIPAL",
            Role::Supervisor => "SUPERVISOR",
            Role::User => "USER",
        }
    }

    /// The landing route a user is sent to right after login.
    ///
    /// Roles without a dedicated area land on the generic dashboard.
    pub fn landing_route(&self) -> &'static str {
        match self {
            Role::Student => "/student",
            Role::Admin => "/admin",
            Role::Hod => "/hod",
            Role::Dean => "/dean",
            Role::Principal => "/principal",
            Role::Supervisor => "/supervisor",
            Role::User => "/dashboard",
        }
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STUDENT" => Ok(Role::Student),
            "ADMIN" => Ok(Role::Admin),
            "HOD" => Ok(Role::Hod),
            "DEAN" => Ok(Role::Dean),
            "PRINCIPAL" => Ok(Role::Principal),
            "SUPERVISOR" => Ok(Role::Supervisor),
            "USER" => Ok(Role::User),
            _ => Err(SessionError::UnknownRole(s.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Role::from_str(&s).map_err(serde::de::Error::custom)
    }
}
