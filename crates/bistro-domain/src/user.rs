//! User domain types.

use serde::{Deserialize, Serialize};

/// User permission level.
///
/// Wire format: the stored role string (`"customer"` or `"admin"`). A user
/// record with no role at all is a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Customer,
    Admin,
}

impl UserRole {
    /// Convert from the stored role string. Returns `None` for unknown values.
    pub fn from_str_value(v: &str) -> Option<Self> {
        match v {
            "customer" => Some(Self::Customer),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Convert from an optional stored role column. Absent means customer.
    pub fn from_stored(v: Option<&str>) -> Self {
        v.and_then(Self::from_str_value).unwrap_or(Self::Customer)
    }

    /// Convert to the stored role string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Admin => "admin",
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl PartialOrd for UserRole {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UserRole {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        fn rank(r: UserRole) -> u8 {
            match r {
                UserRole::Customer => 0,
                UserRole::Admin => 1,
            }
        }
        rank(*self).cmp(&rank(*other))
    }
}
