use serde::{Deserialize, Serialize};

/// Access-level role controlling which navigation set and dashboard are shown.
///
/// - `Admin` — full back-office access (users, categories, locations).
/// - `Staff` — day-to-day sales and purchase entry.
/// - `Management` — reporting-oriented view over staff data.
/// - `Delivery` — delivery queue only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UserRole {
    Admin,
    #[default]
    Staff,
    Management,
    Delivery,
}

impl UserRole {
    /// Parse a role string from the accounts API. Unknown values default to
    /// the least-privileged office role.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "management" => UserRole::Management,
            "delivery" => UserRole::Delivery,
            _ => UserRole::Staff,
        }
    }

    /// Lowercase string as the accounts API spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Staff => "staff",
            UserRole::Management => "management",
            UserRole::Delivery => "delivery",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

/// The authenticated user held by the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub display_name: String,
    pub email: String,
    /// Role string as received from the server; parse with
    /// [`UserRole::from_str_or_default`] when an enum is needed.
    pub role: String,
}

impl User {
    pub fn role(&self) -> UserRole {
        UserRole::from_str_or_default(&self.role)
    }
}

/// Login request body for `POST /api/accounts/login/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
