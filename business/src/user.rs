//! Student/user records as served by the user API.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Stable identifier of a user record.
///
/// Ids are compared and cloned on every frame (row keys, selection checks),
/// so they are interned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Ustr);

impl UserId {
    pub fn new(id: &str) -> Self {
        Self(Ustr::from(id))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    /// Wire value, also what the status badge shows.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Capitalized label for pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub room_number: String,
    pub status: UserStatus,
    /// When the account was created, if the service reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Lifetime meal bookings, if the service reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals_booked: Option<u32>,
}

impl User {
    pub fn new(
        id: &str,
        name: impl Into<String>,
        email: impl Into<String>,
        room_number: impl Into<String>,
        status: UserStatus,
    ) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            email: email.into(),
            room_number: room_number.into(),
            status,
            created_at: None,
            meals_booked: None,
        }
    }

    /// "May 10, 2023" style, or `None` when unknown.
    pub fn created_on_display(&self) -> Option<String> {
        self.created_at
            .map(|created| created.format("%B %-d, %Y").to_string())
    }
}

/// Either shape the list endpoint is known to return.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum UsersPayload {
    Bare(Vec<User>),
    Wrapped { users: Vec<User> },
}

impl UsersPayload {
    pub(crate) fn into_users(self) -> Vec<User> {
        match self {
            Self::Bare(users) | Self::Wrapped { users } => users,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn deserializes_camel_case_record() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u-1",
            "name": "Asha Rao",
            "email": "asha@hostel.edu",
            "roomNumber": "B-204",
            "status": "inactive",
            "createdAt": "2023-05-10T08:30:00Z",
            "mealsBooked": 32,
            "role": "student"
        }))
        .expect("user should deserialize");

        assert_eq!(user.id, UserId::new("u-1"));
        assert_eq!(user.room_number, "B-204");
        assert_eq!(user.status, UserStatus::Inactive);
        assert_eq!(user.meals_booked, Some(32));
        assert_eq!(user.created_on_display().as_deref(), Some("May 10, 2023"));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u-2",
            "name": "Ben",
            "email": "ben@hostel.edu",
            "roomNumber": "A-1",
            "status": "active"
        }))
        .expect("user should deserialize");

        assert_eq!(user.created_at, None);
        assert_eq!(user.meals_booked, None);
        assert_eq!(user.created_on_display(), None);
    }

    #[test]
    fn serializes_without_absent_optionals() {
        let user = User::new("u-3", "Chen", "chen@hostel.edu", "C-9", UserStatus::Active);

        let value = serde_json::to_value(&user).expect("user should serialize");

        assert_eq!(
            value,
            serde_json::json!({
                "id": "u-3",
                "name": "Chen",
                "email": "chen@hostel.edu",
                "roomNumber": "C-9",
                "status": "active"
            })
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = serde_json::from_value::<User>(serde_json::json!({
            "id": "u-4",
            "name": "Dee",
            "email": "dee@hostel.edu",
            "roomNumber": "D-4",
            "status": "suspended"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn users_payload_accepts_both_shapes() {
        let record = serde_json::json!({
            "id": "u-5",
            "name": "Eve",
            "email": "eve@hostel.edu",
            "roomNumber": "E-5",
            "status": "active"
        });

        let bare: UsersPayload =
            serde_json::from_value(serde_json::json!([record.clone()])).expect("bare array");
        let wrapped: UsersPayload =
            serde_json::from_value(serde_json::json!({ "users": [record] })).expect("wrapped");

        assert_eq!(bare.into_users().len(), 1);
        assert_eq!(wrapped.into_users().len(), 1);
    }

    #[test]
    fn created_on_display_uses_unpadded_day() {
        let mut user = User::new("u-6", "Fay", "fay@hostel.edu", "F-6", UserStatus::Active);
        user.created_at = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).single();

        assert_eq!(user.created_on_display().as_deref(), Some("January 3, 2024"));
    }
}
