use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the elevated role, as issued by the auth collaborator.
pub const SUPER_ADMIN_LABEL: &str = "SuperAdmin";

/// Role of the signed-in user.
///
/// Only `SuperAdmin` carries extra capabilities. Any other label is kept
/// verbatim so it can still be shown next to the user's name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    SuperAdmin,
    Other(String),
}

impl UserRole {
    /// Parse a role label. Never fails; unknown labels become `Other`.
    pub fn from_label(s: &str) -> Self {
        UserRole::from(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            UserRole::SuperAdmin => SUPER_ADMIN_LABEL,
            UserRole::Other(label) => label,
        }
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self, UserRole::SuperAdmin)
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Other(String::new())
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        if s == SUPER_ADMIN_LABEL {
            UserRole::SuperAdmin
        } else {
            UserRole::Other(s)
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::SuperAdmin => SUPER_ADMIN_LABEL.to_string(),
            UserRole::Other(label) => label,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user, as supplied by the auth collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct User {
    pub name: String,
    pub role: UserRole,
}

impl User {
    pub fn new(name: impl Into<String>, role: UserRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

/// Whether `user` may see order creation and user management.
pub fn can_see_admin_features(user: &User) -> bool {
    user.role.is_super_admin()
}

/// Accounts offered as one-click sign-ins when `demo_accounts` is enabled.
pub fn demo_users() -> Vec<User> {
    vec![
        User::new("Alice Admin", UserRole::SuperAdmin),
        User::new("Sam Staff", UserRole::Other("Staff".into())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_label_recognizes_super_admin() {
        assert_eq!(UserRole::from_label("SuperAdmin"), UserRole::SuperAdmin);
    }

    #[test]
    fn from_label_is_case_sensitive() {
        assert_eq!(
            UserRole::from_label("superadmin"),
            UserRole::Other("superadmin".into())
        );
    }

    #[test]
    fn from_label_keeps_unknown_labels() {
        assert_eq!(
            UserRole::from_label("Staff"),
            UserRole::Other("Staff".into())
        );
        assert_eq!(UserRole::from_label(""), UserRole::Other(String::new()));
    }

    #[test]
    fn from_label_matches_string_conversion() {
        for label in ["SuperAdmin", "Staff", "superadmin", ""] {
            assert_eq!(UserRole::from_label(label), UserRole::from(label.to_string()));
        }
    }

    #[test]
    fn as_str_roundtrip() {
        for role in [UserRole::SuperAdmin, UserRole::Other("Driver".into())] {
            assert_eq!(UserRole::from_label(role.as_str()), role);
        }
    }

    #[test]
    fn role_serializes_as_plain_label() {
        let json = serde_json::to_string(&UserRole::SuperAdmin).unwrap();
        assert_eq!(json, r#""SuperAdmin""#);
        let role: UserRole = serde_json::from_str(r#""Staff""#).unwrap();
        assert_eq!(role, UserRole::Other("Staff".into()));
    }

    #[test]
    fn user_deserializes_from_auth_json() {
        let json = r#"{"name": "Jane", "role": "SuperAdmin"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Jane");
        assert!(user.role.is_super_admin());
    }

    #[test]
    fn super_admin_sees_admin_features() {
        let user = User::new("Root", UserRole::SuperAdmin);
        assert!(can_see_admin_features(&user));
    }

    #[test]
    fn other_roles_do_not_see_admin_features() {
        for label in ["Staff", "Admin", "superadmin", ""] {
            let user = User::new("Someone", UserRole::from_label(label));
            assert!(!can_see_admin_features(&user), "role {label:?}");
        }
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(UserRole::SuperAdmin.to_string(), "SuperAdmin");
        assert_eq!(UserRole::Other("Staff".into()).to_string(), "Staff");
    }

    #[test]
    fn demo_users_cover_both_capability_levels() {
        let users = demo_users();
        assert!(users.iter().any(can_see_admin_features));
        assert!(users.iter().any(|u| !can_see_admin_features(u)));
    }
}
