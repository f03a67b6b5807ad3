//! Role predicates over the authenticated user
//!
//! Role tags are ordered strings like `"ROLE_ADMIN"`. The admin check
//! matches any `ROLE_`-prefixed tag, which makes every role-bearing
//! user pass it; that behavior is kept as shipped.

use super::User;

const SUPER_ADMIN_TAG: &str = "ROLE_SUPER_ADMIN";
const ADMIN_TAG: &str = "ROLE_ADMIN";
const ROLE_PREFIX: &str = "ROLE_";

impl User {
    /// Exact membership test for a role tag
    pub fn has_role(&self, tag: &str) -> bool {
        self.roles.iter().any(|role| role == tag)
    }

    /// True iff the user carries the reserved super-admin tag
    pub fn is_super_admin(&self) -> bool {
        self.has_role(SUPER_ADMIN_TAG)
    }

    /// True for super-admins, admins, or any `ROLE_`-prefixed tag
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|role| {
            role == SUPER_ADMIN_TAG || role == ADMIN_TAG || role.starts_with(ROLE_PREFIX)
        })
    }
}

/// Render a role list for display: strips the `ROLE_` prefix and joins
/// with a comma, e.g. `["ROLE_ADMIN", "ROLE_USER"]` -> `"ADMIN, USER"`.
pub fn format_roles(roles: &[String]) -> String {
    roles
        .iter()
        .map(|role| role.strip_prefix(ROLE_PREFIX).unwrap_or(role.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_roles(roles: &[&str]) -> User {
        User {
            id: 1,
            username: "u".to_string(),
            email: "u@example.com".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            firstname: "U".to_string(),
            lastname: "Ser".to_string(),
            is_email_verified: false,
        }
    }

    #[test]
    fn test_has_role_is_exact() {
        let user = user_with_roles(&["ROLE_USER"]);
        assert!(user.has_role("ROLE_USER"));
        assert!(!user.has_role("ROLE_USE"));
        assert!(!user.has_role("ROLE_USER "));
    }

    #[test]
    fn test_super_admin_requires_exact_tag() {
        assert!(user_with_roles(&["ROLE_USER", "ROLE_SUPER_ADMIN"]).is_super_admin());
        assert!(!user_with_roles(&["ROLE_SUPER_ADMIN_2"]).is_super_admin());
        assert!(!user_with_roles(&["ROLE_ADMIN"]).is_super_admin());
    }

    #[test]
    fn test_is_admin_matches_any_role_prefixed_tag() {
        assert!(user_with_roles(&["ROLE_ADMIN"]).is_admin());
        assert!(user_with_roles(&["ROLE_SUPER_ADMIN"]).is_admin());
        // Any ROLE_* tag passes, including plain users
        assert!(user_with_roles(&["ROLE_USER"]).is_admin());
    }

    #[test]
    fn test_is_admin_false_without_roles() {
        assert!(!user_with_roles(&[]).is_admin());
        assert!(!user_with_roles(&["operator"]).is_admin());
    }

    #[test]
    fn test_format_roles() {
        let roles = vec!["ROLE_ADMIN".to_string(), "ROLE_USER".to_string()];
        assert_eq!(format_roles(&roles), "ADMIN, USER");
        assert_eq!(format_roles(&[]), "");
        assert_eq!(format_roles(&["operator".to_string()]), "operator");
    }
}
