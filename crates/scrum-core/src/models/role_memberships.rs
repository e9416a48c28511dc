use crate::Role;

use std::collections::HashSet;

/// E-mail address the backend treats as SuperAdmin by convention.
/// This is a convention, not a stored role: no membership table row exists
/// for SuperAdmin accounts.
pub const SUPER_ADMIN_EMAIL: &str = "admin@scrum.com";

/// Explicit role-membership relations, mirroring the backend's association
/// tables. Role derivation is a pure function over these sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMemberships {
    pub scrum_masters: HashSet<i64>,
    pub product_owners: HashSet<i64>,
    pub super_admin_emails: HashSet<String>,
}

impl Default for RoleMemberships {
    fn default() -> Self {
        Self {
            scrum_masters: HashSet::new(),
            product_owners: HashSet::new(),
            super_admin_emails: HashSet::from([SUPER_ADMIN_EMAIL.to_string()]),
        }
    }
}

impl RoleMemberships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the effective role for a user.
    ///
    /// Precedence matches the backend's check order:
    /// SuperAdmin (e-mail convention, case-insensitive) > ProductOwner >
    /// ScrumMaster > Developer. A user present in both the product-owner and
    /// scrum-master tables is a ProductOwner.
    pub fn derive_role(&self, user_id: i64, email: &str) -> Role {
        if self
            .super_admin_emails
            .iter()
            .any(|e| e.eq_ignore_ascii_case(email))
        {
            return Role::SuperAdmin;
        }
        if self.product_owners.contains(&user_id) {
            return Role::ProductOwner;
        }
        if self.scrum_masters.contains(&user_id) {
            return Role::ScrumMaster;
        }
        Role::Developer
    }
}
