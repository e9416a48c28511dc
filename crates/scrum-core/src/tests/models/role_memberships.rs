use crate::{Role, RoleMemberships, SUPER_ADMIN_EMAIL};

#[test]
fn test_default_role_is_developer() {
    let memberships = RoleMemberships::new();
    assert_eq!(memberships.derive_role(4, "mike@scrum.com"), Role::Developer);
}

#[test]
fn test_scrum_master_membership() {
    let mut memberships = RoleMemberships::new();
    memberships.scrum_masters.insert(2);
    assert_eq!(memberships.derive_role(2, "john@scrum.com"), Role::ScrumMaster);
}

#[test]
fn test_product_owner_wins_over_scrum_master() {
    let mut memberships = RoleMemberships::new();
    memberships.scrum_masters.insert(3);
    memberships.product_owners.insert(3);
    assert_eq!(
        memberships.derive_role(3, "sarah@scrum.com"),
        Role::ProductOwner
    );
}

#[test]
fn test_super_admin_email_convention() {
    let memberships = RoleMemberships::new();
    assert_eq!(
        memberships.derive_role(1, SUPER_ADMIN_EMAIL),
        Role::SuperAdmin
    );
}

#[test]
fn test_super_admin_email_is_case_insensitive() {
    let mut memberships = RoleMemberships::new();
    memberships.product_owners.insert(1);
    assert_eq!(
        memberships.derive_role(1, "Admin@Scrum.Com"),
        Role::SuperAdmin
    );
}
