//! Canonical reference values for secondary-store roles and grants.
//!
//! These five role and five grant values mirror the rows seeded into the
//! secondary store's `oracle_users_role` and `oracle_users_grant` tables.
//! The table rows remain live and extensible; the compiled-in copies are
//! only used to enrich a stored role/grant id into a name and description
//! at read time. An id with no canonical match resolves to `None` and the
//! API surfaces a null role/grant, never an error.

/// A canonical role or grant record: fixed id, name, and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceValue {
    pub id: i64,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CANONICAL_ROLES: [ReferenceValue; 5] = [
    ReferenceValue {
        id: 1,
        name: "USER",
        description: "Basic user role with read-only access",
    },
    ReferenceValue {
        id: 2,
        name: "DEVELOPER",
        description: "Developer role with read and write access",
    },
    ReferenceValue {
        id: 3,
        name: "ANALYST",
        description: "Analyst role with read and execute access",
    },
    ReferenceValue {
        id: 4,
        name: "MANAGER",
        description: "Manager role with extended permissions",
    },
    ReferenceValue {
        id: 5,
        name: "ADMINISTRATOR",
        description: "Administrator role with full access",
    },
];

pub const CANONICAL_GRANTS: [ReferenceValue; 5] = [
    ReferenceValue {
        id: 1,
        name: "READ_ACCESS",
        description: "Permission to read data from database tables",
    },
    ReferenceValue {
        id: 2,
        name: "WRITE_ACCESS",
        description: "Permission to insert and update data in database tables",
    },
    ReferenceValue {
        id: 3,
        name: "DELETE_ACCESS",
        description: "Permission to delete data from database tables",
    },
    ReferenceValue {
        id: 4,
        name: "EXECUTE_ACCESS",
        description: "Permission to execute stored procedures and functions",
    },
    ReferenceValue {
        id: 5,
        name: "ADMIN_ACCESS",
        description: "Full administrative access to the database",
    },
];

/// Resolves a stored role id to its canonical record, if any.
pub const fn canonical_role(id: i64) -> Option<&'static ReferenceValue> {
    match id {
        1 => Some(&CANONICAL_ROLES[0]),
        2 => Some(&CANONICAL_ROLES[1]),
        3 => Some(&CANONICAL_ROLES[2]),
        4 => Some(&CANONICAL_ROLES[3]),
        5 => Some(&CANONICAL_ROLES[4]),
        _ => None,
    }
}

/// Resolves a stored grant id to its canonical record, if any.
pub const fn canonical_grant(id: i64) -> Option<&'static ReferenceValue> {
    match id {
        1 => Some(&CANONICAL_GRANTS[0]),
        2 => Some(&CANONICAL_GRANTS[1]),
        3 => Some(&CANONICAL_GRANTS[2]),
        4 => Some(&CANONICAL_GRANTS[3]),
        5 => Some(&CANONICAL_GRANTS[4]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_all_canonical_roles_resolve() {
        for value in &CANONICAL_ROLES {
            let resolved = canonical_role(value.id).expect("canonical role should resolve");
            assert_eq!(resolved.name, value.name);
            assert_eq!(resolved.description, value.description);
        }
    }

    #[test]
    fn test_all_canonical_grants_resolve() {
        for value in &CANONICAL_GRANTS {
            let resolved = canonical_grant(value.id).expect("canonical grant should resolve");
            assert_eq!(resolved.name, value.name);
        }
    }

    #[test]
    fn test_role_names_match_original_values() {
        let names: Vec<&str> = CANONICAL_ROLES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["USER", "DEVELOPER", "ANALYST", "MANAGER", "ADMINISTRATOR"]
        );
    }

    #[test]
    fn test_grant_names_match_original_values() {
        let names: Vec<&str> = CANONICAL_GRANTS.iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            vec![
                "READ_ACCESS",
                "WRITE_ACCESS",
                "DELETE_ACCESS",
                "EXECUTE_ACCESS",
                "ADMIN_ACCESS"
            ]
        );
    }

    #[test]
    fn test_unknown_id_yields_none() {
        assert!(canonical_role(0).is_none());
        assert!(canonical_role(6).is_none());
        assert!(canonical_grant(-1).is_none());
        assert!(canonical_grant(99).is_none());
    }

    proptest! {
        /// Any id outside the canonical range resolves to nothing, for both
        /// roles and grants.
        #[test]
        fn prop_non_canonical_ids_resolve_to_none(id in any::<i64>()) {
            prop_assume!(!(1..=5).contains(&id));
            prop_assert!(canonical_role(id).is_none());
            prop_assert!(canonical_grant(id).is_none());
        }

        /// Canonical ids always round-trip through the lookup.
        #[test]
        fn prop_canonical_ids_round_trip(id in 1i64..=5) {
            prop_assert_eq!(canonical_role(id).map(|r| r.id), Some(id));
            prop_assert_eq!(canonical_grant(id).map(|g| g.id), Some(id));
        }
    }
}
