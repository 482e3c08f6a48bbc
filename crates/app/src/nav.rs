use shared_types::UserRole;

/// Icon reference for a nav entry, mapped to a lucide icon at render time so
/// the configuration itself stays renderer-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Sales,
    Purchases,
    Deliveries,
    Categories,
    Locations,
    Users,
    Settings,
}

/// One navigable route in the sidebar. Immutable, defined per role below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

/// Full back-office navigation shown to admins.
pub const ADMIN_NAV: &[NavItem] = &[
    NavItem {
        title: "Dashboard",
        path: "/",
        icon: NavIcon::Dashboard,
    },
    NavItem {
        title: "Sales",
        path: "/sales",
        icon: NavIcon::Sales,
    },
    NavItem {
        title: "Purchases",
        path: "/purchases",
        icon: NavIcon::Purchases,
    },
    NavItem {
        title: "Deliveries",
        path: "/deliveries",
        icon: NavIcon::Deliveries,
    },
    NavItem {
        title: "Categories",
        path: "/categories",
        icon: NavIcon::Categories,
    },
    NavItem {
        title: "Locations",
        path: "/locations",
        icon: NavIcon::Locations,
    },
    NavItem {
        title: "Users",
        path: "/users",
        icon: NavIcon::Users,
    },
    NavItem {
        title: "Settings",
        path: "/settings",
        icon: NavIcon::Settings,
    },
];

/// Day-to-day navigation shown to staff, management, and delivery roles.
pub const STAFF_NAV: &[NavItem] = &[
    NavItem {
        title: "Dashboard",
        path: "/",
        icon: NavIcon::Dashboard,
    },
    NavItem {
        title: "Sales",
        path: "/sales",
        icon: NavIcon::Sales,
    },
    NavItem {
        title: "Purchases",
        path: "/purchases",
        icon: NavIcon::Purchases,
    },
    NavItem {
        title: "Deliveries",
        path: "/deliveries",
        icon: NavIcon::Deliveries,
    },
    NavItem {
        title: "Settings",
        path: "/settings",
        icon: NavIcon::Settings,
    },
];

/// Select the nav list for a role. Which list applies is the only
/// role-sensitive decision here; page-level gating happens in the pages.
pub fn nav_for_role(role: UserRole) -> &'static [NavItem] {
    match role {
        UserRole::Admin => ADMIN_NAV,
        UserRole::Staff | UserRole::Management | UserRole::Delivery => STAFF_NAV,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;

    #[test]
    fn nav_lists_are_non_empty() {
        assert!(!ADMIN_NAV.is_empty());
        assert!(!STAFF_NAV.is_empty());
    }

    #[test]
    fn every_entry_has_a_non_empty_path() {
        for item in ADMIN_NAV.iter().chain(STAFF_NAV.iter()) {
            assert!(!item.path.is_empty(), "{} has an empty path", item.title);
            assert!(!item.title.is_empty());
        }
    }

    #[test]
    fn every_nav_path_resolves_to_a_route() {
        for item in ADMIN_NAV.iter().chain(STAFF_NAV.iter()) {
            assert!(
                item.path.parse::<Route>().is_ok(),
                "{} does not resolve to a route",
                item.path
            );
        }
    }

    #[test]
    fn admin_and_staff_lists_are_independent() {
        // Separately defined consts: the admin-only entries never leak into
        // the staff list, and the lists differ as data.
        assert_ne!(ADMIN_NAV, STAFF_NAV);
        assert!(ADMIN_NAV.iter().any(|i| i.path == "/users"));
        assert!(STAFF_NAV.iter().all(|i| i.path != "/users"));
        assert!(STAFF_NAV.iter().all(|i| i.path != "/categories"));
    }

    #[test]
    fn role_selects_expected_list() {
        assert_eq!(nav_for_role(UserRole::Admin), ADMIN_NAV);
        assert_eq!(nav_for_role(UserRole::Staff), STAFF_NAV);
        assert_eq!(nav_for_role(UserRole::Management), STAFF_NAV);
        assert_eq!(nav_for_role(UserRole::Delivery), STAFF_NAV);
    }

    #[test]
    fn paths_within_a_list_are_unique() {
        for list in [ADMIN_NAV, STAFF_NAV] {
            for (i, a) in list.iter().enumerate() {
                for b in &list[i + 1..] {
                    assert_ne!(a.path, b.path);
                }
            }
        }
    }
}
