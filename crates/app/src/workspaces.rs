/// A selectable organizational grouping shown in the sidebar picker.
/// Display-only in this client; not used for access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workspace {
    pub id: &'static str,
    pub name: &'static str,
    /// Plan tier label, possibly empty.
    pub plan: &'static str,
    /// Short glyph shown in the picker badge.
    pub logo: &'static str,
}

pub const WORKSPACES: &[Workspace] = &[
    Workspace {
        id: "headquarters",
        name: "Headquarters",
        plan: "Enterprise",
        logo: "HQ",
    },
    Workspace {
        id: "north-branch",
        name: "North Branch",
        plan: "Standard",
        logo: "NB",
    },
    Workspace {
        id: "outlet",
        name: "Outlet Store",
        plan: "",
        logo: "OS",
    },
];

/// Look up a workspace by id, falling back to the first entry.
pub fn workspace_or_default(id: &str) -> &'static Workspace {
    WORKSPACES
        .iter()
        .find(|w| w.id == id)
        .unwrap_or(&WORKSPACES[0])
}
