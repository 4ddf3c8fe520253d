//! Sidebar navigation entries

use serde::Serialize;

/// Icons drawn in the page shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Timer,
    PieChart,
    Goal,
    Axe,
    LogOut,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Timer => "timer",
            Icon::PieChart => "pie-chart",
            Icon::Goal => "goal",
            Icon::Axe => "axe",
            Icon::LogOut => "log-out",
        }
    }

    /// Text glyph used when no icon font is loaded
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Timer => "\u{23F1}",
            Icon::PieChart => "\u{25D4}",
            Icon::Goal => "\u{25CE}",
            Icon::Axe => "\u{1FA93}",
            Icon::LogOut => "\u{21E5}",
        }
    }
}

/// A navigation destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: Icon,
}

pub const NAV_ITEMS: [NavigationItem; 3] = [
    NavigationItem {
        label: "Home",
        path: "/",
        icon: Icon::Timer,
    },
    NavigationItem {
        label: "Statistics",
        path: "/stats",
        icon: Icon::PieChart,
    },
    NavigationItem {
        label: "Goals",
        path: "/goals",
        icon: Icon::Goal,
    },
];

/// A navigation item paired with its highlight state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    #[serde(flatten)]
    pub item: NavigationItem,
    pub active: bool,
}

/// Mark the item whose path equals `location` as active
pub fn menu(location: &str) -> Vec<NavEntry> {
    NAV_ITEMS
        .iter()
        .map(|item| NavEntry {
            item: *item,
            active: item.path == location,
        })
        .collect()
}

/// Look up the destination served at `path`
pub fn destination(path: &str) -> Option<&'static NavigationItem> {
    NAV_ITEMS.iter().find(|item| item.path == path)
}
