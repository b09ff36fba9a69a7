use crate::{t, Lang, ScrollState, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub section: Section,
    pub label_key: &'static str,
    pub icon: &'static str,
}

pub const MENU: [MenuEntry; 4] = [
    MenuEntry {
        section: Section::Home,
        label_key: "nav.home",
        icon: "🏠",
    },
    MenuEntry {
        section: Section::About,
        label_key: "nav.about",
        icon: "👥",
    },
    MenuEntry {
        section: Section::Services,
        label_key: "nav.services",
        icon: "⚡",
    },
    MenuEntry {
        section: Section::Contact,
        label_key: "nav.contact",
        icon: "📱",
    },
];

/// A menu entry resolved for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub section: Section,
    pub href: String,
    pub label: String,
    pub icon: &'static str,
    pub active: bool,
}

pub fn nav_items(lang: Lang, active: Section) -> Vec<NavItem> {
    MENU.iter()
        .map(|entry| NavItem {
            section: entry.section,
            href: entry.section.anchor(),
            label: t(lang, entry.label_key),
            icon: entry.icon,
            active: entry.section == active,
        })
        .collect()
}

pub fn header_class(state: ScrollState) -> &'static str {
    if state.scrolled {
        "site_header scrolled"
    } else {
        "site_header"
    }
}

pub fn link_class(item: &NavItem) -> &'static str {
    if item.active {
        "nav_link active"
    } else {
        "nav_link"
    }
}

pub fn mobile_link_class(item: &NavItem) -> &'static str {
    if item.active {
        "mobile_link active"
    } else {
        "mobile_link"
    }
}

pub fn lang_button_class(state: ScrollState) -> &'static str {
    if state.scrolled {
        "lang_btn solid"
    } else {
        "lang_btn"
    }
}

pub fn burger_class(open: bool) -> &'static str {
    if open {
        "burger open"
    } else {
        "burger"
    }
}
