//! This crate contains all shared UI for the workspace.

mod section;
pub use section::Section;

mod tracker;
pub use tracker::{resolve_active, ScrollState, ScrollTracker, TrackerConfig, Viewport};

pub mod scroll;
pub use scroll::{attach, ScrollBus, ScrollSource, ScrollSubscription};

pub mod nav;
pub use nav::{nav_items, MenuEntry, NavItem, MENU};

mod header;
pub use header::{use_scroll_tracker, use_scroll_tracker_with, Header};

mod hero;
pub use hero::Hero;

mod theme;
pub use theme::SiteTheme;

mod i18n;
pub use i18n::{set_lang, t, toggle_lang, use_lang, I18nProvider, Lang};
