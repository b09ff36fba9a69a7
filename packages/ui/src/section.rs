use std::fmt;

/// Page sections the header links to. Declaration order is the tie-break
/// order used by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Contact,
}

impl Section {
    /// Sections checked against the viewport once the page is scrolled past
    /// the home cutoff. Home is never matched by geometry.
    pub const TRACKED: [Section; 3] = [Section::About, Section::Services, Section::Contact];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
