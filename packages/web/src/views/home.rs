use dioxus::prelude::*;
use ui::{Hero, Section};

/// The single landing page: hero followed by the sections the header links to.
#[component]
pub fn Home() -> Element {
    rsx! {
        section { id: Section::Home.id(), Hero {} }
        PageSection { target: Section::About, body_key: "section.about.body" }
        PageSection { target: Section::Services, body_key: "section.services.body" }
        PageSection { target: Section::Contact, body_key: "section.contact.body" }
    }
}

#[component]
fn PageSection(target: Section, body_key: &'static str) -> Element {
    let lang = ui::use_lang()();
    let title_key = format!("nav.{}", target.id());

    rsx! {
        section { id: target.id(), class: "page_section",
            h2 { {ui::t(lang, &title_key)} }
            p { {ui::t(lang, body_key)} }
        }
    }
}
