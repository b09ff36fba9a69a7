use dioxus::prelude::*;

use crate::Section;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        div {
            id: "hero",
            div { class: "hero_inner",
                h1 { class: "fade_in_up", {crate::t(lang, "hero.welcome")} }
                p { class: "fade_in_up delay_100", {crate::t(lang, "hero.tagline")} }
                a {
                    class: "btn primary fade_in_up delay_200",
                    href: Section::Contact.anchor(),
                    {crate::t(lang, "hero.cta")}
                }
            }
        }
    }
}
