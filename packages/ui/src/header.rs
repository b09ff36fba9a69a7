use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::nav::{
    burger_class, header_class, lang_button_class, link_class, mobile_link_class, nav_items,
};
use crate::scroll::{attach, ScrollSource};
use crate::{ScrollState, ScrollTracker, Section, TrackerConfig, Viewport};

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const LOGO: Asset = asset!("/assets/images/logo.svg");

/// Tracks `source` for the lifetime of the calling component. The handler is
/// registered on the first render and released when the component is dropped.
pub fn use_scroll_tracker_with<S, V>(
    source: S,
    viewport: V,
    config: TrackerConfig,
) -> Signal<ScrollState>
where
    S: ScrollSource,
    V: Viewport + 'static,
{
    let state = use_signal(ScrollState::default);
    let subscription = use_hook(move || {
        let tracker = Rc::new(RefCell::new(ScrollTracker::new(config)));
        let subscription = attach(&source, viewport, tracker, move |next| {
            let mut state = state;
            state.set(next);
        });
        Rc::new(RefCell::new(Some(subscription)))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    state
}

/// Tracks the browser window scroll position.
#[cfg(target_arch = "wasm32")]
pub fn use_scroll_tracker(config: TrackerConfig) -> Signal<ScrollState> {
    use crate::scroll::{WindowScroll, WindowViewport};

    use_scroll_tracker_with(WindowScroll, WindowViewport, config)
}

// No window outside the browser: the header keeps its initial state.
#[cfg(not(target_arch = "wasm32"))]
pub fn use_scroll_tracker(_config: TrackerConfig) -> Signal<ScrollState> {
    use_signal(ScrollState::default)
}

/// Fixed page header: logo, section links with the active one highlighted,
/// language toggle and a collapsible mobile menu.
#[component]
pub fn Header() -> Element {
    let lang_sig = crate::use_lang();
    let lang = lang_sig();

    let scroll = use_scroll_tracker(TrackerConfig::default());
    let state = scroll();

    let mut menu_open = use_signal(|| false);
    let items = nav_items(lang, state.active);
    let wide_lang_class = format!("{} wide", lang_button_class(state));

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        header { class: header_class(state),
            div { class: "header_inner",
                a { class: "brand", href: Section::Home.anchor(),
                    img {
                        class: "brand_logo",
                        src: LOGO,
                        alt: crate::t(lang, "brand.logo_alt"),
                        width: "180",
                        height: "58",
                    }
                }

                nav { class: "nav_links",
                    for (i, item) in items.iter().enumerate() {
                        a {
                            key: "{item.section}",
                            class: link_class(item),
                            href: "{item.href}",
                            style: "--stagger: {i}",
                            span { class: "nav_label",
                                span { class: "nav_icon", "{item.icon}" }
                                "{item.label}"
                            }
                            span { class: "nav_indicator" }
                        }
                    }
                    button {
                        class: lang_button_class(state),
                        onclick: move |_| crate::toggle_lang(lang_sig),
                        {lang.toggle_label()}
                    }
                }

                button {
                    class: "menu_btn",
                    title: crate::t(lang, "nav.menu"),
                    onclick: move |_| {
                        let next = !menu_open();
                        menu_open.set(next);
                    },
                    span { class: burger_class(menu_open()),
                        span { class: "bar bar_top" }
                        span { class: "bar bar_middle" }
                        span { class: "bar bar_bottom" }
                    }
                }
            }

            if menu_open() {
                div { class: "mobile_menu",
                    for (i, item) in items.iter().enumerate() {
                        a {
                            key: "{item.section}",
                            class: mobile_link_class(item),
                            href: "{item.href}",
                            style: "--stagger: {i}",
                            onclick: move |_| menu_open.set(false),
                            span { class: "nav_icon", "{item.icon}" }
                            "{item.label}"
                        }
                    }
                    button {
                        class: "{wide_lang_class}",
                        onclick: move |_| crate::toggle_lang(lang_sig),
                        {lang.toggle_label()}
                    }
                }
            }
        }
    }
}
