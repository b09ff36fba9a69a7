use dioxus::prelude::*;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Id,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Id => "id",
            Lang::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::Id => Lang::En,
            Lang::En => Lang::Id,
        }
    }

    /// Label for the toggle button: the language a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self.toggled() {
            Lang::Id => "ID",
            Lang::En => "EN",
        }
    }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to Indonesian.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let lang = use_signal(Lang::default);
    use_context_provider(|| lang);

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    tracing::warn!("missing I18nProvider context, using local Lang::Id signal");
    use_signal(Lang::default)
}

pub fn set_lang(mut lang_sig: Signal<Lang>, lang: Lang) {
    if lang_sig() != lang {
        tracing::info!(lang = lang.code(), "language changed");
        lang_sig.set(lang);
    }
}

pub fn toggle_lang(lang_sig: Signal<Lang>) {
    let next = lang_sig().toggled();
    set_lang(lang_sig, next);
}

/// Translate a key for a given language. Falls back to Indonesian if missing.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Nav
        (Lang::Id, "nav.home") => "Beranda".to_string(),
        (Lang::En, "nav.home") => "Home".to_string(),
        (Lang::Id, "nav.about") => "Tentang Kami".to_string(),
        (Lang::En, "nav.about") => "About Us".to_string(),
        (Lang::Id, "nav.services") => "Layanan".to_string(),
        (Lang::En, "nav.services") => "Services".to_string(),
        (Lang::Id, "nav.contact") => "Kontak".to_string(),
        (Lang::En, "nav.contact") => "Contact".to_string(),
        (Lang::Id, "nav.menu") => "Menu".to_string(),
        (Lang::Id, "brand.logo_alt") => "Logo Arfapro".to_string(),
        (Lang::En, "brand.logo_alt") => "Arfapro Logo".to_string(),

        // Hero
        (Lang::Id, "hero.welcome") => "Selamat Datang di Arfapro".to_string(),
        (Lang::En, "hero.welcome") => "Welcome to Arfapro".to_string(),
        (Lang::Id, "hero.tagline") => "Solusi digital untuk mengembangkan bisnis Anda".to_string(),
        (Lang::En, "hero.tagline") => "Digital solutions to grow your business".to_string(),
        (Lang::Id, "hero.cta") => "Hubungi Kami".to_string(),
        (Lang::En, "hero.cta") => "Contact Us".to_string(),

        // Page sections
        (Lang::Id, "section.about.body") => "Kami adalah tim yang berfokus pada hasil.".to_string(),
        (Lang::En, "section.about.body") => "We are a team focused on results.".to_string(),
        (Lang::Id, "section.services.body") => "Desain, pengembangan, dan pemasaran digital.".to_string(),
        (Lang::En, "section.services.body") => "Design, development, and digital marketing.".to_string(),
        (Lang::Id, "section.contact.body") => "Kirimkan pesan dan kami akan segera membalas.".to_string(),
        (Lang::En, "section.contact.body") => "Send us a message and we will reply shortly.".to_string(),

        // Fallback: use Indonesian string if present, else show key.
        (Lang::En, k) => t(Lang::Id, k),
        (Lang::Id, _) => key.to_string(),
    }
}
