use crate::ai::GeminiClient;
use crate::chat::ChatSession;
use crate::config::AppConfig;
use crate::storage::default_store;
use crate::theme::{ThemeStore, prefers_dark, theme_definition};
use crate::types::ThemeMode;
use crate::views::{
    ChatLauncher, ChatResponder, ChatWidget, ContactSection, FaqSection, Footer, Hero, HowItWorks,
    Testimonials, WhyChooseUs,
};
use dioxus::prelude::*;

const SOFTSELL_CSS: Asset = asset!("/assets/softsell.css");

/// The shared theme. Only the header toggle writes it.
pub fn use_theme() -> Signal<ThemeStore> {
    use_context()
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(AppConfig::load);
    use_context_provider(|| {
        Signal::new(ThemeStore::load(
            default_store(),
            prefers_dark(config.color_scheme),
        ))
    });
    use_context_provider(|| ChatResponder::new(GeminiClient::from_config(&config)));
    let chat = use_signal(ChatSession::new);

    rsx! {
        ThemeStyles {}
        div { class: "page",
            AppHeader { chat }
            main {
                Hero {}
                HowItWorks {}
                WhyChooseUs {}
                Testimonials {}
                FaqSection {}
                ContactSection {}
            }
            Footer {}
            ChatWidget { chat }
            ChatLauncher { chat }
        }
    }
}

#[component]
fn ThemeStyles() -> Element {
    let mode = use_theme().read().mode();
    let definition = theme_definition(mode);
    rsx! {
        document::Link { rel: "stylesheet", href: SOFTSELL_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(chat: Signal<ChatSession>) -> Element {
    let mut chat = chat;
    let chat_open = chat.read().is_open();
    rsx! {
        header { class: "header",
            div { class: "container header-content",
                h1 { class: "brand", "SoftSell" }
                div { class: "header-actions",
                    a { class: "btn btn-primary btn-pill", href: "#contact-form",
                        span { class: "wide-only", "Get a Quote" }
                        span { class: "narrow-only", "Quote" }
                    }
                    ThemeToggle {}
                    button {
                        class: format_args!("icon-btn {}", if chat_open { "active" } else { "" }),
                        r#type: "button",
                        aria_label: "Open chat assistant",
                        onclick: move |_| chat.write().toggle(),
                        "💬"
                    }
                }
            }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let mode: ThemeMode = theme.read().mode();
    let definition = theme_definition(mode);
    rsx! {
        button {
            class: "icon-btn",
            r#type: "button",
            aria_label: definition.toggle_label,
            onclick: move |_| {
                theme.write().toggle();
            },
            "{definition.toggle_icon}"
        }
    }
}
