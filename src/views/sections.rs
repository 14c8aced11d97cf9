use crate::content::{
    FAQS, FOOTER_BLURB, FOOTER_COLUMNS, Feature, HERO_TAGLINE, HOW_IT_WORKS, TESTIMONIALS,
    WHY_CHOOSE_US, copyright_line, rating_stars,
};
use crate::views::shared::current_year;
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "section hero",
            div { class: "container narrow center",
                h2 { class: "hero-title",
                    "Resell Your Software "
                    span { class: "highlight", "Licenses" }
                    " Easily"
                }
                p { class: "hero-tagline", "{HERO_TAGLINE}" }
                a { class: "btn btn-primary btn-pill btn-large", href: "#contact-form", "Sell My Licenses" }
            }
        }
    }
}

#[component]
pub fn HowItWorks() -> Element {
    rsx! {
        section { class: "section",
            div { class: "container",
                h3 { class: "section-title", "How It Works" }
                div { class: "grid grid-3",
                    for feature in HOW_IT_WORKS.iter() {
                        {feature_card(feature)}
                    }
                }
            }
        }
    }
}

#[component]
pub fn WhyChooseUs() -> Element {
    rsx! {
        section { class: "section alt",
            div { class: "container",
                h3 { class: "section-title", "Why Choose Us" }
                div { class: "grid grid-4",
                    for feature in WHY_CHOOSE_US.iter() {
                        {feature_card(feature)}
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> Element {
    rsx! {
        div { class: "card feature",
            div { class: "feature-icon", "{icon}" }
            h4 { class: "feature-title", "{title}" }
            p { class: "text-secondary", "{description}" }
        }
    }
}

fn feature_card(feature: &'static Feature) -> Element {
    rsx! {
        FeatureCard {
            icon: feature.icon,
            title: feature.title,
            description: feature.description,
        }
    }
}

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        section { class: "section",
            div { class: "container narrow",
                h3 { class: "section-title", "What Our Clients Say" }
                div { class: "grid grid-2",
                    for testimonial in TESTIMONIALS.iter() {
                        div { class: "card testimonial",
                            div { class: "stars", {rating_stars(testimonial.rating)} }
                            p { class: "quote text-secondary", "\"{testimonial.text}\"" }
                            p { class: "author", "- {testimonial.author}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FaqSection() -> Element {
    rsx! {
        section { class: "section alt",
            div { class: "container narrow",
                h3 { class: "section-title", "Frequently Asked Questions" }
                div { class: "faq-list",
                    for faq in FAQS.iter() {
                        FaqItem { question: faq.question, answer: faq.answer }
                    }
                }
            }
        }
    }
}

#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> Element {
    let mut is_open = use_signal(|| false);
    rsx! {
        div { class: "faq-item",
            button {
                class: "faq-question",
                r#type: "button",
                aria_expanded: is_open().to_string(),
                onclick: move |_| {
                    let open = is_open();
                    is_open.set(!open);
                },
                span { "{question}" }
                span { class: "faq-chevron", if is_open() { "▴" } else { "▾" } }
            }
            if is_open() {
                div { class: "faq-answer text-secondary", "{answer}" }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let copyright = copyright_line(current_year());
    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "grid grid-4",
                    div {
                        h4 { "SoftSell" }
                        p { class: "text-secondary small", "{FOOTER_BLURB}" }
                    }
                    for column in FOOTER_COLUMNS.iter() {
                        div {
                            h4 { "{column.heading}" }
                            ul { class: "footer-links text-secondary small",
                                for link in column.links.iter() {
                                    li { a { href: "#", "{link}" } }
                                }
                            }
                        }
                    }
                }
                div { class: "footer-bottom small", p { "{copyright}" } }
            }
        }
    }
}
