use crate::ai::{Responder, answer_or_fallback};
use crate::chat::{ChatSession, SUGGESTED_QUESTIONS, SubmitError};
use crate::types::{ChatMessage, Role};
use crate::views::shared::{format_message_timestamp, markdown_to_html};
use dioxus::prelude::*;
use std::rc::Rc;

/// The chat backend, provided once at the root.
#[derive(Clone)]
pub struct ChatResponder(Rc<dyn Responder>);

impl ChatResponder {
    pub fn new(responder: impl Responder + 'static) -> Self {
        Self(Rc::new(responder))
    }
}

fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Bot => "bot",
    }
}

/// Hands an accepted question to the responder. Rejected submissions (blank,
/// closed, reply pending) leave the draft and transcript untouched.
fn dispatch(
    mut chat: Signal<ChatSession>,
    responder: ChatResponder,
    submitted: Result<String, SubmitError>,
) {
    let question = match submitted {
        Ok(question) => question,
        Err(err) => {
            tracing::debug!("chat submission ignored: {err}");
            return;
        }
    };

    spawn(async move {
        let reply = answer_or_fallback(responder.0.as_ref(), &question).await;
        chat.write().complete(reply);
    });
}

#[component]
pub fn ChatWidget(chat: Signal<ChatSession>) -> Element {
    let mut chat = chat;
    let responder = use_hook(|| CopyValue::new(consume_context::<ChatResponder>()));

    let session = chat.read();
    if !session.is_open() {
        return rsx! {};
    }
    let awaiting = session.is_awaiting();
    let show_suggestions = session.suggestions_visible();
    let transcript = session.transcript().to_vec();
    let draft = session.draft().to_string();
    drop(session);

    rsx! {
        div { class: "chat-widget",
            div { class: "chat-header",
                h4 { class: "chat-title", "SoftSell Assistant" }
                button {
                    class: "chat-close",
                    r#type: "button",
                    aria_label: "Close chat",
                    onclick: move |_| chat.write().close(),
                    "×"
                }
            }
            div { class: "chat-list",
                for (i, msg) in transcript.iter().enumerate() {
                    MessageBubble { key: "{i}", message: msg.clone() }
                }
                if awaiting {
                    div { class: "bubble bot pending",
                        span { class: "dot", "•" }
                        span { class: "dot", "•" }
                        span { class: "dot", "•" }
                    }
                }
            }
            if show_suggestions {
                div { class: "chat-suggestions",
                    p { class: "suggestions-label", "Suggested questions:" }
                    for question in SUGGESTED_QUESTIONS {
                        button {
                            class: "suggestion",
                            r#type: "button",
                            disabled: awaiting,
                            onclick: move |_| {
                                let submitted = chat.write().submit(question);
                                dispatch(chat, responder.read().clone(), submitted);
                            },
                            "{question}"
                        }
                    }
                }
            }
            form {
                class: "chat-composer",
                onsubmit: move |ev: FormEvent| {
                    ev.prevent_default();
                    let submitted = chat.write().submit_draft();
                    dispatch(chat, responder.read().clone(), submitted);
                },
                input {
                    r#type: "text",
                    placeholder: "Type your question...",
                    value: "{draft}",
                    oninput: move |ev| chat.write().set_draft(ev.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: awaiting,
                    "Send"
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let class = role_class(message.role);
    rsx! {
        div { class: format_args!("message-row {}", class),
            if matches!(message.role, Role::Bot) {
                div { class: "bubble bot md", dangerous_inner_html: markdown_to_html(&message.content) }
            } else {
                div { class: "bubble user", "{message.content}" }
            }
            if let Some(ts) = format_message_timestamp(message.created_at) {
                span { class: "message-timestamp", "{ts}" }
            }
        }
    }
}

/// Floating button shown while the widget is closed.
#[component]
pub fn ChatLauncher(chat: Signal<ChatSession>) -> Element {
    let mut chat = chat;
    if chat.read().is_open() {
        return rsx! {};
    }
    rsx! {
        button {
            class: "chat-launcher",
            r#type: "button",
            aria_label: "Open chat assistant",
            onclick: move |_| chat.write().open(),
            span { class: "chat-launcher-icon", "💬" }
            span { class: "chat-launcher-label", "Chat with us" }
        }
    }
}
