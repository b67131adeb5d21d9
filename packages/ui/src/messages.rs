//! Dashboard message list and reply panel.

use dioxus::prelude::*;
use store::{ContactSubmission, REPLY_SUBJECT};

use crate::icons::{FaClock, FaEnvelope, FaPaperPlane, FaPhone};
use crate::Icon;

/// Submissions, most recent first. Clicking one selects it.
#[component]
pub fn MessageList(
    messages: Vec<ContactSubmission>,
    selected_id: Option<i64>,
    loading: bool,
    on_select: EventHandler<i64>,
) -> Element {
    if loading {
        return rsx! {
            div { class: "panel panel--muted", "Loading messages..." }
        };
    }

    if messages.is_empty() {
        return rsx! {
            div { class: "panel panel--muted", "No messages yet." }
        };
    }

    rsx! {
        ul {
            class: "message-list",
            for message in messages {
                li {
                    key: "{message.id}",
                    class: if Some(message.id) == selected_id { "message-row message-row--selected" } else { "message-row" },
                    onclick: move |_| on_select.call(message.id),
                    div {
                        class: "message-row__head",
                        strong { "{message.full_name()}" }
                        span {
                            class: "message-row__when",
                            Icon { icon: FaClock, width: 12, height: 12 }
                            " {message.created_date} {message.created_time}"
                        }
                    }
                    div { class: "message-row__email", "{message.email}" }
                    p { class: "message-row__preview", "{message.message}" }
                }
            }
        }
    }
}

/// Detail view of the selected submission plus the reply box.
#[component]
pub fn ReplyPanel(
    selected: Option<ContactSubmission>,
    reply: String,
    sending: bool,
    can_send: bool,
    on_input: EventHandler<String>,
    on_send: EventHandler<()>,
) -> Element {
    let Some(message) = selected else {
        return rsx! {
            div {
                class: "panel panel--muted",
                "Select a message to view details and reply."
            }
        };
    };

    rsx! {
        div {
            class: "panel reply-panel",
            h3 { "{message.full_name()}" }
            div {
                class: "reply-panel__meta",
                span { Icon { icon: FaEnvelope, width: 12, height: 12 } " {message.email}" }
                span { Icon { icon: FaPhone, width: 12, height: 12 } " {message.phone_number}" }
                span { Icon { icon: FaClock, width: 12, height: 12 } " {message.created_date} {message.created_time}" }
            }
            div {
                class: "reply-panel__message",
                "{message.message}"
            }

            label { r#for: "reply", "Reply" }
            p { class: "reply-panel__subject", "Subject: {REPLY_SUBJECT}" }
            textarea {
                id: "reply",
                class: "input",
                rows: "6",
                placeholder: "Type your reply...",
                value: "{reply}",
                disabled: sending,
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
            button {
                class: "btn btn-primary",
                disabled: !can_send,
                onclick: move |_| on_send.call(()),
                Icon { icon: FaPaperPlane, width: 14, height: 14 }
                if sending { " Sending..." } else { " Send Reply" }
            }
        }
    }
}
