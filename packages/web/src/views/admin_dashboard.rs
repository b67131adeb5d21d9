//! Admin dashboard: website content editor and customer messages.

use dioxus::prelude::*;
use store::{ContentEditor, Inbox, ReplyReport};
use ui::icons::{FaArrowsRotate, FaEnvelope, FaGlobe};
use ui::{ContentForm, Icon, LogoutButton, MessageList, ReplyPanel, COMPANY_NAME};

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tab {
    Content,
    Messages,
}

/// Banner shown above the active tab.
#[derive(Clone, Debug, PartialEq)]
struct Notice {
    text: String,
    warn: bool,
}

impl Notice {
    fn ok(text: impl Into<String>) -> Self {
        Self { text: text.into(), warn: false }
    }

    fn warn(text: impl Into<String>) -> Self {
        Self { text: text.into(), warn: true }
    }
}

impl From<ReplyReport> for Notice {
    fn from(report: ReplyReport) -> Self {
        match report {
            ReplyReport::Delivered { .. } => Notice::ok(report.message()),
            ReplyReport::NotDelivered(_) => Notice::warn(report.message()),
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let nav = use_navigator();
    let mut verified = use_signal(|| false);
    let mut tab = use_signal(|| Tab::Content);
    let mut notice = use_signal(|| None::<Notice>);

    let mut inbox = use_signal(Inbox::new);
    let mut loading_messages = use_signal(|| false);

    let mut editor = use_signal(ContentEditor::default);
    let mut saving = use_signal(|| false);

    let refresh_messages = move || {
        spawn(async move {
            loading_messages.set(true);
            match api::list_messages().await {
                Ok(messages) => inbox.write().load(messages),
                Err(e) => {
                    tracing::error!("Failed to load messages: {}", e);
                    inbox.write().load(Vec::new());
                    notice.set(Some(Notice::warn("Failed to load messages. Please try again.")));
                }
            }
            loading_messages.set(false);
        });
    };

    // The session is checked on the server; a missing flag sends the
    // operator back to the login form.
    let _ = use_resource(move || async move {
        match api::admin_status().await {
            Ok(true) => {
                verified.set(true);
                refresh_messages();
                match api::get_site_content().await {
                    Ok(content) => editor.set(ContentEditor::new(content)),
                    Err(e) => tracing::error!("Failed to load site content: {}", e),
                }
            }
            Ok(false) => {
                nav.replace(Route::AdminLogin {});
            }
            Err(e) => {
                tracing::error!("Failed to check admin session: {}", e);
                nav.replace(Route::AdminLogin {});
            }
        }
    });

    let save_content = move |_| async move {
        saving.set(true);
        notice.set(None);
        let draft = editor.read().draft().clone();
        match api::save_site_content(draft).await {
            Ok(saved) => {
                editor.write().mark_saved(saved);
                notice.set(Some(Notice::ok("Website content saved.")));
            }
            Err(e) => {
                tracing::error!("Failed to save site content: {}", e);
                notice.set(Some(Notice::warn("Failed to save content. Please try again.")));
            }
        }
        saving.set(false);
    };

    let send_reply = move |_| async move {
        let Some(email) = inbox.write().begin_send() else {
            return;
        };
        notice.set(None);

        let delivered = match api::send_email(email.to, email.subject, email.body).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Reply was not delivered: {}", e);
                false
            }
        };
        if let Some(report) = inbox.write().finish_send(delivered) {
            notice.set(Some(report.into()));
        }
    };

    if !verified() {
        return rsx! {
            div { class: "panel panel--muted login-card", "Checking session..." }
        };
    }

    let state = inbox.read().clone();
    let selected_id = state.selected().map(|message| message.id);

    rsx! {
        header {
            class: "site-header",
            div {
                class: "container site-header__inner",
                span { class: "brand__name", "{COMPANY_NAME}" }
                LogoutButton {
                    on_logout: move |_| {
                        nav.replace(Route::AdminLogin {});
                    },
                }
            }
        }

        div {
            class: "container",
            div {
                class: "dashboard__bar",
                h2 { "Welcome to the Admin Dashboard" }
            }

            div {
                class: "tabs",
                button {
                    class: if tab() == Tab::Content { "tab tab--active" } else { "tab" },
                    onclick: move |_| {
                        notice.set(None);
                        tab.set(Tab::Content);
                    },
                    Icon { icon: FaGlobe, width: 14, height: 14 }
                    " Website Content"
                }
                button {
                    class: if tab() == Tab::Messages { "tab tab--active" } else { "tab" },
                    onclick: move |_| {
                        notice.set(None);
                        tab.set(Tab::Messages);
                        refresh_messages();
                    },
                    Icon { icon: FaEnvelope, width: 14, height: 14 }
                    " Customer Messages ({state.messages().len()})"
                }
            }

            if let Some(Notice { text, warn }) = notice() {
                div {
                    class: if warn { "notice notice--warn" } else { "notice" },
                    "{text}"
                }
            }

            match tab() {
                Tab::Content => rsx! {
                    ContentForm {
                        editor,
                        saving: saving(),
                        on_save: save_content,
                    }
                },
                Tab::Messages => rsx! {
                    div {
                        class: "inbox__toolbar",
                        button {
                            class: "btn btn-outline",
                            disabled: loading_messages(),
                            onclick: move |_| refresh_messages(),
                            Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                            if loading_messages() { " Loading..." } else { " Refresh" }
                        }
                    }
                    div {
                        class: "inbox",
                        MessageList {
                            messages: state.messages().to_vec(),
                            selected_id,
                            loading: loading_messages(),
                            on_select: move |id: i64| {
                                inbox.write().select(id);
                            },
                        }
                        ReplyPanel {
                            selected: state.selected().cloned(),
                            reply: state.reply().to_string(),
                            sending: state.is_sending(),
                            can_send: state.can_send(),
                            on_input: move |text: String| inbox.write().set_reply(text),
                            on_send: send_reply,
                        }
                    }
                },
            }
        }
    }
}
