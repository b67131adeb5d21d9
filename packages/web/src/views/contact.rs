//! Contact page: the enquiry form and the "Find Us" block.

use std::time::Duration;

use dioxus::prelude::*;
use store::ContactForm;
use ui::icons::FaPaperPlane;
use ui::{use_site_content, ContactDetails, Icon, PageHero, SuccessOverlay};

/// How long the confirmation stays on screen.
const SUCCESS_OVERLAY: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq)]
enum SubmitStatus {
    Idle,
    /// Confirmation on screen; the number identifies which submission showed it.
    Success(u64),
    Error,
}

impl SubmitStatus {
    /// Status once the overlay timer started for submission `shown` runs out.
    /// A later submission's confirmation is left alone.
    fn expire(self, shown: u64) -> Self {
        match self {
            SubmitStatus::Success(current) if current == shown => SubmitStatus::Idle,
            other => other,
        }
    }

    fn is_success(self) -> bool {
        matches!(self, SubmitStatus::Success(_))
    }
}

#[component]
pub fn Contact() -> Element {
    let content = use_site_content();
    let mut form = use_signal(ContactForm::default);
    let mut submitting = use_signal(|| false);
    let mut status = use_signal(|| SubmitStatus::Idle);
    let mut confirmations = use_signal(|| 0u64);

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);
        status.set(SubmitStatus::Idle);

        match api::submit_contact(form()).await {
            Ok(()) => {
                form.set(ContactForm::default());
                submitting.set(false);
                let shown = confirmations() + 1;
                confirmations.set(shown);
                status.set(SubmitStatus::Success(shown));
                ui::sleep(SUCCESS_OVERLAY).await;
                status.set(status().expire(shown));
            }
            Err(e) => {
                tracing::error!("Error submitting contact form: {}", e);
                submitting.set(false);
                status.set(SubmitStatus::Error);
            }
        }
    };

    let site = content.read().clone();
    let current = form();

    rsx! {
        PageHero {
            title: "Get in Touch",
            subtitle: "Ready to start your financial journey? We're here to help you every step of the way.",
        }

        if status().is_success() {
            SuccessOverlay { on_close: move |_| status.set(SubmitStatus::Idle) }
        }

        section {
            class: "section",
            div {
                class: "container contact-layout",
                form {
                    class: "panel",
                    onsubmit: onsubmit,
                    h3 { "Send us a Message" }

                    div {
                        class: "field-row",
                        div {
                            class: "field",
                            label { r#for: "first_name", "First Name *" }
                            input {
                                id: "first_name",
                                class: "input",
                                required: true,
                                value: "{current.first_name}",
                                oninput: move |evt: FormEvent| form.write().first_name = evt.value(),
                            }
                        }
                        div {
                            class: "field",
                            label { r#for: "last_name", "Last Name *" }
                            input {
                                id: "last_name",
                                class: "input",
                                required: true,
                                value: "{current.last_name}",
                                oninput: move |evt: FormEvent| form.write().last_name = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "email", "Email Address *" }
                        input {
                            id: "email",
                            class: "input",
                            r#type: "email",
                            required: true,
                            value: "{current.email}",
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "phone_number", "Phone Number *" }
                        input {
                            id: "phone_number",
                            class: "input",
                            r#type: "tel",
                            required: true,
                            value: "{current.phone_number}",
                            oninput: move |evt: FormEvent| form.write().phone_number = evt.value(),
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "message", "Message *" }
                        textarea {
                            id: "message",
                            class: "input",
                            rows: "5",
                            required: true,
                            placeholder: "Tell us how we can help you...",
                            value: "{current.message}",
                            oninput: move |evt: FormEvent| form.write().message = evt.value(),
                        }
                    }

                    if status() == SubmitStatus::Error {
                        div {
                            class: "form-error",
                            "Sorry, there was an error sending your message. Please try again or contact us directly at {site.contact_email}"
                        }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: submitting(),
                        Icon { icon: FaPaperPlane, width: 14, height: 14 }
                        if submitting() { " Sending..." } else { " Send Message" }
                    }
                }

                div {
                    class: "panel",
                    h3 { "Why Choose Goal Getters?" }
                    p { "{site.mission_text}" }
                    p { "{site.values_text}" }
                }
            }
        }

        ContactDetails { content: site.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_clears_its_own_confirmation() {
        assert_eq!(SubmitStatus::Success(1).expire(1), SubmitStatus::Idle);
    }

    #[test]
    fn test_earlier_timer_leaves_later_confirmation_up() {
        // Second submission landed before the first overlay timer ran out.
        assert_eq!(SubmitStatus::Success(2).expire(1), SubmitStatus::Success(2));
        assert_eq!(SubmitStatus::Success(2).expire(2), SubmitStatus::Idle);
    }

    #[test]
    fn test_timer_does_not_hide_a_later_error() {
        assert_eq!(SubmitStatus::Error.expire(1), SubmitStatus::Error);
        assert_eq!(SubmitStatus::Idle.expire(1), SubmitStatus::Idle);
    }
}
