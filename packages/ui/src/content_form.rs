//! Website content tab of the dashboard.

use dioxus::prelude::*;
use store::{ContentEditor, ContentField, LoanField};

use crate::icons::{FaFloppyDisk, FaRotateLeft};
use crate::loan_card::LoanIcon;
use crate::Icon;

const SECTIONS: [(&str, &[ContentField]); 3] = [
    ("Hero Section", &[ContentField::HeroTitle, ContentField::HeroSubtitle]),
    (
        "Mission, Vision & Values",
        &[ContentField::MissionText, ContentField::VisionText, ContentField::ValuesText],
    ),
    (
        "Contact Information",
        &[ContentField::ContactAddress, ContentField::ContactPhone, ContentField::ContactEmail],
    ),
];

/// Editable copy. Edits go into `editor`; `on_save` is called with nothing, the
/// caller reads the draft from the same signal.
#[component]
pub fn ContentForm(editor: Signal<ContentEditor>, saving: bool, on_save: EventHandler<()>) -> Element {
    let mut editor = editor;
    let draft = editor.read().draft().clone();
    let dirty = editor.read().is_dirty();

    rsx! {
        div {
            class: "content-form",

            for (title, fields) in SECTIONS {
                div {
                    key: "{title}",
                    class: "panel",
                    h3 { "{title}" }
                    for field in fields.iter().copied() {
                        div {
                            key: "{field.label()}",
                            class: "field",
                            label { "{field.label()}" }
                            if field.is_multiline() {
                                textarea {
                                    class: "input",
                                    rows: "3",
                                    value: "{draft.get(field)}",
                                    oninput: move |evt: FormEvent| editor.write().set(field, evt.value()),
                                }
                            } else {
                                input {
                                    class: "input",
                                    r#type: "text",
                                    value: "{draft.get(field)}",
                                    oninput: move |evt: FormEvent| editor.write().set(field, evt.value()),
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "panel",
                h3 { "Loan Products" }
                div {
                    class: "loan-editor",
                    for (index, product) in draft.loan_products.iter().cloned().enumerate() {
                        div {
                            key: "{product.id}",
                            class: if index % 2 == 1 { "loan-editor__item loan-card--yellow" } else { "loan-editor__item loan-card--green" },
                            div {
                                class: "loan-card__badge",
                                LoanIcon { index }
                            }
                            for field in LoanField::ALL {
                                LoanFieldInput {
                                    key: "{product.id}-{field.label()}",
                                    editor,
                                    product_id: product.id.clone(),
                                    field,
                                    value: product.get(field).to_string(),
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "content-form__actions",
                if dirty {
                    span { class: "content-form__dirty", "Unsaved changes" }
                }
                button {
                    class: "btn btn-outline",
                    disabled: saving || !dirty,
                    onclick: move |_| editor.write().revert(),
                    Icon { icon: FaRotateLeft, width: 14, height: 14 }
                    " Discard Changes"
                }
                button {
                    class: "btn btn-primary",
                    disabled: saving,
                    onclick: move |_| on_save.call(()),
                    Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                    if saving { " Saving..." } else { " Save Changes" }
                }
            }
        }
    }
}

#[component]
fn LoanFieldInput(
    editor: Signal<ContentEditor>,
    product_id: String,
    field: LoanField,
    value: String,
) -> Element {
    let mut editor = editor;
    let update = move |evt: FormEvent| {
        editor.write().set_loan(&product_id, field, evt.value());
    };

    rsx! {
        div {
            class: "field",
            label { "{field.label()}" }
            if field == LoanField::Description {
                textarea {
                    class: "input",
                    rows: "3",
                    value: "{value}",
                    oninput: update,
                }
            } else {
                input {
                    class: "input",
                    r#type: "text",
                    value: "{value}",
                    oninput: update,
                }
            }
        }
    }
}
