use crate::lead::{LICENSE_TYPES, LeadField, LeadForm};
use dioxus::prelude::*;

#[component]
pub fn ContactSection() -> Element {
    let mut form = use_signal(LeadForm::default);
    let mut missing = use_signal(Vec::<LeadField>::new);
    let mut acknowledgment = use_signal(|| Option::<&'static str>::None);

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        let result = form.write().submit();
        match result {
            Ok(message) => {
                missing.set(Vec::new());
                acknowledgment.set(Some(message));
            }
            Err(fields) => missing.set(fields),
        }
    };

    let missing_fields = missing();
    let license_type = form.read().license_type.clone();
    let message = form.read().message.clone();

    rsx! {
        section { id: "contact-form", class: "section hero",
            div { class: "container",
                h3 { class: "section-title", "Get a Free Quote" }
                form { class: "lead-form", onsubmit: on_submit,
                    div { class: "grid grid-2",
                        LeadInput { form: form, field: LeadField::Name, placeholder: "Name", input_type: "text", required: true }
                        LeadInput { form: form, field: LeadField::Email, placeholder: "Email", input_type: "email", required: true }
                    }
                    LeadInput { form: form, field: LeadField::Company, placeholder: "Company", input_type: "text", required: false }
                    select {
                        class: "field",
                        required: true,
                        value: "{license_type}",
                        onchange: move |ev| *form.write().field_mut(LeadField::LicenseType) = ev.value(),
                        option { value: "", selected: license_type.is_empty(), "Select License Type" }
                        for kind in LICENSE_TYPES {
                            option { value: kind, selected: license_type == kind, "{kind}" }
                        }
                    }
                    textarea {
                        class: "field",
                        placeholder: "Tell us about your license",
                        rows: "4",
                        value: "{message}",
                        oninput: move |ev| *form.write().field_mut(LeadField::Message) = ev.value(),
                    }
                    if !missing_fields.is_empty() {
                        p { class: "form-error",
                            "Please fill in: "
                            {missing_fields.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")}
                        }
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Get My Quote" }
                }
            }
        }
        if let Some(notice) = acknowledgment() {
            div { class: "modal-overlay", role: "alertdialog", aria_modal: "true",
                div { class: "modal",
                    p { "{notice}" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        autofocus: true,
                        onclick: move |_| acknowledgment.set(None),
                        "OK"
                    }
                }
            }
        }
    }
}

#[component]
fn LeadInput(
    form: Signal<LeadForm>,
    field: LeadField,
    placeholder: &'static str,
    input_type: &'static str,
    required: bool,
) -> Element {
    let mut form = form;
    let value = form.read().field(field).to_string();
    rsx! {
        input {
            class: "field",
            r#type: input_type,
            placeholder: placeholder,
            required: required,
            value: "{value}",
            oninput: move |ev| *form.write().field_mut(field) = ev.value(),
        }
    }
}
