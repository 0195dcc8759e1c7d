//! Contact form view (pure, props-based)

use dioxus::prelude::*;
use humitek_common::{FieldErrors, Problem};

use crate::components::icons::{CircleCheckIcon, PhoneIcon};
use crate::components::{
    Button, ButtonSize, ButtonVariant, FormField, ProblemSelect, TextArea, TextInput,
};

/// Quote-request form. All values and outcome state come in as props; the
/// controller owns them and handles `on_submit`.
///
/// The consent checkbox is a `required` input: the browser refuses to fire
/// the submit event while it is unchecked, independent of field validation.
/// The submit button is disabled while a submission is in flight.
#[component]
pub fn ContactFormView(
    name: String,
    phone: String,
    email: String,
    zip: String,
    problem: Option<Problem>,
    slot: String,
    message: String,
    consent: bool,
    /// Whether the mocked round trip is in flight.
    submitting: bool,
    /// Per-field validation failures shown inline.
    errors: FieldErrors,
    /// Show the confirmation banner after an accepted submission.
    confirmed: bool,
    /// Gateway failure message, if any.
    #[props(default)]
    failure: Option<String>,
    on_name_change: EventHandler<String>,
    on_phone_change: EventHandler<String>,
    on_email_change: EventHandler<String>,
    on_zip_change: EventHandler<String>,
    on_problem_change: EventHandler<Option<Problem>>,
    on_slot_change: EventHandler<String>,
    on_message_change: EventHandler<String>,
    on_consent_change: EventHandler<bool>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "grid grid-cols-1 gap-4 sm:grid-cols-2",
            onsubmit: move |e| {
                e.prevent_default();
                on_submit.call(());
            },
            if confirmed {
                div { class: "sm:col-span-2 flex items-center gap-2 rounded-xl border border-green-200 bg-green-50 p-3 text-sm text-green-800",
                    CircleCheckIcon { class: "w-5 h-5" }
                    "Merci ! Votre demande a été enregistrée. Nous vous rappelons rapidement."
                }
            }
            if let Some(failure) = &failure {
                div { class: "sm:col-span-2 rounded-xl border border-rose-200 bg-rose-50 p-3 text-sm text-rose-700",
                    "{failure}"
                }
            }
            div { class: "sm:col-span-1",
                FormField { label: "Nom*", error: errors.name,
                    TextInput {
                        value: name,
                        name: Some("name"),
                        placeholder: Some("Jean Dupont"),
                        on_input: move |v| on_name_change.call(v),
                    }
                }
            }
            div { class: "sm:col-span-1",
                FormField { label: "Téléphone*", error: errors.phone,
                    TextInput {
                        value: phone,
                        name: Some("phone"),
                        placeholder: Some("06 12 34 56 78"),
                        on_input: move |v| on_phone_change.call(v),
                    }
                }
            }
            div { class: "sm:col-span-1",
                FormField { label: "Email", error: errors.email,
                    TextInput {
                        value: email,
                        name: Some("email"),
                        placeholder: Some("vous@exemple.fr"),
                        on_input: move |v| on_email_change.call(v),
                    }
                }
            }
            div { class: "sm:col-span-1",
                FormField { label: "Code postal", error: errors.zip,
                    TextInput {
                        value: zip,
                        name: Some("zip"),
                        placeholder: Some("33000"),
                        on_input: move |v| on_zip_change.call(v),
                    }
                }
            }
            div { class: "sm:col-span-1",
                FormField { label: "Type de problème",
                    ProblemSelect {
                        value: problem,
                        onchange: move |v| on_problem_change.call(v),
                    }
                }
            }
            div { class: "sm:col-span-1",
                FormField { label: "Disponibilité souhaitée",
                    TextInput {
                        value: slot,
                        name: Some("slot"),
                        placeholder: Some("Ex. Mercredi matin"),
                        on_input: move |v| on_slot_change.call(v),
                    }
                }
            }
            div { class: "sm:col-span-2",
                FormField { label: "Message",
                    TextArea {
                        value: message,
                        name: Some("message"),
                        placeholder: Some("Décrivez rapidement votre situation…"),
                        on_input: move |v| on_message_change.call(v),
                    }
                }
            }
            div { class: "sm:col-span-2 flex items-start gap-2",
                input {
                    id: "gdpr",
                    r#type: "checkbox",
                    required: true,
                    checked: consent,
                    class: "mt-1 h-4 w-4 rounded border-slate-300 text-sky-600 focus:ring-sky-500",
                    onchange: move |e| on_consent_change.call(e.checked()),
                }
                label { r#for: "gdpr", class: "text-sm text-slate-600",
                    "J'accepte d'être recontacté·e et la politique de confidentialité."
                }
            }
            div { class: "sm:col-span-2",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    r#type: Some("submit"),
                    disabled: submitting,
                    class: Some("w-full".to_string()),
                    PhoneIcon { class: "w-5 h-5" }
                    if submitting {
                        "Envoi…"
                    } else {
                        "Demander un devis"
                    }
                }
            }
        }
    }
}
