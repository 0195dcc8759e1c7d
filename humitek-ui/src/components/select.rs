//! Problem-category select for the intake form

use dioxus::prelude::*;
use humitek_common::Problem;

use crate::components::text_input::FIELD_CLASS;

/// Styled native select over the closed problem list.
///
/// `None` renders the disabled "Choisir…" placeholder. Unknown values from
/// the DOM map back to `None`, so the controller only ever sees the five
/// known categories.
#[component]
pub fn ProblemSelect(value: Option<Problem>, onchange: EventHandler<Option<Problem>>) -> Element {
    rsx! {
        select {
            name: "problem",
            class: FIELD_CLASS,
            onchange: move |e| onchange.call(Problem::from_label(&e.value())),
            option { value: "", disabled: true, selected: value.is_none(), "Choisir…" }
            for p in Problem::ALL {
                option { value: p.label(), selected: value == Some(p), {p.label()} }
            }
        }
    }
}
