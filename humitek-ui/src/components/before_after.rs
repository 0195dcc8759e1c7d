//! Before/after treatment comparator

use dioxus::prelude::*;

use crate::components::icons::{BadgeCheckIcon, CameraIcon};

const TAG: &str = "absolute left-3 top-3 z-10 inline-flex items-center gap-2 rounded-full bg-white/85 px-3 py-1 text-xs font-medium text-slate-700 shadow-sm backdrop-blur";

/// Draggable comparator between untreated and treated wall renderings.
///
/// The slider position is widget-local state and never leaves the component.
#[component]
pub fn BeforeAfter() -> Element {
    let mut pos = use_signal(|| 50i64);
    let width = pos();
    let clip = 100 - width;

    rsx! {
        div { class: "relative w-full overflow-hidden rounded-2xl border border-slate-200 shadow-sm",
            div { class: "relative h-72 bg-[linear-gradient(135deg,#bfdbfe,#93c5fd)]",
                div { class: TAG,
                    BadgeCheckIcon { class: "w-4 h-4" }
                    "Après"
                }
                div {
                    class: "absolute inset-0 bg-[linear-gradient(135deg,#e2e8f0,#cbd5e1)]",
                    style: "width: {width}%; clip-path: inset(0 {clip}% 0 0);",
                    aria_label: "Avant",
                    div { class: TAG,
                        CameraIcon { class: "w-4 h-4" }
                        "Avant"
                    }
                }
            }
            input {
                r#type: "range",
                min: "0",
                max: "100",
                value: "{width}",
                aria_label: "Comparateur avant/après",
                class: "absolute inset-x-0 bottom-0 h-8 w-full cursor-ew-resize bg-transparent accent-sky-600",
                oninput: move |e| {
                    if let Ok(v) = e.value().parse::<i64>() {
                        pos.set(v.clamp(0, 100));
                    }
                },
            }
        }
    }
}
