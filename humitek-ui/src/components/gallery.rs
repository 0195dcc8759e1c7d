//! Before/after gallery section

use dioxus::prelude::*;

use crate::components::{BeforeAfter, Container, SectionTitle};

/// Results section built around the before/after comparator.
#[component]
pub fn GallerySection() -> Element {
    rsx! {
        section { id: "realisations", class: "border-b border-slate-200 bg-white py-12",
            Container {
                SectionTitle {
                    kicker: Some("Réalisations"),
                    title: "Avant / Après",
                    lede: Some("Quelques exemples parlants de résultats après intervention."),
                }
                BeforeAfter {}
            }
        }
    }
}
