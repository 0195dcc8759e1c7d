//! Single-page composition of the site sections

use dioxus::prelude::*;
use humitek_common::SiteInfo;
use humitek_ui::{
    ContactSection, FaqSection, GallerySection, Hero, ProcessSection, ServicesSection, SiteFooter,
    SiteHeader, TestimonialsSection,
};

use crate::components::ContactForm;

#[component]
pub fn Home() -> Element {
    let site = SiteInfo::default();

    rsx! {
        div { class: "min-h-screen bg-slate-50 text-slate-900",
            SiteHeader { site: site.clone() }
            Hero {}
            ServicesSection {}
            ProcessSection {}
            GallerySection {}
            TestimonialsSection { site: site.clone() }
            ContactSection { site: site.clone(), ContactForm {} }
            FaqSection {}
            SiteFooter { site }
        }
    }
}
