//! humitek-ui - View components for the Humitek site
//!
//! Pure, props-based Dioxus components: page sections, form widgets and the
//! contact form view. Business state lives with the controllers in
//! humitek-web; the only local state here is widget-internal (slider
//! position, accordion open flag).

pub mod components;
pub mod stores;

pub use components::*;
