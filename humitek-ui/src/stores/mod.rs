//! Store types for UI state management

pub mod contact_form;

pub use contact_form::ContactFormState;
