//! humitek-common - Framework-free domain logic for the Humitek site
//!
//! Holds the lead record and its validation, the lead-intake gateway seam,
//! and the site configuration record shared by the UI crates.

pub mod intake;
pub mod lead;
pub mod site;

pub use intake::{IntakeError, LeadGateway, MockLeadGateway, SubmitOutcome};
pub use lead::{FieldErrors, LeadSubmission, Problem};
pub use site::SiteInfo;
