//! Curated donation causes. No payment processing happens here; each
//! cause links out to the partner organization's own donation page.

mod donations_model;

pub use donations_model::{all_causes, cause_profile, Cause, CauseProfile};
