//! Client-side state for the barbershop landing page.
//!
//! - [`LeadForm`] is the capture form's submission state machine. It checks
//!   fields locally with the rules from [`lead_contract`] and allows one
//!   submission in flight at a time.
//! - [`LeadsApi`] is the port the form submits through; [`HttpLeadsClient`]
//!   implements it over HTTP.
//! - [`Carousel`], [`Lightbox`] and [`HeaderState`] hold the index and toggle
//!   state behind the testimonial slider, the gallery viewer and the sticky
//!   header.

mod api;
mod carousel;
mod form;
mod header;

pub use api::{HttpLeadsClient, LeadsApi, SubmitError};
pub use carousel::{AUTO_ADVANCE_PERIOD, Carousel, Lightbox};
pub use form::{FormState, LeadForm, Notice, SubmitBlocked};
pub use header::{HeaderState, SCROLL_THRESHOLD};
