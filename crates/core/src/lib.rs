//! `aokhay-core` — inquiry domain for the A-OK Hay website.
//!
//! This crate contains **pure** logic (no DOM, no network): the inquiry payload,
//! form validation, and the small decisions behind the page effects.

pub mod counter;
pub mod effects;
pub mod error;
pub mod inquiry;
pub mod validation;

pub use counter::{CounterAnimation, CounterFrames};
pub use effects::{NavbarStyle, anchor_target};
pub use error::{SUBMIT_FAILURE_MESSAGE, SubmitError, ValidationError, ValidationResult};
pub use inquiry::{
    ContactResponse, InquiryFields, InquirySubmission, NO_PRODUCTS, Product, ProductSelection,
    UNSPECIFIED_VOLUME,
};
pub use validation::validate;
