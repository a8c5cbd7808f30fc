//! `aokhay-site`
//!
//! **Responsibility:** client-side behaviour of the A-OK Hay website.
//!
//! This crate provides:
//! - Single-page section display with browser history
//! - Contact form validation and asynchronous submission
//! - Product "request a quote" shortcut
//! - Cosmetic effects (smooth anchors, navbar shadow, fade-ins, counters)
//!
//! Behaviours are written against small capability traits; the `web-sys`
//! implementations and the WASM entry point live in [`dom`].

pub mod animation;
pub mod config;
pub mod error;
pub mod inquiry;
pub mod sections;
pub mod shortcut;
pub mod timer;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(test)]
pub(crate) mod testing;

pub use config::SiteConfig;
pub use error::SiteError;
pub use inquiry::{InquiryFlow, InquiryForm, InquiryTransport, ProductPicker, SubmitOutcome};
pub use sections::{CollapsiblePanel, HistoryState, SectionController, SectionHost};
pub use shortcut::ProductShortcut;
pub use timer::Timer;
