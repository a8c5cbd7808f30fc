//! Contact form submission: validate, serialize, POST, report.
//!
//! One attempt per submit event. The only guard against a second attempt while
//! one is in flight is the disabled submit button; nothing is retried.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use aokhay_core::{
    ContactResponse, InquiryFields, InquirySubmission, Product, SubmitError, ValidationError,
    validate,
};

use crate::timer::Timer;

/// Label shown on the submit button while a request is in flight.
pub const LOADING_LABEL: &str = r#"<span class="loading"></span> Sending..."#;

/// The contact form as the submission flow sees it.
pub trait InquiryForm {
    fn read(&self) -> InquiryFields;
    /// Disable the submit button and show [`LOADING_LABEL`]; returns the label
    /// that was there before.
    fn lock_submit(&self) -> String;
    /// Re-enable the submit button with `label` restored as-is.
    fn unlock_submit(&self, label: &str);
    fn show_success(&self);
    fn hide_success(&self);
    /// Clear every field.
    fn reset(&self);
    fn alert(&self, message: &str);
}

/// Product preselection used by the product shortcut.
pub trait ProductPicker {
    fn check_product(&self, product: Product);
    fn scroll_form_into_view(&self);
}

/// Delivers a submission to the backend.
#[async_trait(?Send)]
pub trait InquiryTransport {
    async fn deliver(&self, submission: &InquirySubmission) -> Result<ContactResponse, SubmitError>;
}

/// How a submit event ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Blocked before any request was made.
    Invalid(ValidationError),
    Sent(InquirySubmission),
    Failed(SubmitError),
}

pub struct InquiryFlow {
    form: Rc<dyn InquiryForm>,
    transport: Rc<dyn InquiryTransport>,
    timer: Rc<dyn Timer>,
    success_display: Duration,
}

impl InquiryFlow {
    pub fn new(
        form: Rc<dyn InquiryForm>,
        transport: Rc<dyn InquiryTransport>,
        timer: Rc<dyn Timer>,
        success_display: Duration,
    ) -> Self {
        Self {
            form,
            transport,
            timer,
            success_display,
        }
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let fields = self.form.read();

        if let Err(err) = validate(&fields) {
            warn!(reason = %err, "inquiry rejected by validation");
            self.form.alert(&err.user_message());
            return SubmitOutcome::Invalid(err);
        }

        let submission = InquirySubmission::from_fields(&fields, Utc::now());
        let span = info_span!("inquiry_submit", attempt = %Uuid::now_v7());

        self.send(submission).instrument(span).await
    }

    async fn send(&self, submission: InquirySubmission) -> SubmitOutcome {
        info!(inquiry_type = %submission.inquiry_type, "sending inquiry");

        let original_label = self.form.lock_submit();
        let result = self
            .transport
            .deliver(&submission)
            .await
            .and_then(ContactResponse::into_result);
        self.form.unlock_submit(&original_label);

        match result {
            Ok(_) => {
                self.form.show_success();
                self.form.reset();

                let form = Rc::clone(&self.form);
                self.timer
                    .after(self.success_display, Box::new(move || form.hide_success()));

                info!(payload = ?submission, "inquiry submitted successfully");
                SubmitOutcome::Sent(submission)
            }
            Err(err) => {
                error!(error = %err, "inquiry submission failed");
                self.form.alert(err.user_message());
                SubmitOutcome::Failed(err)
            }
        }
    }
}
