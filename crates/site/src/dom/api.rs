//! Inquiry delivery over `fetch`.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response, Window};

use aokhay_core::{ContactResponse, InquirySubmission, SubmitError};

use crate::inquiry::InquiryTransport;

fn transport_error(context: &str, err: JsValue) -> SubmitError {
    SubmitError::transport(format!("{context}: {err:?}"))
}

/// POSTs the submission as JSON to a path relative to the page.
pub struct FetchTransport {
    window: Window,
    endpoint: String,
}

impl FetchTransport {
    pub fn new(window: Window, endpoint: impl Into<String>) -> Self {
        Self {
            window,
            endpoint: endpoint.into(),
        }
    }

    fn request(&self, body: &str) -> Result<Request, SubmitError> {
        let headers = Headers::new().map_err(|e| transport_error("Failed to create headers", e))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| transport_error("Failed to set content type", e))?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(body));

        Request::new_with_str_and_init(&self.endpoint, &init)
            .map_err(|e| transport_error("Failed to build request", e))
    }
}

#[async_trait(?Send)]
impl InquiryTransport for FetchTransport {
    async fn deliver(
        &self,
        submission: &InquirySubmission,
    ) -> Result<ContactResponse, SubmitError> {
        let body = submission.to_json()?;
        let request = self.request(&body)?;

        // The HTTP status is not consulted; the body alone decides success.
        let response = JsFuture::from(self.window.fetch_with_request(&request))
            .await
            .map_err(|e| transport_error("Request failed", e))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| transport_error("fetch did not yield a Response", e))?;

        let text = response
            .text()
            .map_err(|e| transport_error("Failed to read body", e))?;
        let text = JsFuture::from(text)
            .await
            .map_err(|e| transport_error("Failed to read body", e))?;

        ContactResponse::from_body(&text.as_string().unwrap_or_default())
    }
}
