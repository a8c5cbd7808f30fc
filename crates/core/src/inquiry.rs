//! Inquiry submission: the payload built from the contact form.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::SubmitError;

/// Products summary used when no checkbox is ticked.
pub const NO_PRODUCTS: &str = "None selected";

/// Volume used when the visitor leaves the field empty.
pub const UNSPECIFIED_VOLUME: &str = "Not specified";

/// A product checkbox on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    TimothyHay,
    AlfalfaHay,
    BothProducts,
}

impl Product {
    /// Checkbox order on the form; also the order of the products summary.
    pub const ALL: [Product; 3] = [Product::TimothyHay, Product::AlfalfaHay, Product::BothProducts];

    pub fn label(&self) -> &'static str {
        match self {
            Product::TimothyHay => "Timothy Hay",
            Product::AlfalfaHay => "Alfalfa Hay",
            Product::BothProducts => "Both Products",
        }
    }

    /// Element id of the checkbox.
    pub fn checkbox_id(&self) -> &'static str {
        match self {
            Product::TimothyHay => "timothy",
            Product::AlfalfaHay => "alfalfa",
            Product::BothProducts => "both",
        }
    }

    /// Resolve a product call-to-action label.
    ///
    /// Only the two individual products can be requested; anything else
    /// (including "Both Products") yields `None`.
    pub fn from_inquiry_label(label: &str) -> Option<Product> {
        match label {
            "Timothy Hay" => Some(Product::TimothyHay),
            "Alfalfa Hay" => Some(Product::AlfalfaHay),
            _ => None,
        }
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Checkbox state of the three product boxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductSelection {
    pub timothy: bool,
    pub alfalfa: bool,
    pub both: bool,
}

impl ProductSelection {
    pub fn is_checked(&self, product: Product) -> bool {
        match product {
            Product::TimothyHay => self.timothy,
            Product::AlfalfaHay => self.alfalfa,
            Product::BothProducts => self.both,
        }
    }

    pub fn set(&mut self, product: Product, checked: bool) {
        match product {
            Product::TimothyHay => self.timothy = checked,
            Product::AlfalfaHay => self.alfalfa = checked,
            Product::BothProducts => self.both = checked,
        }
    }

    pub fn selected(&self) -> impl Iterator<Item = Product> + '_ {
        Product::ALL.into_iter().filter(|p| self.is_checked(*p))
    }

    /// Comma-joined labels of the ticked products, or [`NO_PRODUCTS`].
    pub fn summary(&self) -> String {
        let labels: Vec<&str> = self.selected().map(|p| p.label()).collect();
        if labels.is_empty() {
            NO_PRODUCTS.to_string()
        } else {
            labels.join(", ")
        }
    }
}

/// Raw values read from the contact form, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryFields {
    pub business_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub inquiry_type: String,
    pub volume: String,
    pub message: String,
    pub products: ProductSelection,
}

/// The JSON payload posted to the inquiry endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquirySubmission {
    pub business_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub inquiry_type: String,
    pub products: String,
    pub volume: String,
    pub message: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl InquirySubmission {
    /// Build the payload from form values captured at `submitted_at`.
    ///
    /// Values are carried as typed; only `volume` and `products` get defaults.
    pub fn from_fields(fields: &InquiryFields, submitted_at: DateTime<Utc>) -> Self {
        let volume = if fields.volume.is_empty() {
            UNSPECIFIED_VOLUME.to_string()
        } else {
            fields.volume.clone()
        };

        Self {
            business_name: fields.business_name.clone(),
            contact_person: fields.contact_person.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            location: fields.location.clone(),
            inquiry_type: fields.inquiry_type.clone(),
            products: fields.products.summary(),
            volume,
            message: fields.message.clone(),
            timestamp: submitted_at,
        }
    }

    pub fn to_json(&self) -> Result<String, SubmitError> {
        serde_json::to_string(self)
            .map_err(|e| SubmitError::transport(format!("could not encode inquiry: {e}")))
    }
}

// ISO-8601 with millisecond precision and a trailing `Z`.
fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Decoded reply of the inquiry endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactResponse {
    pub success: bool,
    pub message: Option<String>,
}

impl ContactResponse {
    /// Parse a response body.
    ///
    /// Anything that is not an object with a boolean `success: true` counts as a
    /// failure; only a body that is not JSON at all is a decode error.
    pub fn from_body(body: &str) -> Result<Self, SubmitError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| SubmitError::decode(e.to_string()))?;

        let success = matches!(value.get("success"), Some(Value::Bool(true)));
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self { success, message })
    }

    pub fn into_result(self) -> Result<Self, SubmitError> {
        if self.success {
            Ok(self)
        } else {
            Err(SubmitError::rejected(self.message))
        }
    }
}
