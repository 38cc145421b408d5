//! Contact Submission Hand-off
//!
//! There is no backend; a submitted message is logged and printed to the
//! console as a structured object.

use deck_core::ContactSubmission;
use wasm_bindgen::JsValue;

pub fn report_submission(submission: &ContactSubmission) {
    log::info!("Form submitted: {} <{}>", submission.name, submission.email);
    match serde_wasm_bindgen::to_value(submission) {
        Ok(payload) => web_sys::console::log_2(&JsValue::from_str("Form submitted:"), &payload),
        Err(e) => log::error!("could not serialize submission: {}", e),
    }
}
