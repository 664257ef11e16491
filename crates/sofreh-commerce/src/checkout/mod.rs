//! Checkout module.
//!
//! Handles the delivery form, tracking codes, and order receipts.

mod form;
mod receipt;
mod submit;
mod tracking;

pub use form::CheckoutForm;
pub use receipt::OrderReceipt;
pub use submit::submit_order;
pub use tracking::TrackingCode;
