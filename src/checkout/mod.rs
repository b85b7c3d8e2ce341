//! Checkout - form validation and the two-step order submission.

mod error;
mod form;
mod submitter;

pub use error::{CheckoutError, FieldError, Notice, ValidationErrors};
pub use form::{CheckoutForm, Field, OrderType, ValidatedForm};
pub use submitter::{CheckoutState, CheckoutSubmitter, TransitionObserver};
