use std::fmt;

use thiserror::Error;

use super::Field;
use crate::order::{OrderId, OrderServiceError};

/// One field-level validation message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every failing field of a checkout form. Never empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("invalid checkout form: {}", join(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// The message for `field`, if it failed.
    pub fn for_field(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A user-facing toast: short title plus one sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    pub const EMPTY_CART: Notice = Notice {
        title: "Cart is empty",
        description: "Please add items to your cart before checking out.",
    };

    pub const ORDER_FAILED: Notice = Notice {
        title: "Order failed",
        description: "Something went wrong. Please try again.",
    };
}

/// Why a checkout submission did not produce an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Submission attempted with nothing in the cart. No service call made.
    #[error("cannot check out an empty cart")]
    EmptyCart,
    /// The form failed validation. No service call made.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// The order header could not be written.
    #[error("failed to create order: {0}")]
    OrderWrite(#[source] OrderServiceError),
    /// The header was written but its items were not. `compensated` tells
    /// whether the orphaned header was deleted again.
    #[error("failed to create items for order {order_id}: {source}")]
    ItemsWrite {
        order_id: OrderId,
        #[source]
        source: OrderServiceError,
        compensated: bool,
    },
}

impl CheckoutError {
    /// The toast to show, if any. Validation failures are shown inline instead.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            CheckoutError::EmptyCart => Some(Notice::EMPTY_CART),
            CheckoutError::Validation(_) => None,
            CheckoutError::OrderWrite(_) | CheckoutError::ItemsWrite { .. } => {
                Some(Notice::ORDER_FAILED)
            }
        }
    }

    /// Per-field messages when the form was rejected.
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            CheckoutError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
