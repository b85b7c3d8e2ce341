use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{FieldError, ValidationErrors};
use crate::order::NewOrder;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 255;
const PHONE_MIN: usize = 10;
const PHONE_MAX: usize = 15;
const INSTRUCTIONS_MAX: usize = 500;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-\s()]+$").expect("invalid phone pattern"));

// Local part may not start with a dot or contain "..", checked separately.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("invalid email pattern")
});

/// How the customer will receive the order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    #[default]
    #[serde(rename = "pickup")]
    Pickup,
    #[serde(rename = "dine-in")]
    DineIn,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Pickup => "pickup",
            OrderType::DineIn => "dine-in",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Pickup => "Pickup",
            OrderType::DineIn => "Dine-in",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pickup" => Ok(OrderType::Pickup),
            "dine-in" => Ok(OrderType::DineIn),
            other => Err(format!("unknown order type: {}", other)),
        }
    }
}

/// Form fields, named as the checkout view names them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    SpecialInstructions,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CustomerName => "customerName",
            Field::CustomerEmail => "customerEmail",
            Field::CustomerPhone => "customerPhone",
            Field::SpecialInstructions => "specialInstructions",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer-supplied checkout details, as entered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(default)]
    pub order_type: OrderType,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

/// A form that passed validation, with whitespace trimmed and an empty
/// instructions field normalized to `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedForm {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub order_type: OrderType,
    pub special_instructions: Option<String>,
}

impl ValidatedForm {
    /// The order header to persist for this form and cart total.
    pub fn into_new_order(self, total_amount: u64) -> NewOrder {
        NewOrder {
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            order_type: self.order_type,
            total_amount,
            special_instructions: self.special_instructions,
        }
    }
}

impl CheckoutForm {
    pub fn new(
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        customer_phone: impl Into<String>,
        order_type: OrderType,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            customer_phone: customer_phone.into(),
            order_type,
            special_instructions: None,
        }
    }

    /// Set the optional special instructions.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.special_instructions = Some(instructions.into());
        self
    }

    /// Check every field and collect one message per failing field.
    pub fn validate(&self) -> Result<ValidatedForm, ValidationErrors> {
        let name = self.customer_name.trim();
        let email = self.customer_email.trim();
        let phone = self.customer_phone.trim();
        let instructions = self.special_instructions.as_deref().unwrap_or("");

        let mut errors = Vec::new();
        if let Some(message) = check_name(name) {
            errors.push(FieldError::new(Field::CustomerName, message));
        }
        if let Some(message) = check_email(email) {
            errors.push(FieldError::new(Field::CustomerEmail, message));
        }
        if let Some(message) = check_phone(phone) {
            errors.push(FieldError::new(Field::CustomerPhone, message));
        }
        if instructions.chars().count() > INSTRUCTIONS_MAX {
            errors.push(FieldError::new(
                Field::SpecialInstructions,
                "Instructions must be less than 500 characters",
            ));
        }

        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors));
        }

        Ok(ValidatedForm {
            customer_name: name.to_string(),
            customer_email: email.to_string(),
            customer_phone: phone.to_string(),
            order_type: self.order_type,
            special_instructions: (!instructions.is_empty()).then(|| instructions.to_string()),
        })
    }
}

fn check_name(name: &str) -> Option<&'static str> {
    let len = name.chars().count();
    if len < NAME_MIN {
        Some("Name must be at least 2 characters")
    } else if len > NAME_MAX {
        Some("Name must be less than 100 characters")
    } else {
        None
    }
}

fn check_email(email: &str) -> Option<&'static str> {
    let local = email.split('@').next().unwrap_or("");
    if !EMAIL_PATTERN.is_match(email) || local.starts_with('.') || local.contains("..") {
        Some("Invalid email address")
    } else if email.chars().count() > EMAIL_MAX {
        Some("Email must be less than 255 characters")
    } else {
        None
    }
}

fn check_phone(phone: &str) -> Option<&'static str> {
    let len = phone.chars().count();
    if len < PHONE_MIN {
        Some("Phone number must be at least 10 digits")
    } else if len > PHONE_MAX {
        Some("Phone number is too long")
    } else if !PHONE_PATTERN.is_match(phone) {
        Some("Invalid phone number")
    } else {
        None
    }
}
