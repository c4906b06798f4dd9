//! Fixed vocabularies shared by the store and the request validator.
//!
//! The string forms below are the contract: serde, `Display` and `FromStr` all use exactly
//! these literals, case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Restaurant category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Fast Food")]
    FastFood,
    Pizza,
    Asian,
    Italian,
    Mexican,
    Healthy,
}

/// Every category, in catalogue order.
pub const CATEGORIES: [Category; 6] = [
    Category::FastFood,
    Category::Pizza,
    Category::Asian,
    Category::Italian,
    Category::Mexican,
    Category::Healthy,
];

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::FastFood => "Fast Food",
            Category::Pizza => "Pizza",
            Category::Asian => "Asian",
            Category::Italian => "Italian",
            Category::Mexican => "Mexican",
            Category::Healthy => "Healthy",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the [`CATEGORIES`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATEGORIES
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// How an order is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Upi,
    Cash,
}

/// Every payment method, in catalogue order.
pub const PAYMENT_METHODS: [PaymentMethod; 3] =
    [PaymentMethod::Card, PaymentMethod::Upi, PaymentMethod::Cash];

impl PaymentMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Cash => "cash",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the [`PAYMENT_METHODS`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown payment method: {0:?}")]
pub struct ParsePaymentMethodError(pub String);

impl FromStr for PaymentMethod {
    type Err = ParsePaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PAYMENT_METHODS
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| ParsePaymentMethodError(s.to_string()))
    }
}
