//! Item wire types and the rules every input must pass before it reaches
//! the store.
//!
//! `price` is a plain `f64` in every type here; the fixed-point form lives
//! only at the store boundary (see [`crate::price`]).

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::price;
use crate::types::{DbId, Timestamp};

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Item";

/// An item as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for `createItem`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateItem {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    /// The key is required; `null` means "no description".
    #[serde(deserialize_with = "required_nullable")]
    pub description: Option<String>,
    #[validate(custom(function = "valid_price"))]
    pub price: f64,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub quantity: i32,
}

/// Input for `updateItem`. Every field except `id` may be omitted.
///
/// `description` distinguishes three cases: omitted (`None`, keep the stored
/// value), `null` (`Some(None)`, clear it) and a string (`Some(Some(_))`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateItem {
    pub id: DbId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "valid_price"))]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub quantity: Option<i32>,
}

impl UpdateItem {
    /// True when the payload carries nothing but the id.
    pub fn is_touch_only(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
    }
}

/// Input for `getItem` and `deleteItem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemId {
    pub id: DbId,
}

/// Result of `deleteItem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub success: bool,
}

/// Decode procedure input into `T` without running any field rules.
pub fn decode<T: DeserializeOwned>(input: Option<serde_json::Value>) -> Result<T, CoreError> {
    let value = input.ok_or_else(|| CoreError::Validation("input is required".to_string()))?;
    serde_json::from_value(value).map_err(|e| CoreError::Validation(e.to_string()))
}

/// Decode procedure input into `T` and check every field rule.
pub fn parse_input<T>(input: Option<serde_json::Value>) -> Result<T, CoreError>
where
    T: DeserializeOwned + Validate,
{
    let parsed: T = decode(input)?;
    parsed.validate()?;
    Ok(parsed)
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// Price must survive rounding to cents and fit the stored column.
fn valid_price(value: f64) -> Result<(), ValidationError> {
    price::round_to_fixed(value)
        .map(|_| ())
        .map_err(|rule| ValidationError::new("price").with_message(Cow::Borrowed(rule)))
}

/// Like the default `Option` handling, but a missing key is an error.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

/// Present keys become `Some(..)`; `#[serde(default)]` covers missing ones.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
