//! Query parameter parsing for the write endpoints.
//!
//! Malformed numbers and booleans do not fail the parse. Each one is
//! replaced by its zero value and reported as a [`ParamError`] so the caller
//! can decide whether to log it or reject the request.

use std::collections::HashMap;
use std::num::IntErrorKind;

use thiserror::Error;

use crate::domain::{Dollars, InventoryCreate, InventoryPatch};

pub type QueryParams = HashMap<String, String>;

/// Collapses raw query pairs into [`QueryParams`], keeping the first value of
/// a repeated key.
pub fn first_values(pairs: impl IntoIterator<Item = (String, String)>) -> QueryParams {
    let mut query = QueryParams::new();
    for (key, value) in pairs {
        query.entry(key).or_insert(value);
    }
    query
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParamError {
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),
    #[error("invalid quantity: {0:?}")]
    InvalidQuantity(String),
    #[error("invalid in_stock: {0:?}")]
    InvalidInStock(String),
}

/// Parsed fields of a create or update request.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryParams {
    pub title: String,
    pub price: Dollars,
    pub quantity: i64,
    pub in_stock: bool,
}

impl InventoryParams {
    /// Parses `title`, `price`, `quantity` and `in_stock`. Missing values parse
    /// like empty strings.
    pub fn from_query(query: &QueryParams) -> (Self, Vec<ParamError>) {
        let mut issues = Vec::new();

        let raw_price = field(query, "price");
        let price = raw_price.parse::<f32>().unwrap_or_else(|_| {
            issues.push(ParamError::InvalidPrice(raw_price.to_string()));
            0.0
        });

        // Out-of-range quantities saturate but are still reported.
        let raw_quantity = field(query, "quantity");
        let quantity = raw_quantity.parse::<i64>().unwrap_or_else(|err| {
            issues.push(ParamError::InvalidQuantity(raw_quantity.to_string()));
            match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => 0,
            }
        });

        let raw_in_stock = field(query, "in_stock");
        let in_stock = parse_bool(raw_in_stock).unwrap_or_else(|| {
            issues.push(ParamError::InvalidInStock(raw_in_stock.to_string()));
            false
        });

        let params = Self {
            title: title_from_query(query),
            price: Dollars(price),
            quantity,
            in_stock,
        };
        (params, issues)
    }

    pub fn to_create(&self, sku: u32) -> InventoryCreate {
        InventoryCreate {
            title: self.title.clone(),
            price: self.price,
            quantity: self.quantity,
            in_stock: self.in_stock,
            sku,
        }
    }

    pub fn to_patch(&self) -> InventoryPatch {
        InventoryPatch {
            price: self.price,
            quantity: self.quantity,
            in_stock: self.in_stock,
        }
    }
}

pub fn title_from_query(query: &QueryParams) -> String {
    field(query, "title").to_string()
}

fn field<'a>(query: &'a QueryParams, name: &str) -> &'a str {
    query.get(name).map(String::as_str).unwrap_or("")
}

/// Accepts the usual boolean spellings: 1/0, t/f, true/false in lower, upper
/// or title case.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
