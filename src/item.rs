use crate::error::{ListError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A price in whole currency units.
///
/// This is a wrapper around `i64` to keep raw field text out of the data
/// model: a `Price` only exists once the input has parsed. Negative values
/// are allowed; the list does not police what an item may cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Self = Self(0);

    /// Parses user-entered price text into a `Price`.
    ///
    /// The original behavior of coercing unparsable text into a sentinel
    /// value is deliberately not reproduced; a bad price is a typed error
    /// and the action that carried it is rejected whole.
    pub fn parse(input: &str) -> Result<Self> {
        input
            .trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ListError::PriceError(input.to_string()))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, priced entry in the shopping list.
///
/// Identity is the `id`; name and price are mutable through the store's
/// update path, the id never changes after creation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub price: Price,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}
