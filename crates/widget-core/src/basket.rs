//! # Basket Types
//!
//! The list of purchasable line items a buyer selects. Every item is
//! validated independently; violations carry the item index in their path
//! (e.g., `"[2].name"`) so a bad item can be located in a long basket.
//! An empty basket is valid.

use crate::error::{ValidationError, ValidationResult, Violation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Minimum length of item name and description, in characters
pub const TEXT_MIN_LEN: usize = 1;

/// Maximum length of item name and description, in characters
pub const TEXT_MAX_LEN: usize = 100;

/// Recognized purchase tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Test-network token, accepted in every environment
    #[serde(rename = "TEST")]
    Test,

    /// Production ledger token
    #[serde(rename = "ICP")]
    Icp,
}

impl TokenKind {
    /// Every recognized token, in display order
    pub const ALL: [TokenKind; 2] = [TokenKind::Test, TokenKind::Icp];

    /// Wire name of the token
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Test => "TEST",
            TokenKind::Icp => "ICP",
        }
    }

    /// Human-readable enumeration of the valid set (e.g., `"TEST or ICP"`)
    pub fn valid_set() -> String {
        let names: Vec<&str> = TokenKind::ALL.iter().map(|t| t.as_str()).collect();
        names.join(" or ")
    }

    /// Parse a wire name, enumerating the valid set on failure
    pub fn parse(input: &str) -> Result<Self, String> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == input)
            .ok_or_else(|| {
                format!(
                    "unrecognized token \"{}\": expected {}",
                    input,
                    TokenKind::valid_set()
                )
            })
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single purchasable line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketItem {
    /// Display name, 1-100 characters
    pub name: String,

    /// Optional description, 1-100 characters when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Strictly positive amount, denominated in `token`
    pub value: f64,

    /// Token the amount is denominated in
    pub token: TokenKind,
}

/// Recognized keys of a basket item object
const ITEM_KEYS: [&str; 4] = ["name", "description", "value", "token"];

/// Validate an untyped basket payload.
///
/// The input must be a JSON array; each element is checked against the item
/// rules and every violation across all items is collected into a single
/// error. `[]` validates to an empty basket.
pub fn validate_basket(raw: &Value) -> ValidationResult<Vec<BasketItem>> {
    let Some(entries) = raw.as_array() else {
        return Err(ValidationError::new(vec![Violation::schema(
            "",
            "basket must be an array of items",
        )]));
    };

    let mut violations = Vec::new();
    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if let Some(item) = validate_item(index, entry, &mut violations) {
            items.push(item);
        }
    }

    if violations.is_empty() {
        Ok(items)
    } else {
        Err(ValidationError::new(violations))
    }
}

fn text_len_ok(s: &str) -> bool {
    let len = s.chars().count();
    (TEXT_MIN_LEN..=TEXT_MAX_LEN).contains(&len)
}

fn validate_item(index: usize, entry: &Value, violations: &mut Vec<Violation>) -> Option<BasketItem> {
    let path = format!("[{}]", index);
    let Some(obj) = entry.as_object() else {
        violations.push(Violation::schema(path, "basket item must be an object"));
        return None;
    };

    for key in obj.keys() {
        if !ITEM_KEYS.contains(&key.as_str()) {
            violations.push(Violation::schema(
                format!("{}.{}", path, key),
                "unrecognized key",
            ));
        }
    }

    let before = violations.len();

    let name = match obj.get("name") {
        Some(Value::String(s)) if text_len_ok(s) => Some(s.clone()),
        Some(Value::String(_)) => {
            violations.push(Violation::schema(
                format!("{}.name", path),
                format!(
                    "name must be between {} and {} characters",
                    TEXT_MIN_LEN, TEXT_MAX_LEN
                ),
            ));
            None
        }
        Some(_) => {
            violations.push(Violation::schema(
                format!("{}.name", path),
                "name must be a string",
            ));
            None
        }
        None => {
            violations.push(Violation::schema(
                format!("{}.name", path),
                "missing required field",
            ));
            None
        }
    };

    let description = match obj.get("description") {
        None => None,
        Some(Value::String(s)) if text_len_ok(s) => Some(s.clone()),
        Some(Value::String(_)) => {
            violations.push(Violation::schema(
                format!("{}.description", path),
                format!(
                    "description must be between {} and {} characters",
                    TEXT_MIN_LEN, TEXT_MAX_LEN
                ),
            ));
            None
        }
        Some(_) => {
            violations.push(Violation::schema(
                format!("{}.description", path),
                "description must be a string",
            ));
            None
        }
    };

    let value = match obj.get("value") {
        Some(v) if v.is_number() => {
            let amount = v.as_f64().unwrap_or_default();
            if amount > 0.0 && amount.is_finite() {
                Some(amount)
            } else {
                violations.push(Violation::schema(
                    format!("{}.value", path),
                    "value must be a positive number",
                ));
                None
            }
        }
        Some(_) => {
            violations.push(Violation::schema(
                format!("{}.value", path),
                "value must be a number",
            ));
            None
        }
        None => {
            violations.push(Violation::schema(
                format!("{}.value", path),
                "missing required field",
            ));
            None
        }
    };

    let token = match obj.get("token") {
        Some(Value::String(s)) => match TokenKind::parse(s) {
            Ok(token) => Some(token),
            Err(message) => {
                violations.push(Violation::schema(format!("{}.token", path), message));
                None
            }
        },
        Some(_) => {
            violations.push(Violation::schema(
                format!("{}.token", path),
                "token must be a string",
            ));
            None
        }
        None => {
            violations.push(Violation::schema(
                format!("{}.token", path),
                "missing required field",
            ));
            None
        }
    };

    if violations.len() > before {
        return None;
    }
    Some(BasketItem {
        name: name?,
        description,
        value: value?,
        token: token?,
    })
}
