//! # widget-core
//!
//! Declarative validation for the checkout-widget configuration and basket
//! payload of a payment-integration library.
//!
//! This crate provides:
//! - `validate_config` / `validate_basket` — the two entry points
//! - `Config`, `NotifyTarget`, `SiteDomain`, `Provider` — configuration types
//! - `BasketItem`, `TokenKind` — basket line-item types
//! - `CallbackHandle`, `CheckoutAction`, `CheckoutContext` — opaque callables
//! - `ValidationError` — aggregate of every violated rule
//!
//! Validation is pure and synchronous: no I/O, no logging, no shared state.
//! Every check runs and every violation is collected before failing, so one
//! pass reports the complete list.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use widget_core::{validate_basket, validate_config, CallbackHandle, encode_identity};
//!
//! let config = json!({
//!     "provider": "II",
//!     "address": "merchant@shop.example",
//!     "domain": "https://foo.ic0.app",
//!     "notify": {
//!         "principalId": encode_identity(&[0xab, 0xcd, 0x01]),
//!         "methodName": "on_payment"
//!     }
//! });
//! let callback = CallbackHandle::new(|payload| payload);
//! let config = validate_config(&config, callback).unwrap();
//!
//! let basket = json!([{"name": "Widget", "value": 10, "token": "TEST"}]);
//! let items = validate_basket(&basket).unwrap();
//! assert_eq!(items.len(), 1);
//! ```

pub mod basket;
pub mod checkout;
pub mod config;
pub mod domain;
pub mod email;
pub mod error;
pub mod identity;
pub mod provider;

// Re-exports for convenience
pub use basket::{validate_basket, BasketItem, TokenKind, TEXT_MAX_LEN, TEXT_MIN_LEN};
pub use checkout::{CallbackHandle, CheckoutAction, CheckoutContext};
pub use config::{
    validate_config, validate_config_fields, Config, NotifyTarget, IDENTITY_FORMAT_MESSAGE,
};
pub use domain::{SiteDomain, DEV_HOST, DEV_PORT, PRODUCTION_SUFFIX};
pub use email::{is_email_like, EMAIL_FORMAT_MESSAGE};
pub use error::{ValidationError, ValidationResult, Violation, ViolationKind};
pub use identity::{encode_identity, is_valid_identity, MAX_IDENTITY_BODY_LEN};
pub use provider::Provider;
