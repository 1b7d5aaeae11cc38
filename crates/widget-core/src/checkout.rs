//! # Checkout Callables
//!
//! The opaque function contracts the widget hands back and forth with the
//! host page. Payload shapes are owned by the host's message-passing
//! boundary and are deliberately left unconstrained; the type system only
//! guarantees the values are callable.

use crate::basket::BasketItem;
use serde_json::Value;
use std::sync::Arc;

/// Shared handle to the integrator's message callback.
///
/// Invoked with a platform message-event payload and returning an arbitrary
/// value; neither side of the signature is validated beyond being a
/// callable.
#[derive(Clone)]
pub struct CallbackHandle(Arc<dyn Fn(Value) -> Value + Send + Sync>);

impl CallbackHandle {
    /// Wrap a callback function
    pub fn new(callback: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(callback))
    }

    /// Invoke the callback with a raw payload
    pub fn invoke(&self, payload: Value) -> Value {
        (self.0)(payload)
    }
}

impl std::fmt::Debug for CallbackHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CallbackHandle(..)")
    }
}

/// A checkout action: takes the buyer's basket, reports success or failure.
///
/// Declared here as a type contract only; constructing one is the host
/// page's job.
pub type CheckoutAction = Arc<dyn Fn(&[BasketItem]) -> bool + Send + Sync>;

/// Transient pairing of a rendering surface with an optional pre-filled
/// basket, used to parameterize creation of a [`CheckoutAction`].
///
/// The surface handle is opaque and never validated; the basket, when
/// present, is expected to have already passed
/// [`validate_basket`](crate::basket::validate_basket).
#[derive(Debug, Clone)]
pub struct CheckoutContext<S> {
    /// Opaque rendering-surface handle
    pub surface: S,

    /// Pre-validated basket, if the host supplied one
    pub basket: Option<Vec<BasketItem>>,
}

impl<S> CheckoutContext<S> {
    /// Context with no pre-filled basket
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            basket: None,
        }
    }

    /// Builder: attach a pre-validated basket
    pub fn with_basket(mut self, basket: Vec<BasketItem>) -> Self {
        self.basket = Some(basket);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket::TokenKind;
    use serde_json::json;

    #[test]
    fn test_callback_passthrough() {
        let handle = CallbackHandle::new(|payload| json!({ "echo": payload }));
        let out = handle.invoke(json!({"kind": "payment-complete"}));
        assert_eq!(out, json!({"echo": {"kind": "payment-complete"}}));
    }

    #[test]
    fn test_callback_handle_is_cloneable() {
        let handle = CallbackHandle::new(|_| Value::Null);
        let clone = handle.clone();
        assert_eq!(clone.invoke(json!(1)), Value::Null);
    }

    #[test]
    fn test_context_with_basket() {
        let item = BasketItem {
            name: "Widget".into(),
            description: None,
            value: 10.0,
            token: TokenKind::Test,
        };

        let ctx = CheckoutContext::new("surface-handle").with_basket(vec![item]);
        assert_eq!(ctx.surface, "surface-handle");
        assert_eq!(ctx.basket.as_ref().map(Vec::len), Some(1));

        let empty = CheckoutContext::new(());
        assert!(empty.basket.is_none());
    }

    #[test]
    fn test_checkout_action_contract() {
        let action: CheckoutAction = Arc::new(|items| !items.is_empty());
        assert!(!action(&[]));
    }
}
