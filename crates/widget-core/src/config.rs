//! # Widget Configuration
//!
//! The aggregate checkout-widget configuration a merchant site supplies:
//! authentication provider, payment address, site domain, message callback,
//! and the notify target for reporting payment outcome. Validation runs
//! every check and collects every violation before failing, so the
//! integrator sees the complete list at once.

use crate::checkout::CallbackHandle;
use crate::domain::SiteDomain;
use crate::email::{is_email_like, EMAIL_FORMAT_MESSAGE};
use crate::error::{ValidationError, ValidationResult, Violation};
use crate::identity::is_valid_identity;
use crate::provider::Provider;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fixed message reported when the notify principal fails the round trip
pub const IDENTITY_FORMAT_MESSAGE: &str =
    "principalId does not round-trip through the canonical principal encoding";

/// Recognized keys of the configuration object.
///
/// The message callback cannot travel as data; it is passed to
/// [`validate_config`] as a typed handle, so a literal `callback` key in the
/// input is an unrecognized key like any other.
const CONFIG_KEYS: [&str; 4] = ["provider", "address", "domain", "notify"];

/// Recognized keys of the notify object
const NOTIFY_KEYS: [&str; 2] = ["principalId", "methodName"];

/// Where payment outcome is reported: a ledger actor and a method on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyTarget {
    /// Canonical principal text of the receiving actor
    pub principal_id: String,

    /// Method invoked on the actor, non-empty
    pub method_name: String,
}

/// A validated checkout-widget configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Authentication provider the merchant site uses
    pub provider: Provider,

    /// Merchant payment-destination address (email-formatted)
    pub address: String,

    /// Merchant site origin
    pub domain: SiteDomain,

    /// Host-page message callback, opaque
    pub callback: CallbackHandle,

    /// Payment-outcome notification target
    pub notify: NotifyTarget,
}

/// Validate an untyped configuration payload and attach the message
/// callback.
///
/// All checks run; every violation is collected into one error. On success
/// the returned [`Config`] is structurally identical to the input data.
pub fn validate_config(raw: &Value, callback: CallbackHandle) -> ValidationResult<Config> {
    let Some(obj) = raw.as_object() else {
        return Err(ValidationError::new(vec![Violation::schema(
            "",
            "configuration must be an object",
        )]));
    };

    let mut violations = Vec::new();

    for key in obj.keys() {
        if !CONFIG_KEYS.contains(&key.as_str()) {
            violations.push(Violation::schema(key, "unrecognized key"));
        }
    }

    let provider = require_str(obj, "provider", &mut violations).and_then(|s| {
        match Provider::parse(s) {
            Ok(provider) => Some(provider),
            Err(message) => {
                violations.push(Violation::schema("provider", message));
                None
            }
        }
    });

    let address = require_str(obj, "address", &mut violations).and_then(|s| {
        if is_email_like(s) {
            Some(s.to_string())
        } else {
            violations.push(Violation::schema("address", EMAIL_FORMAT_MESSAGE));
            None
        }
    });

    let domain = require_str(obj, "domain", &mut violations)
        .and_then(|s| SiteDomain::parse_at(s, "domain", &mut violations));

    let notify = match obj.get("notify") {
        Some(value) => validate_notify(value, &mut violations),
        None => {
            violations.push(Violation::schema("notify", "missing required field"));
            None
        }
    };

    match (provider, address, domain, notify) {
        (Some(provider), Some(address), Some(domain), Some(notify))
            if violations.is_empty() =>
        {
            Ok(Config {
                provider,
                address,
                domain,
                callback,
                notify,
            })
        }
        _ => Err(ValidationError::new(violations)),
    }
}

/// Validate the data-bearing fields of a configuration payload without a
/// callback. Used where the callback lives on the other side of a language
/// boundary (the WASM surface).
pub fn validate_config_fields(raw: &Value) -> ValidationResult<()> {
    validate_config(raw, CallbackHandle::new(|payload| payload)).map(|_| ())
}

fn require_str<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    violations: &mut Vec<Violation>,
) -> Option<&'a str> {
    match obj.get(key) {
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            violations.push(Violation::schema(key, "must be a string"));
            None
        }
        None => {
            violations.push(Violation::schema(key, "missing required field"));
            None
        }
    }
}

fn validate_notify(value: &Value, violations: &mut Vec<Violation>) -> Option<NotifyTarget> {
    let Some(obj) = value.as_object() else {
        violations.push(Violation::schema("notify", "must be an object"));
        return None;
    };

    for key in obj.keys() {
        if !NOTIFY_KEYS.contains(&key.as_str()) {
            violations.push(Violation::schema(
                format!("notify.{}", key),
                "unrecognized key",
            ));
        }
    }

    let before = violations.len();

    let principal_id = match obj.get("principalId") {
        Some(Value::String(s)) if is_valid_identity(s) => Some(s.clone()),
        Some(Value::String(_)) => {
            violations.push(Violation::identity(
                "notify.principalId",
                IDENTITY_FORMAT_MESSAGE,
            ));
            None
        }
        Some(_) => {
            violations.push(Violation::schema(
                "notify.principalId",
                "must be a string",
            ));
            None
        }
        None => {
            violations.push(Violation::schema(
                "notify.principalId",
                "missing required field",
            ));
            None
        }
    };

    let method_name = match obj.get("methodName") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::String(_)) => {
            violations.push(Violation::schema(
                "notify.methodName",
                "methodName must be a non-empty string",
            ));
            None
        }
        Some(_) => {
            violations.push(Violation::schema(
                "notify.methodName",
                "must be a string",
            ));
            None
        }
        None => {
            violations.push(Violation::schema(
                "notify.methodName",
                "missing required field",
            ));
            None
        }
    };

    if violations.len() > before {
        return None;
    }
    Some(NotifyTarget {
        principal_id: principal_id?,
        method_name: method_name?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViolationKind;
    use crate::identity::encode_identity;
    use serde_json::json;

    fn noop_callback() -> CallbackHandle {
        CallbackHandle::new(|payload| payload)
    }

    fn valid_config_value() -> Value {
        json!({
            "provider": "II",
            "address": "merchant@shop.example",
            "domain": "https://foo.ic0.app",
            "notify": {
                "principalId": encode_identity(&[0xab, 0xcd, 0x01]),
                "methodName": "on_payment"
            }
        })
    }

    #[test]
    fn test_valid_config_round_trips() {
        let raw = valid_config_value();
        let config = validate_config(&raw, noop_callback()).unwrap();

        assert_eq!(config.provider, Provider::InternetIdentity);
        assert_eq!(config.address, "merchant@shop.example");
        assert_eq!(config.domain.as_str(), "https://foo.ic0.app");
        assert_eq!(config.notify.principal_id, encode_identity(&[0xab, 0xcd, 0x01]));
        assert_eq!(config.notify.method_name, "on_payment");
    }

    #[test]
    fn test_localhost_dev_config_accepted() {
        let mut raw = valid_config_value();
        raw["domain"] = json!("http://localhost:3000");
        assert!(validate_config(&raw, noop_callback()).is_ok());
    }

    #[test]
    fn test_missing_fields_reported_by_exact_path() {
        for field in ["domain", "provider", "notify"] {
            let mut raw = valid_config_value();
            raw.as_object_mut().unwrap().remove(field);

            let err = validate_config(&raw, noop_callback()).unwrap_err();
            assert!(err.mentions(field), "expected violation at {}", field);
        }
    }

    #[test]
    fn test_unrecognized_key_rejected() {
        let mut raw = valid_config_value();
        raw["theme"] = json!("dark");

        let err = validate_config(&raw, noop_callback()).unwrap_err();
        assert!(err.mentions("theme"));
        assert!(err.violations[0].message.contains("unrecognized key"));
    }

    #[test]
    fn test_callback_key_in_payload_is_unrecognized() {
        let mut raw = valid_config_value();
        raw["callback"] = json!("function() {}");

        let err = validate_config(&raw, noop_callback()).unwrap_err();
        assert!(err.mentions("callback"));
    }

    #[test]
    fn test_insecure_domain_rejected() {
        let mut raw = valid_config_value();
        raw["domain"] = json!("http://example.com");

        let err = validate_config(&raw, noop_callback()).unwrap_err();
        assert!(err.mentions("domain"));
    }

    #[test]
    fn test_unknown_provider_enumerates_valid_set() {
        let mut raw = valid_config_value();
        raw["provider"] = json!("unknown-wallet");

        let err = validate_config(&raw, noop_callback()).unwrap_err();
        let violation = err
            .violations
            .iter()
            .find(|v| v.path == "provider")
            .unwrap();
        assert!(violation.message.contains("II or NFID"));
    }

    #[test]
    fn test_bad_address_uses_fixed_message() {
        let mut raw = valid_config_value();
        raw["address"] = json!("not-an-address");

        let err = validate_config(&raw, noop_callback()).unwrap_err();
        let violation = err.violations.iter().find(|v| v.path == "address").unwrap();
        assert_eq!(violation.message, EMAIL_FORMAT_MESSAGE);
    }

    #[test]
    fn test_bad_principal_is_identity_violation() {
        let mut raw = valid_config_value();
        raw["notify"]["principalId"] = json!("em77e-bvlzu-aa");

        let err = validate_config(&raw, noop_callback()).unwrap_err();
        assert!(err.has_identity_violation());
        let violation = err
            .violations
            .iter()
            .find(|v| v.path == "notify.principalId")
            .unwrap();
        assert_eq!(violation.kind, ViolationKind::IdentityFormat);
        assert_eq!(violation.message, IDENTITY_FORMAT_MESSAGE);
    }

    #[test]
    fn test_empty_method_name_rejected() {
        let mut raw = valid_config_value();
        raw["notify"]["methodName"] = json!("");

        let err = validate_config(&raw, noop_callback()).unwrap_err();
        assert!(err.mentions("notify.methodName"));
    }

    #[test]
    fn test_extra_notify_key_rejected() {
        let mut raw = valid_config_value();
        raw["notify"]["retries"] = json!(3);

        let err = validate_config(&raw, noop_callback()).unwrap_err();
        assert!(err.mentions("notify.retries"));
    }

    #[test]
    fn test_all_violations_collected() {
        let raw = json!({
            "provider": "unknown-wallet",
            "address": "nope",
            "domain": "http://example.com",
            "notify": {"principalId": "bad", "methodName": ""}
        });

        let err = validate_config(&raw, noop_callback()).unwrap_err();
        // provider + address + domain (scheme, suffix) + principal + method
        assert_eq!(err.violations.len(), 6);
    }

    #[test]
    fn test_non_object_input() {
        let err = validate_config(&json!(42), noop_callback()).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert!(err.violations[0].message.contains("object"));
    }

    #[test]
    fn test_config_fields_entry_point() {
        assert!(validate_config_fields(&valid_config_value()).is_ok());
        assert!(validate_config_fields(&json!({})).is_err());
    }
}
