//! Email-syntax predicate for the merchant payment address.

use lazy_static::lazy_static;
use regex::Regex;

/// Fixed message reported when the address fails the email predicate
pub const EMAIL_FORMAT_MESSAGE: &str = "address must be an email-formatted account identifier";

lazy_static! {
    // local@host.tld with no whitespace; intentionally loose beyond that.
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

/// True if `input` satisfies the email-like address syntax
pub fn is_email_like(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}
