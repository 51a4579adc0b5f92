//! Named field validators.
//!
//! Each check is available both as a plain predicate and as a [`Validator`]
//! constant carrying its failure message.

use crate::rule::Validator;
use regex_lite::Regex;
use serde_json::Value;
use std::net::IpAddr;
use std::sync::OnceLock;

pub const GUID: Validator = Validator::new(is_guid, "Value is not a valid GUID");

pub const NOT_NULL_OR_WHITESPACE: Validator = Validator::new(
    is_not_null_or_whitespace,
    "Value cannot be undefined, null, empty, or only whitespace",
);

pub const CIDR: Validator = Validator::new(is_valid_cidr, "Value is not a valid CIDR block");

pub const IP_ADDRESS: Validator = Validator::new(is_valid_ip_address, "Value is not a valid IP address");

pub const FINITE_INTEGER: Validator = Validator::new(is_finite_integer, "Value must be an integer");

fn guid_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .expect("GUID pattern is valid")
    })
}

/// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, hex digits in either case.
pub fn is_guid(value: &Value) -> bool {
    value.as_str().is_some_and(|s| guid_regex().is_match(s))
}

pub fn is_not_null_or_whitespace(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

/// An IPv4 or IPv6 address followed by `/prefix` within the family's width.
pub fn is_valid_cidr(value: &Value) -> bool {
    let Some((address, prefix)) = value.as_str().and_then(|s| s.split_once('/')) else {
        return false;
    };
    let Ok(address) = address.parse::<IpAddr>() else {
        return false;
    };
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let max = match address {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };
    prefix.parse::<u8>().is_ok_and(|p| p <= max)
}

pub fn is_valid_ip_address(value: &Value) -> bool {
    value.as_str().is_some_and(|s| s.parse::<IpAddr>().is_ok())
}

/// A JSON number with no fractional part.
pub fn is_finite_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
        }
        _ => false,
    }
}
