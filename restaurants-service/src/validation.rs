//! Request payload validation
//!
//! Validators run over the raw `data` map of a request payload before any
//! typed conversion, so unknown keys and missing values surface with the
//! exact messages clients depend on.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Fields a mutating payload may carry
pub const VALID_PROPERTIES: [&str; 4] = [
    "supplier_name",
    "restaurant_name",
    "cuisine",
    "address",
];

/// Fields a create payload must carry, in reporting order
pub const REQUIRED_PROPERTIES: [&str; 3] = ["restaurant_name", "cuisine", "address"];

/// Reject payloads carrying keys outside the allow-list
///
/// Every offending key is named in a single message, in payload order.
pub fn require_known_fields(data: &Map<String, Value>) -> Result<()> {
    let invalid_fields: Vec<&str> = data
        .keys()
        .map(String::as_str)
        .filter(|field| !VALID_PROPERTIES.contains(field))
        .collect();

    if invalid_fields.is_empty() {
        Ok(())
    } else {
        Err(Error::BadRequest(format!(
            "Invalid field(s): {}",
            invalid_fields.join(", ")
        )))
    }
}

/// Require each named field to be present with a truthy value
///
/// Fails on the first miss in list order, naming only that field. The list
/// order therefore decides which single error is reported when several
/// fields are missing.
pub fn require_fields(data: &Map<String, Value>, properties: &[&str]) -> Result<()> {
    for property in properties {
        if !is_present(data.get(*property)) {
            return Err(Error::BadRequest(format!(
                "A '{property}' property is required."
            )));
        }
    }
    Ok(())
}

/// Truthiness over a JSON value: absent, null, false, numeric zero and the
/// empty string all count as missing; arrays and objects never do.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_known_fields_pass() {
        let payload = data(json!({
            "supplier_name": "Shady Grove Produce",
            "restaurant_name": "Mint",
            "cuisine": "Indian",
            "address": "1000 N High St",
        }));
        assert!(require_known_fields(&payload).is_ok());
    }

    #[test]
    fn test_empty_payload_passes_allow_list() {
        assert!(require_known_fields(&Map::new()).is_ok());
    }

    #[test]
    fn test_unknown_fields_all_named() {
        let payload = data(json!({
            "restaurant_name": "Mint",
            "rating": 5,
            "owner": "somebody",
        }));

        let err = require_known_fields(&payload).expect_err("unknown fields");
        let message = match err {
            Error::BadRequest(message) => message,
            other => panic!("expected BadRequest, got {other}"),
        };
        assert!(message.starts_with("Invalid field(s):"));
        assert!(message.contains("rating"));
        assert!(message.contains("owner"));
        assert!(!message.contains("restaurant_name"));
    }

    #[test]
    fn test_required_fields_pass() {
        let payload = data(json!({
            "restaurant_name": "Mint",
            "cuisine": "Indian",
            "address": "1000 N High St",
        }));
        assert!(require_fields(&payload, &REQUIRED_PROPERTIES).is_ok());
    }

    #[test]
    fn test_first_missing_field_reported() {
        // Both cuisine and address are missing; only the first in declared
        // order is named.
        let payload = data(json!({ "restaurant_name": "Mint" }));

        let err = require_fields(&payload, &REQUIRED_PROPERTIES).expect_err("missing fields");
        assert_eq!(
            err.to_string(),
            "Bad request: A 'cuisine' property is required."
        );
    }

    #[test]
    fn test_empty_payload_reports_first_declared_field() {
        let err = require_fields(&Map::new(), &REQUIRED_PROPERTIES).expect_err("missing fields");
        assert_eq!(
            err.to_string(),
            "Bad request: A 'restaurant_name' property is required."
        );
    }

    #[test]
    fn test_falsy_values_count_as_missing() {
        for falsy in [json!(null), json!(false), json!(0), json!(-0.0), json!("")] {
            let payload = data(json!({
                "restaurant_name": "Mint",
                "cuisine": falsy,
                "address": "1000 N High St",
            }));
            let err = require_fields(&payload, &REQUIRED_PROPERTIES).expect_err("falsy cuisine");
            assert_eq!(
                err.to_string(),
                "Bad request: A 'cuisine' property is required."
            );
        }
    }

    #[test]
    fn test_truthy_non_strings_pass_presence_check() {
        let payload = data(json!({
            "restaurant_name": "Mint",
            "cuisine": 42,
            "address": ["somewhere"],
        }));
        assert!(require_fields(&payload, &REQUIRED_PROPERTIES).is_ok());
    }
}
