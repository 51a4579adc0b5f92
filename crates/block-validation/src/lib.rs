//! Deep-merge and rule-table validation for building block settings.
//!
//! A building block validates a settings object against a [`RuleTable`],
//! collecting every violation before reporting, and layers user settings
//! over defaults with [`merge`].

mod merge;
mod result;
mod rule;
pub mod validators;

pub use merge::{deep_merge, merge, merge_layers};
pub use result::{ValidationErrors, ValidationFailure};
pub use rule::{Rule, RuleTable, Validator};

use serde_json::Value;

/// Validate `settings` against `table`, returning every violation in table order.
///
/// Absent fields are treated as null. Nested tables report their fields as
/// dot-joined paths (`bgpSettings.asn`), array elements as `field[i]`.
pub fn validate(settings: &Value, table: &RuleTable) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    validate_table(settings, table, "", &mut errors);
    errors
}

fn validate_table(settings: &Value, table: &RuleTable, prefix: &str, errors: &mut ValidationErrors) {
    for (field, rule) in table.iter() {
        let value = settings.get(field).unwrap_or(&Value::Null);
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        validate_rule(value, rule, &path, errors);
    }
}

fn validate_rule(value: &Value, rule: &Rule, path: &str, errors: &mut ValidationErrors) {
    match rule {
        Rule::Always(true) => {}
        Rule::Always(false) => errors.push(path, "Value is not allowed"),
        Rule::Check(validator) => {
            if !validator.check(value) {
                errors.push(path, validator.message);
            }
        }
        // Non-objects have no fields, so every nested field reads as null.
        Rule::Nested(table) => validate_table(value, table, path, errors),
        Rule::Optional(inner) => {
            if !value.is_null() {
                validate_rule(value, inner, path, errors);
            }
        }
        Rule::Each(inner) => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    validate_rule(item, inner, &format!("{}[{}]", path, i), errors);
                }
            }
            None => errors.push(path, "Value must be an array"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(errors: &ValidationErrors) -> Vec<&str> {
        errors.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_all_violations_collected_in_table_order() {
        let table = RuleTable::new()
            .field("name", validators::NOT_NULL_OR_WHITESPACE)
            .field("id", validators::GUID)
            .field("ip", validators::IP_ADDRESS);

        let errors = validate(&json!({"name": " ", "id": "nope", "ip": "10.0.0.1"}), &table);

        assert_eq!(names(&errors), vec!["name", "id"]);
    }

    #[test]
    fn test_absent_field_treated_as_null() {
        let table = RuleTable::new().field("name", validators::NOT_NULL_OR_WHITESPACE);
        let errors = validate(&json!({}), &table);
        assert_eq!(names(&errors), vec!["name"]);
    }

    #[test]
    fn test_optional_skips_null_and_absent() {
        let table = RuleTable::new()
            .field("a", Rule::optional(validators::FINITE_INTEGER))
            .field("b", Rule::optional(validators::FINITE_INTEGER));

        assert!(validate(&json!({"a": null}), &table).is_empty());

        let errors = validate(&json!({"a": "x", "b": 3}), &table);
        assert_eq!(names(&errors), vec!["a"]);
    }

    #[test]
    fn test_nested_paths_are_dot_joined() {
        let inner = RuleTable::new().field("asn", Rule::optional(validators::FINITE_INTEGER));
        let table = RuleTable::new().field("bgp", Rule::optional(Rule::Nested(inner)));

        let errors = validate(&json!({"bgp": {"asn": "abc"}}), &table);
        assert_eq!(names(&errors), vec!["bgp.asn"]);
        assert_eq!(errors.iter().next().unwrap().message, "Value must be an integer");
    }

    #[test]
    fn test_nested_on_non_object_reads_fields_as_absent() {
        let inner = RuleTable::new().field("asn", Rule::optional(validators::FINITE_INTEGER));
        let table = RuleTable::new().field("bgp", Rule::Nested(inner));

        assert!(validate(&json!({"bgp": "text"}), &table).is_empty());
    }

    #[test]
    fn test_each_reports_element_index() {
        let table = RuleTable::new().field("prefixes", Rule::each(validators::CIDR));

        let errors = validate(&json!({"prefixes": ["10.0.0.0/8", "bad", "fe80::/10"]}), &table);
        assert_eq!(names(&errors), vec!["prefixes[1]"]);

        let errors = validate(&json!({"prefixes": "10.0.0.0/8"}), &table);
        assert_eq!(names(&errors), vec!["prefixes"]);

        assert!(validate(&json!({"prefixes": []}), &table).is_empty());
    }

    #[test]
    fn test_always() {
        let table = RuleTable::new()
            .field("ok", Rule::Always(true))
            .field("never", Rule::Always(false));

        let errors = validate(&json!({}), &table);
        assert_eq!(names(&errors), vec!["never"]);
    }
}
