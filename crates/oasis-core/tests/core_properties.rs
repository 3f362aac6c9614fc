//! Property tests for field reading, constraints and error ordering.

use proptest::prelude::*;
use serde_json::{Map, Value};

use oasis_core::fields::{float, integer};
use oasis_core::{bound_value, decimal_places, ErrorType, Loc, ObjectReader};

/// Distinct lowercase keys in generation order.
fn distinct_keys() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,8}", 1..8).prop_map(|keys| {
        let mut seen = Vec::new();
        for key in keys {
            if !seen.contains(&key) {
                seen.push(key);
            }
        }
        seen
    })
}

proptest! {
    /// `gt` accepts exactly the values above the bound and reports the bound in ctx.
    #[test]
    fn gt_accepts_iff_strictly_greater(value in -1.0e6f64..1.0e6, bound in -1.0e6f64..1.0e6) {
        let raw = Value::from(value);
        let result = float(Loc::body().child("v"), &raw).unwrap().gt(bound);
        if value > bound {
            prop_assert!(result.is_ok());
        } else {
            let entry = result.unwrap_err();
            prop_assert_eq!(entry.error_type, ErrorType::GreaterThan);
            prop_assert_eq!(entry.ctx_value("gt"), Some(&bound_value(bound)));
        }
    }

    /// `le` on integers agrees with `<=`.
    #[test]
    fn le_on_integers(value in any::<i32>(), bound in any::<i32>()) {
        let raw = Value::from(value);
        let result = integer(Loc::query().child("n"), &raw).unwrap().le(i64::from(bound));
        prop_assert_eq!(result.is_ok(), value <= bound);
    }

    /// Query strings holding integers read back as the same integer.
    #[test]
    fn integer_strings_are_read_laxly(n in any::<i64>()) {
        let raw = Value::String(n.to_string());
        let field = integer(Loc::query().child("page"), &raw).unwrap();
        prop_assert_eq!(field.into_inner(), n);
    }

    /// Values built from hundredths never exceed two decimal places.
    #[test]
    fn hundredths_have_at_most_two_decimals(hundredths in 1u32..1_000_000) {
        let value = f64::from(hundredths) / 100.0;
        prop_assert!(decimal_places(value) <= 2);
    }

    /// Undeclared keys are reported in the order the payload sent them.
    #[test]
    fn extra_keys_follow_payload_order(keys in distinct_keys()) {
        let map: Map<String, Value> = keys
            .iter()
            .map(|key| (key.clone(), Value::Bool(true)))
            .collect();
        let reader = ObjectReader::new(&map, Loc::body());
        let errors = reader.forbid_extra(&[]);
        let expected: Vec<String> = keys.iter().map(|key| format!("body.{key}")).collect();
        let actual: Vec<String> = errors.iter().map(|e| e.loc.to_string()).collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(errors.iter().all(|e| e.error_type == ErrorType::ExtraForbidden));
    }
}
