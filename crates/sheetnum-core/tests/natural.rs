//! Property tests for the natural identifier ordering.

use std::cmp::Ordering;

use proptest::prelude::*;
use sheetnum_core::natural_cmp;

/// Identifier-shaped strings: letters, digits, and a few separators.
fn identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{0,12}").expect("valid regex")
}

proptest! {
    #[test]
    fn reflexive(a in identifier()) {
        prop_assert_eq!(natural_cmp(&a, &a), Ordering::Equal);
    }

    #[test]
    fn antisymmetric(a in identifier(), b in identifier()) {
        prop_assert_eq!(natural_cmp(&a, &b), natural_cmp(&b, &a).reverse());
    }

    #[test]
    fn consistent_with_equality(a in identifier(), b in identifier()) {
        prop_assert_eq!(natural_cmp(&a, &b) == Ordering::Equal, a == b);
    }

    #[test]
    fn transitive(a in identifier(), b in identifier(), c in identifier()) {
        let mut sorted = [a, b, c];
        sorted.sort_by(|x, y| natural_cmp(x, y));
        // A lawful total order sorts any triple so adjacent pairs agree.
        prop_assert_ne!(natural_cmp(&sorted[0], &sorted[1]), Ordering::Greater);
        prop_assert_ne!(natural_cmp(&sorted[1], &sorted[2]), Ordering::Greater);
        prop_assert_ne!(natural_cmp(&sorted[0], &sorted[2]), Ordering::Greater);
    }

    #[test]
    fn agrees_with_numeric_value_on_pure_numbers(x in 0u64..1_000_000, y in 0u64..1_000_000) {
        let expected = x.cmp(&y);
        prop_assert_eq!(natural_cmp(&x.to_string(), &y.to_string()), expected);
    }

    #[test]
    fn shared_prefix_then_numbers_orders_numerically(
        prefix in "[A-Za-z]{1,4}",
        x in 0u32..10_000,
        y in 0u32..10_000,
    ) {
        let a = format!("{prefix}{x}");
        let b = format!("{prefix}{y}");
        prop_assert_eq!(natural_cmp(&a, &b), x.cmp(&y));
    }

    #[test]
    fn empty_orders_before_everything(a in identifier()) {
        if a.is_empty() {
            prop_assert_eq!(natural_cmp("", &a), Ordering::Equal);
        } else {
            prop_assert_eq!(natural_cmp("", &a), Ordering::Less);
        }
    }
}
