//! Natural ("logical") string ordering for sheet identifiers.
//!
//! Compares embedded digit runs by numeric value rather than character
//! by character, so `"A2" < "A10"`. This replaces the platform logical
//! comparison routine some hosts expose; the ordering here depends on
//! nothing but the two inputs and is identical on every platform.

use std::cmp::Ordering;

/// Compare two identifiers the way a human reads them.
///
/// Rules:
/// - a digit run compares against a digit run by numeric value: leading
///   zeros are skipped, then the longer stripped run is greater, then
///   the runs compare digit-wise (runs are never parsed into integers,
///   so arbitrarily long digit runs cannot overflow);
/// - everything else compares as case-sensitive `char`s;
/// - when every run ties numerically but the strings still differ
///   (zero-padding like `"a01"` vs `"a1"`), plain lexical order breaks
///   the tie, so `Equal` is returned only for equal strings.
///
/// The empty string orders before any non-empty string. The relation is
/// total and transitive: the run-wise comparison is a total preorder
/// whose ties are exactly the zero-padding equivalence classes, and the
/// lexical fallback refines those classes consistently.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let xs: Vec<char> = a.chars().collect();
    let ys: Vec<char> = b.chars().collect();
    let mut i = 0;
    let mut j = 0;

    while i < xs.len() && j < ys.len() {
        if xs[i].is_ascii_digit() && ys[j].is_ascii_digit() {
            let run_x = digit_run(&xs, &mut i);
            let run_y = digit_run(&ys, &mut j);
            match compare_digit_runs(run_x, run_y) {
                Ordering::Equal => {}
                other => return other,
            }
        } else {
            match xs[i].cmp(&ys[j]) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                other => return other,
            }
        }
    }

    match (xs.len() - i).cmp(&(ys.len() - j)) {
        // Fully tied run-wise; only zero-padding can differ now.
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

/// Advance past the digit run starting at `*pos` and return it.
fn digit_run<'a>(chars: &'a [char], pos: &mut usize) -> &'a [char] {
    let start = *pos;
    while *pos < chars.len() && chars[*pos].is_ascii_digit() {
        *pos += 1;
    }
    &chars[start..*pos]
}

/// Numeric comparison of two digit runs without converting to integers.
fn compare_digit_runs(x: &[char], y: &[char]) -> Ordering {
    let x = strip_leading_zeros(x);
    let y = strip_leading_zeros(y);
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

fn strip_leading_zeros(run: &[char]) -> &[char] {
    let first = run.iter().position(|c| *c != '0').unwrap_or(run.len());
    &run[first..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs_compare_by_value() {
        assert_eq!(natural_cmp("A2", "A10"), Ordering::Less);
        assert_eq!(natural_cmp("A10", "A2"), Ordering::Greater);
        assert_eq!(natural_cmp("A10", "A10"), Ordering::Equal);
        assert_eq!(natural_cmp("2", "10"), Ordering::Less);
    }

    #[test]
    fn empty_orders_first() {
        assert_eq!(natural_cmp("", "A1"), Ordering::Less);
        assert_eq!(natural_cmp("A1", ""), Ordering::Greater);
        assert_eq!(natural_cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn leading_zeros_tie_broken_lexically() {
        // 01 == 1 numerically; "01" sorts first lexically.
        assert_eq!(natural_cmp("A01", "A1"), Ordering::Less);
        assert_eq!(natural_cmp("A1", "A01"), Ordering::Greater);
        // The numeric difference still dominates padding.
        assert_eq!(natural_cmp("A02", "A1"), Ordering::Greater);
    }

    #[test]
    fn mixed_runs_fall_back_to_chars() {
        assert_eq!(natural_cmp("A1", "B1"), Ordering::Less);
        assert_eq!(natural_cmp("a1", "A1"), Ordering::Greater);
        // Digit vs letter at the same position compares as chars.
        assert_eq!(natural_cmp("1A", "AA"), Ordering::Less);
    }

    #[test]
    fn long_digit_runs_do_not_overflow() {
        let small = "S99999999999999999999999999999999999999";
        let big = "S100000000000000000000000000000000000000";
        assert_eq!(natural_cmp(small, big), Ordering::Less);
    }

    #[test]
    fn prefix_orders_before_extension() {
        assert_eq!(natural_cmp("A1", "A1a"), Ordering::Less);
        assert_eq!(natural_cmp("A", "A1"), Ordering::Less);
    }
}
