//! Binary numeric operations, each in a named-function form and a closure form.
//!
//! The named forms are ordinary items that can be referenced by path. The
//! closure forms are values produced on demand, the way an arrow function is
//! bound to a variable rather than declared.

use std::ops::{Add, Mul};

/// Sum of `a` and `b`.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Addition bound as a block-bodied closure value instead of declared as an item.
pub fn arrow_add<T: Add<Output = T>>() -> impl Fn(T, T) -> T {
    |a, b| {
        a + b
    }
}

/// Product of `a` and `b`.
pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

/// Multiplication written as an expression-bodied closure.
pub fn implicit_arrow_multiply<T: Mul<Output = T>>() -> impl Fn(T, T) -> T {
    |a, b| a * b
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [i64; 9] = [i64::MIN / 2, -1_000, -7, -1, 0, 1, 3, 42, i64::MAX / 2];

    #[test]
    fn add_small_numbers() {
        assert_eq!(add(1, 2), 3);
        assert_eq!(arrow_add()(3, 4), 7);
    }

    #[test]
    fn add_forms_agree() {
        let arrow = arrow_add();
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(add(a, b), arrow(a, b), "add({a}, {b})");
            }
        }
    }

    #[test]
    fn add_forms_agree_on_floats() {
        let arrow = arrow_add();
        for (a, b) in [(0.5, 0.25), (-1.5, 1.5), (1e300, 1e300)] {
            assert_eq!(add(a, b), arrow(a, b));
        }
    }

    #[test]
    fn multiply_small_numbers() {
        assert_eq!(multiply(4, 5), 20);
        assert_eq!(implicit_arrow_multiply()(4, 5), 20);
    }

    #[test]
    fn multiply_forms_agree() {
        let arrow = implicit_arrow_multiply();
        for a in [-1_000i64, -1, 0, 1, 7, 1_000] {
            for b in [-1_000i64, -1, 0, 1, 7, 1_000] {
                assert_eq!(multiply(a, b), arrow(a, b), "multiply({a}, {b})");
            }
        }
    }

    #[test]
    fn named_forms_are_items() {
        let named_add: fn(i32, i32) -> i32 = add;
        let named_multiply: fn(i32, i32) -> i32 = multiply;
        assert_eq!(named_add(2, 2), 4);
        assert_eq!(named_multiply(3, 3), 9);
    }
}
