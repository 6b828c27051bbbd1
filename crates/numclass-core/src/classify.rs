//! Arithmetic predicates used to classify an integer.
//!
//! All predicates operate on `|n|` (computed with [`i64::unsigned_abs`] so
//! that `i64::MIN` is handled) and never panic. Intermediate results use
//! checked arithmetic: a sum or power that would overflow `u64` is already
//! larger than any magnitude it is compared against, so overflow resolves
//! to `false`.
//!
//! # Zero and the Armstrong definition
//!
//! `0` is written with the single digit `0`, and `0^1 = 0`, so zero *is*
//! an Armstrong number. The same holds for every single-digit number.

use crate::types::Property;

/// Numeric base used for digit decomposition.
const RADIX: u64 = 10;

/// Return the decimal digits of `|n|`, most significant first.
///
/// Zero yields `[0]`. The sign is never part of the output.
pub fn digits(n: i64) -> Vec<u8> {
    let mut remaining = n.unsigned_abs();
    let mut out = Vec::new();
    loop {
        // A remainder modulo 10 always fits in a u8.
        out.push(u8::try_from(remaining % RADIX).unwrap_or(0));
        remaining /= RADIX;
        if remaining == 0 {
            break;
        }
    }
    out.reverse();
    out
}

/// Check whether `|n|` is prime.
///
/// Returns `false` for `|n| < 2`. Otherwise trial-divides by every integer
/// from 2 up to `floor(sqrt(|n|))` inclusive.
pub fn is_prime(n: i64) -> bool {
    let magnitude = n.unsigned_abs();
    if magnitude < 2 {
        return false;
    }

    let mut divisor: u64 = 2;
    while let Some(square) = divisor.checked_mul(divisor) {
        if square > magnitude {
            break;
        }
        if magnitude.checked_rem(divisor) == Some(0) {
            return false;
        }
        match divisor.checked_add(1) {
            Some(next) => divisor = next,
            None => break,
        }
    }
    true
}

/// Check whether `|n|` is a perfect number.
///
/// Returns `false` for `|n| < 2`. Proper divisors are enumerated in pairs
/// `(d, |n| / d)` for `d <= sqrt(|n|)`, so the cost is `O(sqrt(n))`. The
/// scan stops as soon as the running sum exceeds `|n|`.
pub fn is_perfect(n: i64) -> bool {
    let magnitude = n.unsigned_abs();
    if magnitude < 2 {
        return false;
    }

    // 1 divides everything and is always a proper divisor here.
    let mut sum: u64 = 1;
    let mut divisor: u64 = 2;
    while let Some(square) = divisor.checked_mul(divisor) {
        if square > magnitude {
            break;
        }
        if magnitude.checked_rem(divisor) == Some(0) {
            let paired = magnitude.checked_div(divisor).unwrap_or(0);
            let contribution = if paired == divisor {
                Some(divisor)
            } else {
                divisor.checked_add(paired)
            };
            match contribution.and_then(|c| sum.checked_add(c)) {
                Some(total) if total <= magnitude => sum = total,
                _ => return false,
            }
        }
        match divisor.checked_add(1) {
            Some(next) => divisor = next,
            None => break,
        }
    }
    sum == magnitude
}

/// Check whether `|n|` is an Armstrong (narcissistic) number.
///
/// With `k` the number of decimal digits of `|n|`, this holds when
/// `|n| == d1^k + d2^k + ... + dk^k`. Zero qualifies (see module docs).
pub fn is_armstrong(n: i64) -> bool {
    let digits = digits(n);
    let Ok(power) = u32::try_from(digits.len()) else {
        return false;
    };

    let total = digits.iter().try_fold(0_u64, |acc, &digit| {
        u64::from(digit)
            .checked_pow(power)
            .and_then(|term| acc.checked_add(term))
    });

    total == Some(n.unsigned_abs())
}

/// Sum the decimal digits of `|n|`, carrying the sign of `n`.
///
/// The sign applies to the aggregate, not to each digit:
/// `digit_sum(-123) == -6`.
pub fn digit_sum(n: i64) -> i64 {
    let sum: i64 = digits(n).into_iter().map(i64::from).sum();
    if n < 0 {
        sum.saturating_neg()
    } else {
        sum
    }
}

/// Parity tag of `|n|`.
pub const fn parity(n: i64) -> Property {
    if n.unsigned_abs() % 2 == 0 {
        Property::Even
    } else {
        Property::Odd
    }
}

/// Build the ordered property list for `n`.
///
/// The parity tag is always present. When `n` is an Armstrong number the
/// [`Property::Armstrong`] tag comes first, giving `["armstrong", "even"]`
/// or `["armstrong", "odd"]`; otherwise the list is `["even"]` or
/// `["odd"]`.
pub fn classify_properties(n: i64) -> Vec<Property> {
    let parity = parity(n);
    if is_armstrong(n) {
        vec![Property::Armstrong, parity]
    } else {
        vec![parity]
    }
}
