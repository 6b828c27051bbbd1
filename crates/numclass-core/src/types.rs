//! Value types shared between the classifier and the HTTP layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classify::{classify_properties, digit_sum, is_perfect, is_prime};

/// A property tag attached to a classified number.
///
/// Serialized as the lowercase strings consumers match on:
/// `"armstrong"`, `"even"`, `"odd"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    /// The number equals the sum of its digits raised to the digit count.
    Armstrong,
    /// The magnitude is divisible by two.
    Even,
    /// The magnitude is not divisible by two.
    Odd,
}

impl Property {
    /// The wire spelling of this tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Armstrong => "armstrong",
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full classification of a single number, as returned to clients.
///
/// Built once per request by [`ClassificationResult::classify`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The input number, sign preserved.
    pub number: i64,
    /// Whether `|number|` is prime.
    pub is_prime: bool,
    /// Whether `|number|` is a perfect number.
    pub is_perfect: bool,
    /// Ordered property tags (Armstrong first when present, then parity).
    pub properties: Vec<Property>,
    /// Sum of the decimal digits of `|number|`, negated for negative input.
    pub digit_sum: i64,
    /// A human-readable fact about the number.
    pub fun_fact: String,
}

impl ClassificationResult {
    /// Classify `number` and attach the supplied fact.
    ///
    /// The fact is produced elsewhere (it may require network I/O); every
    /// other field is derived here from the pure predicates.
    pub fn classify(number: i64, fun_fact: impl Into<String>) -> Self {
        Self {
            number,
            is_prime: is_prime(number),
            is_perfect: is_perfect(number),
            properties: classify_properties(number),
            digit_sum: digit_sum(number),
            fun_fact: fun_fact.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_wire_spelling() {
        let json = serde_json::to_string(&[Property::Armstrong, Property::Even, Property::Odd]);
        assert_eq!(json.ok().as_deref(), Some(r#"["armstrong","even","odd"]"#));
        assert_eq!(Property::Armstrong.to_string(), "armstrong");
    }

    #[test]
    fn classify_armstrong_number() {
        let result = ClassificationResult::classify(371, "fact");
        assert_eq!(result.number, 371);
        assert!(!result.is_prime);
        assert!(!result.is_perfect);
        assert_eq!(result.properties, vec![Property::Armstrong, Property::Odd]);
        assert_eq!(result.digit_sum, 11);
        assert_eq!(result.fun_fact, "fact");
    }

    #[test]
    fn classify_negative_perfect_number() {
        let result = ClassificationResult::classify(-28, String::from("x"));
        assert!(result.is_perfect);
        assert_eq!(result.properties, vec![Property::Even]);
        assert_eq!(result.digit_sum, -10);
    }

    #[test]
    fn serialized_field_names() {
        let result = ClassificationResult::classify(7, "seven");
        let value = serde_json::to_value(&result).unwrap_or_default();
        assert_eq!(
            value,
            serde_json::json!({
                "number": 7,
                "is_prime": true,
                "is_perfect": false,
                "properties": ["armstrong", "odd"],
                "digit_sum": 7,
                "fun_fact": "seven",
            })
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let first = ClassificationResult::classify(9474, "f");
        let second = ClassificationResult::classify(9474, "f");
        assert_eq!(first, second);
    }
}
