use std::fmt;

/// Amount of an ingredient as written in a recipe
///
/// Recipes carry either a plain number (`4`, `0.5`) or free text such as a
/// fraction (`"1/2"`). Both are stored as TEXT and only turned into a number
/// when a shopping list is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity {
    Amount(f64),
    Text(String),
}

impl Quantity {
    /// Rebuild a quantity from its stored TEXT column
    ///
    /// Values that are plain finite numbers come back as `Amount`, anything
    /// else is kept verbatim as `Text`.
    pub fn from_column(value: String) -> Self {
        match value.parse::<f64>() {
            Ok(amount) if amount.is_finite() => Quantity::Amount(amount),
            _ => Quantity::Text(value),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Amount(amount) if amount.is_infinite() => {
                f.write_str(if *amount > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Quantity::Amount(amount) => write!(f, "{}", amount),
            Quantity::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Quantity {
    fn from(amount: f64) -> Self {
        Quantity::Amount(amount)
    }
}

impl From<i32> for Quantity {
    fn from(amount: i32) -> Self {
        Quantity::Amount(f64::from(amount))
    }
}

impl From<&str> for Quantity {
    fn from(text: &str) -> Self {
        Quantity::Text(text.to_string())
    }
}

impl From<String> for Quantity {
    fn from(text: String) -> Self {
        Quantity::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4", Quantity::Amount(4.0))]
    #[case("0.25", Quantity::Amount(0.25))]
    #[case("1/2", Quantity::Text("1/2".to_string()))]
    #[case("a pinch", Quantity::Text("a pinch".to_string()))]
    #[case("inf", Quantity::Text("inf".to_string()))]
    #[case("Infinity", Quantity::Text("Infinity".to_string()))]
    #[case("", Quantity::Text(String::new()))]
    fn test_from_column(#[case] stored: &str, #[case] expected: Quantity) {
        assert_eq!(Quantity::from_column(stored.to_string()), expected);
    }

    #[test]
    fn test_display_matches_stored_form() {
        assert_eq!(Quantity::Amount(6.0).to_string(), "6");
        assert_eq!(Quantity::Amount(0.5).to_string(), "0.5");
        assert_eq!(Quantity::from("3/4").to_string(), "3/4");
        assert_eq!(Quantity::Amount(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Quantity::Amount(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_infinite_amount_survives_column_round_trip() {
        let stored = Quantity::Amount(f64::INFINITY).to_string();

        let reloaded = Quantity::from_column(stored);

        assert_eq!(crate::shopping::parse_quantity(&reloaded), f64::INFINITY);
    }
}
