use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{constants::ZERO_DECIMAL_CURRENCIES, errors::NotifierError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$10.00`
    Left,
    /// `$ 10.00`
    LeftSpace,
    /// `10.00$`
    Right,
    /// `10.00 $`
    RightSpace,
}

impl FromStr for SymbolPosition {
    type Err = NotifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "left_space" => Ok(Self::LeftSpace),
            "right" => Ok(Self::Right),
            "right_space" => Ok(Self::RightSpace),
            other => Err(NotifierError::Config(format!(
                "Unknown currency symbol position '{other}'."
            ))),
        }
    }
}

/// Converts Stripe minor-unit amounts and renders them for display.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    /// ISO 4217 code, lowercase as Stripe uses it (e.g. `usd`).
    pub currency: String,
    pub symbol: String,
    pub position: SymbolPosition,
    pub thousands_separator: String,
    pub decimal_separator: String,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self {
            currency: "usd".to_owned(),
            symbol: "$".to_owned(),
            position: SymbolPosition::Left,
            thousands_separator: ",".to_owned(),
            decimal_separator: ".".to_owned(),
        }
    }
}

impl CurrencyFormatter {
    /// Number of fractional digits in the major unit.
    pub fn decimals(&self) -> u32 {
        let currency = self.currency.to_lowercase();
        if ZERO_DECIMAL_CURRENCIES.contains(&currency.as_str()) {
            0
        } else {
            2
        }
    }

    pub fn minor_to_major(&self, amount: i64) -> Decimal {
        Decimal::new(amount, self.decimals())
    }

    pub fn format_currency(&self, amount: Decimal) -> String {
        let decimals = self.decimals();
        let mut magnitude = amount.abs();
        magnitude.rescale(decimals);
        let negative = amount.is_sign_negative() && !magnitude.is_zero();

        let divisor = 10u128.pow(decimals);
        let mantissa = magnitude.mantissa().unsigned_abs();
        let mut number =
            group_thousands(&(mantissa / divisor).to_string(), &self.thousands_separator);
        if decimals > 0 {
            number.push_str(&self.decimal_separator);
            number.push_str(&format!(
                "{:0width$}",
                mantissa % divisor,
                width = decimals as usize
            ));
        }

        let formatted = match self.position {
            SymbolPosition::Left => format!("{}{}", self.symbol, number),
            SymbolPosition::LeftSpace => format!("{} {}", self.symbol, number),
            SymbolPosition::Right => format!("{}{}", number, self.symbol),
            SymbolPosition::RightSpace => format!("{} {}", number, self.symbol),
        };
        if negative {
            format!("-{formatted}")
        } else {
            formatted
        }
    }

    /// Shorthand for `format_currency(minor_to_major(amount))`.
    pub fn format_minor(&self, amount: i64) -> String {
        self.format_currency(self.minor_to_major(amount))
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_to_major() {
        let f = CurrencyFormatter::default();
        assert_eq!(f.minor_to_major(2500), Decimal::new(25, 0));
        assert_eq!(f.minor_to_major(1), Decimal::new(1, 2));
    }

    #[test]
    fn test_format_default() {
        let f = CurrencyFormatter::default();
        assert_eq!(f.format_minor(2500), "$25.00");
        assert_eq!(f.format_minor(5), "$0.05");
        assert_eq!(f.format_minor(0), "$0.00");
        assert_eq!(f.format_minor(123456789), "$1,234,567.89");
        assert_eq!(f.format_minor(-1999), "-$19.99");
    }

    #[test]
    fn test_format_zero_decimal_currency() {
        let f = CurrencyFormatter {
            currency: "JPY".to_owned(),
            symbol: "¥".to_owned(),
            ..Default::default()
        };
        assert_eq!(f.decimals(), 0);
        assert_eq!(f.format_minor(1500), "¥1,500");
    }

    #[test]
    fn test_format_symbol_position_and_separators() {
        let f = CurrencyFormatter {
            currency: "eur".to_owned(),
            symbol: "€".to_owned(),
            position: SymbolPosition::RightSpace,
            thousands_separator: ".".to_owned(),
            decimal_separator: ",".to_owned(),
        };
        assert_eq!(f.format_minor(123450), "1.234,50 €");
    }

    #[test]
    fn test_format_rounds_extra_precision() {
        let f = CurrencyFormatter::default();
        assert_eq!(f.format_currency(Decimal::new(123456, 4)), "$12.35");
    }

    #[test]
    fn test_symbol_position_from_str() {
        assert_eq!(
            "left_space".parse::<SymbolPosition>().unwrap(),
            SymbolPosition::LeftSpace
        );
        assert!("middle".parse::<SymbolPosition>().is_err());
    }
}
