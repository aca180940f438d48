//! Localized price strings.
//!
//! Catalog prices arrive as display strings such as `"R$ 49,90"`. The
//! parser turns them into [`Money`] and back.
//!
//! Failure policy: [`PriceParser::parse`] fails closed. A string that does
//! not match the configured format counts as zero, and a warning is
//! logged, so cart totals are always a defined amount. Callers that want
//! to reject bad data use [`PriceParser::try_parse`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CommerceError;
use crate::money::{Money, CENTS_PER_UNIT};

/// Currency display format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceFormat {
    /// Currency prefix, e.g. `"R$"`. Optional when parsing.
    pub prefix: String,
    /// Decimal separator.
    pub decimal_separator: char,
    /// Digit grouping separator accepted when parsing. Never emitted.
    pub thousands_separator: Option<char>,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            prefix: "R$".to_string(),
            decimal_separator: ',',
            thousands_separator: Some('.'),
        }
    }
}

/// Converts between price display strings and [`Money`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceParser {
    format: PriceFormat,
}

impl PriceParser {
    /// Create a parser for the given format.
    pub fn new(format: PriceFormat) -> Self {
        Self { format }
    }

    /// The display format in use.
    pub fn price_format(&self) -> &PriceFormat {
        &self.format
    }

    /// Parse a display string, treating malformed input as zero.
    pub fn parse(&self, price: &str) -> Money {
        match self.try_parse(price) {
            Ok(money) => money,
            Err(err) => {
                warn!(price, error = %err, "unparseable price counted as zero");
                Money::zero()
            }
        }
    }

    /// Parse a display string into a decimal amount.
    pub fn parse_amount(&self, price: &str) -> f64 {
        self.parse(price).to_decimal()
    }

    /// Parse a display string, surfacing malformed input as an error.
    ///
    /// Accepts an optional prefix, an optional `-`, digits with optional
    /// three-digit groups, and an optional decimal part. Extra decimal
    /// places are rounded half-up to cents.
    pub fn try_parse(&self, price: &str) -> Result<Money, CommerceError> {
        let malformed = || CommerceError::MalformedPrice(price.to_string());

        let mut s = price.trim();
        if !self.format.prefix.is_empty() {
            if let Some(rest) = s.strip_prefix(self.format.prefix.as_str()) {
                s = rest.trim_start();
            }
        }

        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_part, frac_part) = match s.split_once(self.format.decimal_separator) {
            Some((int_part, frac)) => (int_part, Some(frac)),
            None => (s, None),
        };

        let units = self.parse_integer_part(int_part).ok_or_else(malformed)?;
        let cents = match frac_part {
            Some(frac) => parse_fraction(frac).ok_or_else(malformed)?,
            None => 0,
        };

        let total = units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(malformed)?;

        Ok(Money::new(if negative { -total } else { total }))
    }

    /// Format an amount, e.g. `"R$ 49,90"`.
    pub fn format(&self, money: Money) -> String {
        let sign = if money.is_negative() { "-" } else { "" };
        let abs = money.amount_cents.unsigned_abs();
        let cents_per_unit = CENTS_PER_UNIT as u64;
        let body = format!(
            "{}{}{}{:02}",
            sign,
            abs / cents_per_unit,
            self.format.decimal_separator,
            abs % cents_per_unit
        );

        if self.format.prefix.is_empty() {
            body
        } else {
            format!("{} {}", self.format.prefix, body)
        }
    }

    /// Format a decimal amount, rounding to two places.
    pub fn format_amount(&self, amount: f64) -> String {
        self.format(Money::from_decimal(amount))
    }

    fn parse_integer_part(&self, s: &str) -> Option<i64> {
        if s.is_empty() {
            return None;
        }

        match self.format.thousands_separator {
            Some(sep) if s.contains(sep) => {
                let mut groups = s.split(sep);
                let head = groups.next()?;
                if head.is_empty() || head.len() > 3 {
                    return None;
                }
                let mut value = parse_digits(head)?;
                for group in groups {
                    if group.len() != 3 {
                        return None;
                    }
                    value = value.checked_mul(1000)?.checked_add(parse_digits(group)?)?;
                }
                Some(value)
            }
            _ => parse_digits(s),
        }
    }
}

/// Parse a non-empty run of ASCII digits.
fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() {
        return None;
    }
    s.chars().try_fold(0i64, |acc, c| {
        let digit = c.to_digit(10)? as i64;
        acc.checked_mul(10)?.checked_add(digit)
    })
}

/// Parse the digits after the decimal separator into cents.
fn parse_fraction(s: &str) -> Option<i64> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let digits: Vec<i64> = s.bytes().map(|b| (b - b'0') as i64).collect();
    let tens = digits[0];
    let ones = digits.get(1).copied().unwrap_or(0);
    let round_up = digits.get(2).is_some_and(|d| *d >= 5);

    Some(tens * 10 + ones + i64::from(round_up))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_prices() {
        let parser = PriceParser::default();
        assert_eq!(parser.parse("R$ 49,90"), Money::new(4990));
        assert_eq!(parser.parse("R$ 54,90"), Money::new(5490));
        assert_eq!(parser.parse("R$ 1.000,00"), Money::new(100_000));
        assert_eq!(parser.parse("R$49,9"), Money::new(4990));
        assert_eq!(parser.parse("12"), Money::new(1200));
    }

    #[test]
    fn test_parse_amount() {
        let parser = PriceParser::default();
        assert!((parser.parse_amount("R$ 49,90") - 49.90).abs() < 1e-9);
    }

    #[test]
    fn test_extra_decimals_round_half_up() {
        let parser = PriceParser::default();
        assert_eq!(parser.parse("R$ 1,005"), Money::new(101));
        assert_eq!(parser.parse("R$ 1,004"), Money::new(100));
        assert_eq!(parser.parse("R$ 0,995"), Money::new(100));
    }

    #[test]
    fn test_malformed_prices_fail_closed() {
        let parser = PriceParser::default();
        for bad in ["", "R$", "R$ abc", "R$ 49.90,", "US$ 10,00", "R$ 1.00,00", ",50", "49,9x"] {
            assert_eq!(parser.parse(bad), Money::zero(), "input {:?}", bad);
        }
    }

    #[test]
    fn test_malformed_price_is_logged() {
        use std::io;
        use std::sync::{Arc, Mutex};

        struct Sink(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Sink {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let logs = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&logs);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || Sink(Arc::clone(&writer)))
            .with_ansi(false)
            .finish();

        let parsed = tracing::subscriber::with_default(subscriber, || {
            PriceParser::default().parse("R$ abc")
        });

        assert_eq!(parsed, Money::zero());
        let text = String::from_utf8(logs.lock().unwrap().clone()).unwrap();
        assert!(text.contains("WARN"), "{}", text);
        assert!(text.contains("R$ abc"), "{}", text);
        assert!(text.contains("unparseable price counted as zero"), "{}", text);
    }

    #[test]
    fn test_malformed_prices_are_errors_in_strict_mode() {
        let parser = PriceParser::default();
        assert_eq!(
            parser.try_parse("R$ abc"),
            Err(CommerceError::MalformedPrice("R$ abc".to_string()))
        );
        assert!(parser.try_parse("R$ 49,90").is_ok());
    }

    #[test]
    fn test_format() {
        let parser = PriceParser::default();
        assert_eq!(parser.format(Money::new(4990)), "R$ 49,90");
        assert_eq!(parser.format(Money::new(0)), "R$ 0,00");
        assert_eq!(parser.format(Money::new(100_000)), "R$ 1000,00");
        assert_eq!(parser.format(Money::new(-505)), "R$ -5,05");
        assert_eq!(parser.format_amount(99.8), "R$ 99,80");
    }

    #[test]
    fn test_round_trip() {
        let parser = PriceParser::default();
        for amount in [0.0, 4.90, 49.90, 1000.00, 0.01, 123456.78] {
            let back = parser.parse_amount(&parser.format_amount(amount));
            assert!((back - amount).abs() < 0.01, "amount {}", amount);
        }
        for cents in [-1, 0, 7, 4990, 99_999_999] {
            let money = Money::new(cents);
            assert_eq!(parser.parse(&parser.format(money)), money);
        }
    }

    #[test]
    fn test_custom_format() {
        let parser = PriceParser::new(PriceFormat {
            prefix: "$".to_string(),
            decimal_separator: '.',
            thousands_separator: Some(','),
        });
        assert_eq!(parser.parse("$ 1,234.50"), Money::new(123_450));
        assert_eq!(parser.format(Money::new(123_450)), "$ 1234.50");
    }

    #[test]
    fn test_format_without_prefix() {
        let parser = PriceParser::new(PriceFormat {
            prefix: String::new(),
            ..PriceFormat::default()
        });
        assert_eq!(parser.format(Money::new(4990)), "49,90");
        assert_eq!(parser.parse("49,90"), Money::new(4990));
    }
}
