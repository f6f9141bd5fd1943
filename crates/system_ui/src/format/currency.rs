/// Price input accepted by the currency formatter.
#[derive(Debug, Clone, PartialEq)]
pub enum Price {
    /// Numeric amount formatted through a [`CurrencyFormat`].
    Amount(f64),
    /// Pre-formatted label passed through unchanged.
    Label(String),
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Self::Amount(amount)
    }
}

impl From<i32> for Price {
    fn from(amount: i32) -> Self {
        Self::Amount(f64::from(amount))
    }
}

impl From<u32> for Price {
    fn from(amount: u32) -> Self {
        Self::Amount(f64::from(amount))
    }
}

impl From<&str> for Price {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for Price {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Currency formatting strategy for numeric prices.
pub struct CurrencyFormat {
    /// Symbol placed before the amount (after any minus sign).
    pub symbol: &'static str,
    /// Separator between groups of three integer digits.
    pub grouping_separator: char,
    /// Separator between integer and fraction digits.
    pub decimal_separator: char,
    /// Fixed number of fraction digits; halves round up.
    pub fraction_digits: u8,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::USD
    }
}

impl CurrencyFormat {
    /// US-dollar conventions: `$1,234.50`.
    pub const USD: Self = Self {
        symbol: "$",
        grouping_separator: ',',
        decimal_separator: '.',
        fraction_digits: 2,
    };

    /// Formats a numeric amount.
    ///
    /// Negative amounts render as `-$1.50`; NaN and infinities render as `$NaN`, `$∞` and `-$∞`.
    pub fn format_amount(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{}NaN", self.symbol);
        }
        let sign = if amount.is_sign_negative() { "-" } else { "" };
        if amount.is_infinite() {
            return format!("{sign}{}∞", self.symbol);
        }

        let digits = usize::from(self.fraction_digits);
        let scaled = round_half_up_digits(amount.abs(), digits);
        let scaled = format!("{scaled:0>width$}", width = digits + 1);
        let (whole, fraction) = scaled.split_at(scaled.len() - digits);

        let mut out = String::with_capacity(scaled.len() + whole.len() / 3 + 4);
        out.push_str(sign);
        out.push_str(self.symbol);
        push_grouped(&mut out, whole, self.grouping_separator);
        if digits > 0 {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

/// Digits of `magnitude * 10^digits`, rounded half up on the shortest decimal form of the value.
///
/// Rounding the decimal text rather than the binary value makes `1.005` round to `1.01`.
fn round_half_up_digits(magnitude: f64, digits: usize) -> String {
    // `Display` for f64 yields the shortest round-trip form and never uses an exponent.
    let repr = magnitude.to_string();
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    if fraction.as_bytes().get(digits).is_some_and(|next| *next >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }
    kept.into_iter().map(char::from).collect()
}

fn push_grouped(out: &mut String, digits: &str, separator: char) {
    let len = digits.len();
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
}

/// Formats a price with an explicit strategy; labels pass through unchanged.
pub fn format_price_with(price: impl Into<Price>, format: &CurrencyFormat) -> String {
    match price.into() {
        Price::Amount(amount) => format.format_amount(amount),
        Price::Label(label) => label,
    }
}

/// Formats numeric prices as US dollars and returns pre-formatted labels unchanged.
pub fn format_currency_or_passthrough(price: impl Into<Price>) -> String {
    format_price_with(price, &CurrencyFormat::USD)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn numeric_prices_use_two_fraction_digits() {
        assert_eq!(format_currency_or_passthrough(29.99), "$29.99");
        assert_eq!(format_currency_or_passthrough(9), "$9.00");
        assert_eq!(format_currency_or_passthrough(0.5), "$0.50");
        assert_eq!(format_currency_or_passthrough(0.0), "$0.00");
    }

    #[test]
    fn string_prices_pass_through_unchanged() {
        assert_eq!(format_currency_or_passthrough("€19.99"), "€19.99");
        assert_eq!(format_currency_or_passthrough(String::from("Free")), "Free");
        assert_eq!(format_currency_or_passthrough(""), "");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_currency_or_passthrough(1000), "$1,000.00");
        assert_eq!(format_currency_or_passthrough(999.999), "$1,000.00");
        assert_eq!(format_currency_or_passthrough(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency_or_passthrough(123_456u32), "$123,456.00");
    }

    #[test]
    fn cents_round_half_up() {
        assert_eq!(format_currency_or_passthrough(0.125), "$0.13");
        assert_eq!(format_currency_or_passthrough(2.5e-3), "$0.00");
        assert_eq!(format_currency_or_passthrough(10.005_1), "$10.01");
    }

    #[test]
    fn half_cents_round_up_on_the_decimal_value() {
        assert_eq!(format_currency_or_passthrough(1.005), "$1.01");
        assert_eq!(format_currency_or_passthrough(2.675), "$2.68");
        assert_eq!(format_currency_or_passthrough(1.115), "$1.12");
        assert_eq!(format_currency_or_passthrough(8.345), "$8.35");
        assert_eq!(format_currency_or_passthrough(-1.005), "-$1.01");
        assert_eq!(format_currency_or_passthrough(9.995), "$10.00");
        assert_eq!(format_currency_or_passthrough(99_999.995), "$100,000.00");
        assert_eq!(format_currency_or_passthrough(0.004_999), "$0.00");
    }

    #[test]
    fn tiny_amounts_round_to_zero_or_one_cent() {
        assert_eq!(format_currency_or_passthrough(1e-10), "$0.00");
        assert_eq!(format_currency_or_passthrough(0.005), "$0.01");
    }

    #[test]
    fn negative_amounts_put_the_sign_before_the_symbol() {
        assert_eq!(format_currency_or_passthrough(-1.5), "-$1.50");
        assert_eq!(format_currency_or_passthrough(-1234), "-$1,234.00");
    }

    #[test]
    fn non_finite_amounts_do_not_panic() {
        assert_eq!(format_currency_or_passthrough(f64::NAN), "$NaN");
        assert_eq!(format_currency_or_passthrough(f64::INFINITY), "$∞");
        assert_eq!(format_currency_or_passthrough(f64::NEG_INFINITY), "-$∞");
    }

    #[test]
    fn huge_amounts_keep_integer_digits() {
        assert_eq!(format_currency_or_passthrough(1e16), "$10,000,000,000,000,000.00");
    }

    #[test]
    fn custom_strategy_changes_symbol_separators_and_precision() {
        let euro = CurrencyFormat {
            symbol: "€",
            grouping_separator: '.',
            decimal_separator: ',',
            fraction_digits: 2,
        };
        assert_eq!(format_price_with(1234.5, &euro), "€1.234,50");

        let yen = CurrencyFormat {
            symbol: "¥",
            fraction_digits: 0,
            ..CurrencyFormat::USD
        };
        assert_eq!(format_price_with(1234.5, &yen), "¥1,235");
        assert_eq!(format_price_with("¥500", &yen), "¥500");
    }

    #[test]
    fn default_strategy_is_usd() {
        assert_eq!(CurrencyFormat::default(), CurrencyFormat::USD);
    }
}
