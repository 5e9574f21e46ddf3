use crate::currency::Currency;
use crate::money::{Money, TEN};
use crate::{currency, Error, Result};
use fixdec::Decimal;

impl Money {
    /// Interprets the amount as a decimal string (using `"."` to separate
    /// the whole part from the fractional part, and without a sign,
    /// thousands separators, or other adornments) and the currency as an
    /// ISO 4217 currency code, and returns the Money representing that
    /// value.
    ///
    /// Fails with [`Error::NoSuchCurrency`] for an unknown currency code,
    /// with [`Error::TooPrecise`] when the fractional part is finer than
    /// the currency's scaling factor, and with a parse error for anything
    /// that is not a plain decimal number.
    pub fn parse(amount: &str, symbol: &str) -> Result<Money> {
        let ccy = currency::from_iso_symbol(symbol)?;
        let sf = usize::from(ccy.units().scaling_factor_exponent);

        if amount.is_empty() {
            return Err(Error::EmptyAmount);
        }

        // Classic multiply-by-ten-and-add.
        let mut d = Decimal::ZERO;
        let mut dot = None;
        for (i, chr) in amount.char_indices() {
            if let Some(start) = dot {
                if i - start >= sf {
                    return Err(Error::TooPrecise);
                }
            }

            if chr == '.' && i != 0 && dot.is_none() {
                dot = Some(i + 1);
                continue;
            }
            let Some(digit) = chr.to_digit(10) else {
                return Err(Error::BadChar { chr, pos: i });
            };
            d = d * TEN + Decimal::from_i64(i64::from(digit));
        }

        if dot == Some(amount.len()) {
            // A dot at the very end is malformed.
            return Err(Error::TrailingDot);
        }

        // Pad out to the scaling factor.
        let frac = amount.len() - dot.unwrap_or(amount.len());
        for _ in frac..sf {
            d = d * TEN;
        }

        Ok(Money {
            amt: d,
            ccy: Some(ccy),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Money};

    #[test]
    fn parse() {
        let cases = [
            ("1.23", "USD", "1230000"),
            ("1", "USD", "1000000"),
            ("0", "USD", "0"),
            ("0.000023", "USD", "23"),
            ("12.345678", "USD", "12345678"),
            ("123", "JPY", "123000000"),
            ("12.3", "JPY", "12300000"),
            ("00.5", "USD", "500000"),
        ];
        for (i, (amt, ccy, want)) in cases.into_iter().enumerate() {
            let money = Money::parse(amt, ccy).unwrap();
            assert_eq!(money.amount().to_string(), want, "case {i}");
            assert_eq!(money.currency().map(|c| c.symbol()), Some(ccy), "case {i}");
        }
    }

    #[test]
    fn parse_errors() {
        let cases = [
            ("12.3456789", "USD", Error::TooPrecise),
            (".123", "USD", Error::BadChar { chr: '.', pos: 0 }),
            ("123.", "USD", Error::TrailingDot),
            ("123.4.2", "USD", Error::BadChar { chr: '.', pos: 5 }),
            ("orange", "USD", Error::BadChar { chr: 'o', pos: 0 }),
            ("12,30", "USD", Error::BadChar { chr: ',', pos: 2 }),
            ("-1.23", "USD", Error::BadChar { chr: '-', pos: 0 }),
            ("", "USD", Error::EmptyAmount),
            ("1.23", "XYZ", Error::NoSuchCurrency),
            ("1.23", "bitcoin", Error::NoSuchCurrency),
        ];
        for (i, (amt, ccy, want)) in cases.into_iter().enumerate() {
            assert_eq!(Money::parse(amt, ccy).unwrap_err(), want, "case {i}");
        }
    }

    #[test]
    fn parsed_currency_is_compatible_with_constants() {
        let parsed = Money::parse("1.00", "USD").unwrap();
        let constant = Money::from_minor_units(100, &crate::currency::USD);
        assert!(parsed.eq(constant));
    }

    #[test]
    fn string_round_trip() {
        // Reparsing the amount part of the rendered string gives back the
        // same value.
        for (amt, ccy) in [
            ("1.23", "USD"),
            ("0.000023", "USD"),
            ("123", "JPY"),
            ("12.3456", "CAD"),
            ("0", "EUR"),
        ] {
            let money = Money::parse(amt, ccy).unwrap();
            let rendered = money.to_string();
            let (sym, rest) = rendered.split_once(' ').unwrap();
            assert_eq!(sym, ccy);
            assert!(Money::parse(rest, sym).unwrap().eq(money), "{rendered}");
        }
    }
}
