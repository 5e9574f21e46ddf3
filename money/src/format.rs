use crate::money::Money;
use core::fmt;

/// Renders the value as a human-readable currency and amount without loss
/// of precision, like `"EUR 1.30"`, `"JPY 990"`, or `"USD 0.0187"`. The
/// currencyless zero renders as `"0"`.
///
/// Trailing zeroes are trimmed, but never past the currency's minor-unit
/// boundary: one euro renders as `"EUR 1.00"`, never `"EUR 1"`. For
/// currencies without minor units the boundary sits at the decimal point,
/// which is trimmed along with the zeroes.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(ccy) = self.ccy else {
            return f.write_str("0");
        };

        let mut s = self.amt.to_string();
        let neg = s.starts_with('-');
        if neg {
            s.remove(0);
        }

        let units = ccy.units();
        let sf = usize::from(units.scaling_factor_exponent);
        if s.len() > sf {
            s.insert(s.len() - sf, '.');
        } else {
            s = format!("0.{}{}", "0".repeat(sf - s.len()), s);
        }

        let mut walkback =
            usize::from(units.scaling_factor_exponent.saturating_sub(units.minor_units_exponent));
        if units.minor_units_exponent == 0 {
            // No minor units: the decimal point itself is up for grabs.
            walkback += 1;
        }
        let bytes = s.as_bytes();
        let mut keep = s.len() - walkback;
        for i in 0..walkback {
            let c = bytes[s.len() - 1 - i];
            if c != b'0' && c != b'.' {
                keep = s.len() - i;
                break;
            }
        }

        write!(f, "{} ", ccy.symbol())?;
        if neg {
            f.write_str("-")?;
        }
        f.write_str(&s[..keep])
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Money")
            .field("amount", &self.amt)
            .field("currency", &self.ccy.map(|c| c.symbol()))
            .finish()
    }
}
