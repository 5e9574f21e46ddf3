use crate::currency::Currency;
use crate::{Error, Result};
use fixdec::{Decimal, Rate};

// A rate of exactly ten, for moving amounts one decimal place at a time.
pub(crate) const TEN: Rate = Rate::from_ppm(10 * 1_000_000);

/// An amount of a currency.
///
/// The amount is an exact fixed-point decimal count of the currency's
/// minimum-representable-units, so `Money` is appropriate as a data type
/// for accounting. Values of different currencies are incompatible: the
/// `try_*` operations report the mismatch as an error, their infallible
/// siblings panic on it.
///
/// The [`Default`] value (also [`Money::ZERO`]) is a *currencyless zero*.
/// Unlike other values, it is compatible with values of all currencies
/// and behaves as if it represented zero units of the other operand's
/// currency.
#[derive(Clone, Copy, Default)]
pub struct Money {
    pub(crate) amt: Decimal,
    pub(crate) ccy: Option<&'static dyn Currency>,
}

impl Money {
    /// The currencyless zero.
    pub const ZERO: Money = Money {
        amt: Decimal::ZERO,
        ccy: None,
    };

    /// Returns the zero value of the given currency.
    pub fn zero(ccy: &'static dyn Currency) -> Money {
        Money {
            amt: Decimal::ZERO,
            ccy: Some(ccy),
        }
    }

    /// Returns a value of the given currency, taking the amount as a
    /// count of the currency's minimum-representable-units.
    pub fn new(amt: Decimal, ccy: &'static dyn Currency) -> Money {
        Money {
            amt,
            ccy: Some(ccy),
        }
    }

    /// Returns a value of the given currency, taking the amount as an
    /// integer count of the currency's minor units.
    ///
    /// Panics if the currency's minor units are finer than its scaling
    /// factor.
    pub fn from_minor_units(amt: i64, ccy: &'static dyn Currency) -> Money {
        let units = ccy.units();
        if units.minor_units_exponent > units.scaling_factor_exponent {
            panic!("currency minor units are finer than its scaling factor");
        }
        let steps = units.scaling_factor_exponent - units.minor_units_exponent;

        // Scale up one decimal place at a time, flushing into the decimal
        // whenever the accumulated rate approaches the 64-bit limit, so
        // arbitrarily large scaling factors stay in range.
        let mut d = Decimal::from_i64(amt);
        let mut sf: i64 = 1_000_000;
        for _ in 0..steps {
            sf *= 10;
            if sf > 1_000_000_000_000_000 {
                d = d * Rate::from_ppm(sf);
                sf = 1_000_000;
            }
        }
        Money {
            amt: d * Rate::from_ppm(sf),
            ccy: Some(ccy),
        }
    }

    /// Returns the amount as a decimal count of the currency's
    /// minimum-representable-units. To interpret the relationship between
    /// the minimum-representable-unit and major units, consult the
    /// currency's [`Units`](crate::currency::Units).
    pub fn amount(self) -> Decimal {
        self.amt
    }

    /// Returns the currency of this value, or `None` for the currencyless
    /// zero.
    pub fn currency(self) -> Option<&'static dyn Currency> {
        self.ccy
    }

    /// Returns true if this value is zero.
    pub fn is_zero(self) -> bool {
        self.amt == Decimal::ZERO
    }

    /// Returns true if the two values can be combined and compared, i.e.
    /// they have the same currency or at least one of them is the
    /// currencyless zero.
    pub fn comparable_to(self, other: Money) -> bool {
        compat(self.ccy, other.ccy).is_ok()
    }

    // Currencyless zeroes are "sticky": combining keeps whichever
    // currency is present.
    pub(crate) fn compat_ccy(self, other: Money) -> Option<&'static dyn Currency> {
        self.ccy.or(other.ccy)
    }
}

pub(crate) fn compat(
    a: Option<&'static dyn Currency>,
    b: Option<&'static dyn Currency>,
) -> Result<()> {
    // Currencyless zeroes are compatible with everything.
    let (Some(a), Some(b)) = (a, b) else {
        return Ok(());
    };
    // Fast path: the very same currency object.
    if core::ptr::addr_eq(a, b) {
        return Ok(());
    }
    // Slower path: distinct objects naming the same currency.
    let (a_sym, b_sym) = (a.symbol(), b.symbol());
    if a_sym == b_sym {
        return Ok(());
    }
    Err(Error::IncompatibleCurrencies(a_sym, b_sym))
}
