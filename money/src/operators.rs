use crate::money::{compat, Money};
use crate::Result;
use core::ops::{Add, Div, Mul, Neg, Sub};
use fixdec::Rate;

impl Money {
    /// Adds the two values and returns the result, or an error if the two
    /// values are incompatible.
    pub fn try_add(self, other: Money) -> Result<Money> {
        compat(self.ccy, other.ccy)?;
        Ok(Money {
            amt: self.amt + other.amt,
            ccy: self.compat_ccy(other),
        })
    }

    /// Subtracts the second value from the first and returns the result,
    /// or an error if the two values are incompatible.
    pub fn try_sub(self, other: Money) -> Result<Money> {
        compat(self.ccy, other.ccy)?;
        Ok(Money {
            amt: self.amt - other.amt,
            ccy: self.compat_ccy(other),
        })
    }
}

/// Adds the two values; panics if they are incompatible.
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        match self.try_add(rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Subtracts the second value from the first; panics if they are
/// incompatible.
impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        match self.try_sub(rhs) {
            Ok(difference) => difference,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Negates the amount, keeping the currency.
impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money {
            amt: -self.amt,
            ccy: self.ccy,
        }
    }
}

/// Scales the amount by the given rate, keeping the currency.
impl Mul<Rate> for Money {
    type Output = Money;

    fn mul(self, rate: Rate) -> Money {
        Money {
            amt: self.amt * rate,
            ccy: self.ccy,
        }
    }
}

/// Divides the amount by the given rate, keeping the currency.
impl Div<Rate> for Money {
    type Output = Money;

    fn div(self, rate: Rate) -> Money {
        Money {
            amt: self.amt / rate,
            ccy: self.ccy,
        }
    }
}
