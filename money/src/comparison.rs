use crate::money::{compat, Money};
use crate::Result;

// Money deliberately does not implement PartialEq or PartialOrd: the
// standard traits have no way to report that two values are not of the
// same currency, and silently answering "not equal" would paper over
// exactly the bugs this type exists to catch.

impl Money {
    /// Returns true if `self` is less than `other`, or an error if the
    /// two values are incompatible.
    pub fn try_lt(self, other: Money) -> Result<bool> {
        compat(self.ccy, other.ccy)?;
        Ok(self.amt < other.amt)
    }

    /// Returns true if `self` is less than `other`; panics if the two
    /// values are incompatible.
    pub fn lt(self, other: Money) -> bool {
        match self.try_lt(other) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns true if `self` is less than or equal to `other`, or an
    /// error if the two values are incompatible.
    pub fn try_lte(self, other: Money) -> Result<bool> {
        compat(self.ccy, other.ccy)?;
        Ok(self.amt <= other.amt)
    }

    /// Returns true if `self` is less than or equal to `other`; panics if
    /// the two values are incompatible.
    pub fn lte(self, other: Money) -> bool {
        match self.try_lte(other) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns true if the two values are equal, or an error if they are
    /// incompatible.
    pub fn try_eq(self, other: Money) -> Result<bool> {
        compat(self.ccy, other.ccy)?;
        Ok(self.amt == other.amt)
    }

    /// Returns true if the two values are equal; panics if they are
    /// incompatible.
    pub fn eq(self, other: Money) -> bool {
        match self.try_eq(other) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns true if `self` is greater than or equal to `other`, or an
    /// error if the two values are incompatible.
    pub fn try_gte(self, other: Money) -> Result<bool> {
        compat(self.ccy, other.ccy)?;
        Ok(self.amt >= other.amt)
    }

    /// Returns true if `self` is greater than or equal to `other`; panics
    /// if the two values are incompatible.
    pub fn gte(self, other: Money) -> bool {
        match self.try_gte(other) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns true if `self` is greater than `other`, or an error if the
    /// two values are incompatible.
    pub fn try_gt(self, other: Money) -> Result<bool> {
        compat(self.ccy, other.ccy)?;
        Ok(self.amt > other.amt)
    }

    /// Returns true if `self` is greater than `other`; panics if the two
    /// values are incompatible.
    pub fn gt(self, other: Money) -> bool {
        match self.try_gt(other) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }
}
