use crate::rate::RATE_BASE;
use crate::{Decimal, Rate};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// 128 × 64 → 192-bit unsigned multiply. Words are returned most
// significant first.
fn mul_192(d: u128, m: u64) -> (u64, u64, u64) {
    let lo = (d as u64 as u128) * m as u128;
    let hi = (d >> 64) * m as u128;
    let mid = (lo >> 64) + hi;
    ((mid >> 64) as u64, mid as u64, lo as u64)
}

// One step of the long division: hi:lo / n, requiring hi < n so the
// quotient fits a single word.
fn div_step(hi: u64, lo: u64, n: u64) -> (u64, u64) {
    let x = ((hi as u128) << 64) | lo as u128;
    ((x / n as u128) as u64, (x % n as u128) as u64)
}

// Divides the 192-bit value o3:o2:o1 by n, rounding half to even on the
// final remainder. None when the rounded quotient needs more than 128
// bits.
fn div_192_round(o3: u64, o2: u64, o1: u64, n: u64) -> Option<u128> {
    let (mut t3, r3) = div_step(0, o3, n);
    let (t2, r2) = div_step(r3, o2, n);
    let (t1, r1) = div_step(r2, o1, n);

    let mut q = ((t2 as u128) << 64) | t1 as u128;
    if 2 * r1 > n || (2 * r1 == n && (t1 & 1) == 1) {
        let (rounded, carry) = q.overflowing_add(1);
        q = rounded;
        if carry {
            t3 += 1;
        }
    }

    if t3 != 0 {
        return None;
    }
    Some(q)
}

// Re-enters the two's-complement domain, modulo 2^128.
fn with_sign(neg: bool, magnitude: u128) -> Decimal {
    Decimal(if neg {
        magnitude.wrapping_neg() as i128
    } else {
        magnitude as i128
    })
}

/// Wrapping 128-bit addition.
impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        Decimal(self.0.wrapping_add(rhs.0))
    }
}

/// Wrapping 128-bit subtraction.
impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        Decimal(self.0.wrapping_sub(rhs.0))
    }
}

/// Two's-complement negation.
impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal(self.0.wrapping_neg())
    }
}

impl AddAssign for Decimal {
    fn add_assign(&mut self, rhs: Decimal) {
        *self = *self + rhs;
    }
}

impl SubAssign for Decimal {
    fn sub_assign(&mut self, rhs: Decimal) {
        *self = *self - rhs;
    }
}

/// Scales the decimal by a rate: `(d × r) / 10^6`, rounding half to even.
///
/// Panics when the result does not fit in 128 bits.
impl Mul<Rate> for Decimal {
    type Output = Decimal;

    fn mul(self, rate: Rate) -> Decimal {
        // The unsigned long division below cannot cope with two's
        // complement operands, so normalize both signs up front and
        // re-apply them at the very end.
        let (d, d_neg) = self.sign_abs();
        let (r, r_neg) = rate.sign_abs();

        let (o3, o2, o1) = mul_192(d, r);
        let Some(q) = div_192_round(o3, o2, o1, RATE_BASE as u64) else {
            panic!("attempt to multiply with overflow");
        };

        with_sign(d_neg != r_neg, q)
    }
}

/// Divides the decimal by a rate: `(d × 10^6) / r`, rounding half to even.
///
/// Panics on division by zero, and when the result does not fit in 128
/// bits.
impl Div<Rate> for Decimal {
    type Output = Decimal;

    fn div(self, rate: Rate) -> Decimal {
        if rate.ppm() == 0 {
            panic!("attempt to divide by zero");
        }
        let (d, d_neg) = self.sign_abs();
        let (r, r_neg) = rate.sign_abs();

        // Scale up by the rate base before dividing; scaling afterwards
        // would have already dropped the digits the rounding step needs.
        let (o3, o2, o1) = mul_192(d, RATE_BASE as u64);
        let Some(q) = div_192_round(o3, o2, o1, r) else {
            panic!("attempt to divide with overflow");
        };

        with_sign(d_neg != r_neg, q)
    }
}

impl MulAssign<Rate> for Decimal {
    fn mul_assign(&mut self, rate: Rate) {
        *self = *self * rate;
    }
}

impl DivAssign<Rate> for Decimal {
    fn div_assign(&mut self, rate: Rate) {
        *self = *self / rate;
    }
}
