use crate::{Decimal, Error};
use core::fmt;
use core::str::{self, FromStr};

/// Exact minimal-width base-10 rendering, with a leading `-` for negative
/// values and `"0"` for zero. Every representable value round-trips
/// through [`FromStr`].
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (mut v, neg) = self.sign_abs();
        if v == 0 {
            return f.write_str("0");
        }

        // 2^127 is 39 digits; four 10-digit chunks cover it. Peeling ten
        // digits per division keeps the number of 128-bit divisions down.
        let mut buf = [b'0'; 40];
        let mut k = buf.len();
        while v != 0 {
            let mut rem = (v % 10_000_000_000) as u64;
            v /= 10_000_000_000;
            for _ in 0..10 {
                k -= 1;
                buf[k] = b'0' + (rem % 10) as u8;
                rem /= 10;
            }
        }
        while buf[k] == b'0' {
            k += 1;
        }

        if neg {
            f.write_str("-")?;
        }
        f.write_str(str::from_utf8(&buf[k..]).map_err(|_| fmt::Error)?)
    }
}

/// Renders the two 64-bit halves in hex, which is how the arithmetic test
/// vectors are written.
impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hi, lo) = self.to_parts();
        write!(f, "Decimal(0x{hi:016x}, 0x{lo:016x})")
    }
}

/// Parses an optionally negated decimal integer string: `-? digits`.
///
/// The exact inverse of [`Display`](fmt::Display): any rendered value
/// parses back to itself, and values outside the 128-bit range are
/// rejected rather than wrapped.
impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let (digits, neg) = match s.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        if digits.is_empty() {
            return Err(Error::Empty);
        }

        let mut magnitude: u128 = 0;
        for chr in digits.chars() {
            let Some(digit) = chr.to_digit(10) else {
                return Err(Error::InvalidDigit(chr));
            };
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(digit as u128))
                .ok_or(Error::OutOfRange)?;
        }

        let limit = if neg { 1u128 << 127 } else { (1u128 << 127) - 1 };
        if magnitude > limit {
            return Err(Error::OutOfRange);
        }

        Ok(Decimal(if neg {
            magnitude.wrapping_neg() as i128
        } else {
            magnitude as i128
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Decimal, Error};
    use proptest::prelude::*;

    #[test]
    fn display() {
        let cases = [
            (Decimal::from_i64(0), "0"),
            (Decimal::from_i64(25_000_000), "25000000"),
            (Decimal::from_i64(-25_000_000), "-25000000"),
            (Decimal::from_i64(8_740_302_187_228_643_401), "8740302187228643401"),
            (
                Decimal::from_i64(-8_740_302_187_228_643_401),
                "-8740302187228643401",
            ),
            (Decimal::from_parts(0x1234, 0x5), "85961827383486510530565"),
            (
                Decimal::from_parts(0x4b3b_4ca8_5a86_c47a, 0x098a_223f_ffff_ffff),
                "99999999999999999999999999999999999999",
            ),
            (
                Decimal::from_parts(0x4b3b_4ca8_5a86_c47a, 0x098a_2240_0000_0000),
                "100000000000000000000000000000000000000",
            ),
            (
                Decimal::from_parts(0xb4c4_b357_a579_3b85, 0xf675_ddc0_0000_0001),
                "-99999999999999999999999999999999999999",
            ),
            (
                Decimal::from_parts(0xb4c4_b357_a579_3b85, 0xf675_ddc0_0000_0000),
                "-100000000000000000000000000000000000000",
            ),
        ];
        for (i, (a, want)) in cases.into_iter().enumerate() {
            assert_eq!(a.to_string(), want, "case {i}");
        }
    }

    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", Decimal::from_parts(0x1234, 0x5)),
            "Decimal(0x0000000000001234, 0x0000000000000005)",
        );
    }

    #[test]
    fn parse() {
        let cases = [
            ("0", Decimal::ZERO),
            ("-0", Decimal::ZERO),
            ("007", Decimal::from_i64(7)),
            ("1230000", Decimal::from_i64(1_230_000)),
            ("-25000000", Decimal::from_i64(-25_000_000)),
            (
                "100000000000000000000000000000000000000",
                Decimal::from_parts(0x4b3b_4ca8_5a86_c47a, 0x098a_2240_0000_0000),
            ),
            (
                "170141183460469231731687303715884105727",
                Decimal::from_parts(0x7fff_ffff_ffff_ffff, 0xffff_ffff_ffff_ffff),
            ),
            (
                "-170141183460469231731687303715884105728",
                Decimal::from_parts(0x8000_0000_0000_0000, 0),
            ),
        ];
        for (i, (s, want)) in cases.into_iter().enumerate() {
            assert_eq!(s.parse::<Decimal>().unwrap(), want, "case {i}");
        }
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Decimal>(), Err(Error::Empty));
        assert_eq!("-".parse::<Decimal>(), Err(Error::Empty));
        assert_eq!("12a".parse::<Decimal>(), Err(Error::InvalidDigit('a')));
        assert_eq!("1.5".parse::<Decimal>(), Err(Error::InvalidDigit('.')));
        assert_eq!("+15".parse::<Decimal>(), Err(Error::InvalidDigit('+')));
        assert_eq!(
            "170141183460469231731687303715884105728".parse::<Decimal>(),
            Err(Error::OutOfRange),
        );
        assert_eq!(
            "-170141183460469231731687303715884105729".parse::<Decimal>(),
            Err(Error::OutOfRange),
        );
    }

    proptest! {
        #[test]
        fn string_round_trip(hi in any::<u64>(), lo in any::<u64>()) {
            let d = Decimal::from_parts(hi, lo);
            prop_assert_eq!(d.to_string().parse::<Decimal>().unwrap(), d);
        }
    }
}
