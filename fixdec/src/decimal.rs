/// A signed 128-bit fixed-point decimal number.
///
/// `Decimal` is a scaled integer. It stores an exact count of
/// minimum-representable units; the power of ten relating that count to
/// nominal units is not part of the value and is dictated by the consumer
/// (for money, by the currency). There is no NaN, no infinity, and no
/// hidden precision loss.
///
/// The derived comparisons order values as signed 128-bit integers, which
/// is the numeric order of the scaled values.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Decimal(pub(crate) i128);

impl Decimal {
    /// The zero value.
    pub const ZERO: Decimal = Decimal(0);

    /// Creates a decimal from a signed 64-bit integer, sign-extending it
    /// into the 128-bit representation.
    pub const fn from_i64(i: i64) -> Decimal {
        Decimal(i as i128)
    }

    /// Assembles a decimal from its high and low 64-bit halves,
    /// interpreted together as a two's-complement 128-bit value.
    pub const fn from_parts(hi: u64, lo: u64) -> Decimal {
        Decimal((((hi as u128) << 64) | lo as u128) as i128)
    }

    /// Splits the decimal into its high and low 64-bit halves.
    pub const fn to_parts(self) -> (u64, u64) {
        ((self.0 as u128 >> 64) as u64, self.0 as u64)
    }

    /// Encodes the decimal in its 16-byte wire format: bytes [0..8) hold
    /// the low half and bytes [8..16) the high half, both little-endian.
    ///
    /// The layout is stable; values stored today must decode unchanged
    /// forever.
    pub const fn to_le_bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }

    /// Decodes a decimal from its 16-byte wire format.
    pub const fn from_le_bytes(bytes: [u8; 16]) -> Decimal {
        Decimal(i128::from_le_bytes(bytes))
    }

    // Magnitude plus original sign. The multi-word arithmetic and the
    // renderer work on unsigned magnitudes and re-apply the sign at the
    // very end.
    pub(crate) fn sign_abs(self) -> (u128, bool) {
        if self.0 < 0 {
            (self.0.unsigned_abs(), true)
        } else {
            (self.0 as u128, false)
        }
    }
}

impl From<i64> for Decimal {
    fn from(i: i64) -> Decimal {
        Decimal::from_i64(i)
    }
}

#[cfg(test)]
mod tests {
    use super::Decimal;
    use proptest::prelude::*;

    #[test]
    fn from_i64_sign_extends() {
        assert_eq!(Decimal::from_i64(42).to_parts(), (0, 42));
        assert_eq!(Decimal::from_i64(-1).to_parts(), (u64::MAX, u64::MAX));
        assert_eq!(
            Decimal::from_i64(i64::MIN).to_parts(),
            (u64::MAX, 0x8000_0000_0000_0000),
        );
        assert_eq!(Decimal::from_i64(-1), Decimal::from_parts(u64::MAX, u64::MAX));
    }

    #[test]
    fn parts_round_trip() {
        let d = Decimal::from_parts(0x5897_e7bd_6715_a370, 0x17c4_aea0_fd62_d52b);
        let (hi, lo) = d.to_parts();
        assert_eq!(Decimal::from_parts(hi, lo), d);
    }

    #[test]
    fn wire_layout() {
        let d = Decimal::from_parts(0x0807_0605_0403_0201, 0x100f_0e0d_0c0b_0a09);
        assert_eq!(
            d.to_le_bytes(),
            [9, 10, 11, 12, 13, 14, 15, 16, 1, 2, 3, 4, 5, 6, 7, 8],
        );
    }

    #[test]
    fn wire_round_trip() {
        let d = Decimal::from_parts(0x5897_e7bd_6715_a370, 0x17c4_aea0_fd62_d52b);
        assert_eq!(Decimal::from_le_bytes(d.to_le_bytes()), d);
    }

    #[test]
    fn ordering() {
        assert!(Decimal::from_i64(-5) < Decimal::from_i64(3));
        assert!(Decimal::from_i64(-5) < Decimal::from_i64(-3));
        assert!(Decimal::from_i64(3) < Decimal::from_i64(5));
        // Bigger magnitude means smaller value on the negative side.
        assert!(
            Decimal::from_parts(0xffff_ffff_ffff_fffe, 0)
                < Decimal::from_parts(0xffff_ffff_ffff_ffff, 0)
        );
        // The most negative value sorts below everything else.
        let min = Decimal::from_parts(0x8000_0000_0000_0000, 0);
        assert!(min < Decimal::from_i64(i64::MIN));
        // And a positive value with a high half beats any i64.
        assert!(Decimal::from_parts(1, 0) > Decimal::from_i64(i64::MAX));
    }

    proptest! {
        #[test]
        fn bytes_round_trip(hi in any::<u64>(), lo in any::<u64>()) {
            let d = Decimal::from_parts(hi, lo);
            prop_assert_eq!(Decimal::from_le_bytes(d.to_le_bytes()), d);
        }
    }
}
