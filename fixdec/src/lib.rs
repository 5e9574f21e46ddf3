#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(feature = "bytemuck"), forbid(unsafe_code))]
#![forbid(missing_docs)]

/*!

Fixed-point decimal arithmetic for accounting.

[`Decimal`] is a signed 128-bit scaled integer: it stores an exact count of
minimum-representable units, and the scaling factor relating that count to
nominal units is supplied by the consumer. [`Rate`] is a signed
parts-per-million multiplier used to scale decimals.

Addition, subtraction and negation wrap modulo 2<sup>128</sup> and never
fail. Multiplication and division by a [`Rate`] round half to even
(banker's rounding) through a 192-bit intermediate, and panic when the
result does not fit in 128 bits.

```
use fixdec::{Decimal, Rate};

let price = Decimal::from_i64(25_000_000);
assert_eq!(price * Rate::from_ppm(27), Decimal::from_i64(675));
assert_eq!(price.to_string(), "25000000");
```

Values render as exact decimal strings and carry a stable 16-byte
little-endian wire format suitable for persistence.

# `no_std`

This crate is `no_std` when the default `std` feature is disabled.

*/

mod decimal;
mod error;
mod format;
mod operators;
mod rate;

#[cfg(feature = "bytemuck")]
mod bytemuck_impl;

#[cfg(feature = "serde")]
mod serde_impl;

pub use decimal::Decimal;
pub use error::{Error, Result};
pub use rate::Rate;
