#![forbid(missing_docs)]

/*!

Currency-aware money arithmetic on exact fixed-point decimals.

A [`Money`] pairs a 128-bit fixed-point [`Decimal`] amount with a
[`Currency`](currency::Currency). Amounts are stored as integer counts of
the currency's minimum-representable-units, so arithmetic is exact and
suitable for accounting. Values of different currencies are incompatible:
every operation that combines or compares two values exists in a fallible
`try_*` form returning [`Result`] and an infallible form that panics on
incompatibility.

The `Money::default()` value is the *currencyless zero*. It is compatible
with values of every currency and behaves as zero units of the other
operand's currency.

[`ExchangeRate`] converts between currencies, rescaling the result when
the destination currency keeps a different number of digits per major
unit than the source.

```
use money::currency::{JPY, USD};
use money::Money;

let price = Money::parse("1.23", "USD").unwrap();
assert_eq!(price.to_string(), "USD 1.23");
assert_eq!(price.amount().to_string(), "1230000");

let yen = Money::from_minor_units(123, &JPY);
assert_eq!(yen.to_string(), "JPY 123");

let total = price + Money::zero(&USD);
assert!(total.eq(price));
```

The built-in [`currency`] module covers the ISO 4217 currencies; any type
implementing [`Currency`](currency::Currency) can take part, which is how
cryptocurrencies and other non-ISO units are supported.

*/

pub mod currency;

mod comparison;
mod error;
mod exchange;
mod format;
mod money;
mod operators;
mod parse;

pub use error::{Error, Result};
pub use exchange::ExchangeRate;
pub use fixdec::{Decimal, Rate};
pub use money::Money;
