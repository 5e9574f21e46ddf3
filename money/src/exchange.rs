use crate::currency::Currency;
use crate::money::{compat, Money, TEN};
use crate::Result;
use core::fmt;
use fixdec::Rate;

/// A conversion factor between two currencies.
#[derive(Clone, Copy)]
pub struct ExchangeRate {
    source: &'static dyn Currency,
    destination: &'static dyn Currency,
    rate: Rate,
}

impl ExchangeRate {
    /// Creates an exchange rate that converts amounts of `source` into
    /// amounts of `destination` by scaling with `rate`.
    pub fn new(
        source: &'static dyn Currency,
        destination: &'static dyn Currency,
        rate: Rate,
    ) -> ExchangeRate {
        ExchangeRate {
            source,
            destination,
            rate,
        }
    }

    /// The currency that amounts to convert are denominated in.
    pub fn source(&self) -> &'static dyn Currency {
        self.source
    }

    /// The currency that converted amounts are denominated in.
    pub fn destination(&self) -> &'static dyn Currency {
        self.destination
    }

    /// The scalar conversion factor.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl fmt::Debug for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeRate")
            .field("source", &self.source.symbol())
            .field("destination", &self.destination.symbol())
            .field("rate", &self.rate)
            .finish()
    }
}

impl Money {
    /// Performs a currency exchange calculation, returning the converted
    /// amount in the destination currency, or an error if this value's
    /// currency does not match the exchange rate's source currency.
    ///
    /// When the destination currency keeps a different number of
    /// minimum-representable-units per major unit than the source, the
    /// converted amount is rescaled to the destination's scaling factor
    /// one power of ten at a time.
    pub fn try_exchange(self, exchange: ExchangeRate) -> Result<Money> {
        compat(self.ccy, Some(exchange.source))?;

        let mut amt = self.amt * exchange.rate;
        let src = exchange.source.units().scaling_factor_exponent;
        let dst = exchange.destination.units().scaling_factor_exponent;
        for _ in src..dst {
            amt = amt * TEN;
        }
        for _ in dst..src {
            amt = amt / TEN;
        }

        Ok(Money {
            amt,
            ccy: Some(exchange.destination),
        })
    }

    /// Performs a currency exchange calculation, returning the converted
    /// amount in the destination currency; panics if this value's
    /// currency does not match the exchange rate's source currency.
    pub fn exchange(self, exchange: ExchangeRate) -> Money {
        match self.try_exchange(exchange) {
            Ok(converted) => converted,
            Err(e) => panic!("{e}"),
        }
    }
}
