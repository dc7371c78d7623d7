use log::debug;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet, VecDeque};

use super::currency::normalize_currency_code;
use super::fx_errors::FxError;
use super::fx_model::ExchangeRate;
use super::fx_traits::RateProviderTrait;
use crate::constants::{DEFAULT_CURRENCY, DEFAULT_SOURCE_CURRENCY, USD_TO_INR_RATE};

/// Static rate table with graph based lookups.
///
/// Every configured rate is stored together with its inverse, and conversions
/// between currencies without a direct rate walk the shortest chain of known
/// pairs.
#[derive(Debug, Clone, Default)]
pub struct CurrencyConverter {
    /// Currency -> currencies it has a direct rate to.
    adj: HashMap<String, HashSet<String>>,

    /// (From, To) -> rate
    rates: HashMap<(String, String), Decimal>,
}

impl CurrencyConverter {
    /// Creates a converter from a list of rates. Fails on the first invalid rate.
    pub fn new(exchange_rates: Vec<ExchangeRate>) -> Result<Self, FxError> {
        let mut converter = CurrencyConverter::default();
        for rate in exchange_rates {
            converter.add_rate(rate)?;
        }
        Ok(converter)
    }

    /// The storefront's default table: a single USD -> INR rate of 75.
    pub fn with_default_rate() -> Self {
        let mut converter = CurrencyConverter::default();
        converter.insert_pair(DEFAULT_SOURCE_CURRENCY, DEFAULT_CURRENCY, USD_TO_INR_RATE);
        converter
    }

    /// Adds or replaces a rate and its inverse.
    pub fn add_rate(&mut self, rate: ExchangeRate) -> Result<(), FxError> {
        rate.validate()?;
        let from = normalize_currency_code(&rate.from_currency)?;
        let to = normalize_currency_code(&rate.to_currency)?;
        if from == to {
            return Ok(());
        }
        self.insert_pair(&from, &to, rate.rate);
        Ok(())
    }

    fn insert_pair(&mut self, from: &str, to: &str, rate: Decimal) {
        self.rates.insert((from.to_string(), to.to_string()), rate);
        self.adj
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());

        // Inverse only when representable and non-zero
        match Decimal::ONE.checked_div(rate) {
            Some(inverse) if !inverse.is_zero() => {
                self.rates.insert((to.to_string(), from.to_string()), inverse);
                self.adj
                    .entry(to.to_string())
                    .or_default()
                    .insert(from.to_string());
            }
            _ => debug!("Skipping inverse of {} -> {} at rate {}", from, to, rate),
        }
    }

    /// Converts an amount using Breadth-First Search to find the shortest path.
    pub fn convert_amount(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Decimal, FxError> {
        let from = normalize_currency_code(from_currency)?;
        let to = normalize_currency_code(to_currency)?;
        if from == to {
            return Ok(amount);
        }

        // BFS State: (Current Currency, Accumulated Rate)
        let mut queue: VecDeque<(String, Decimal)> = VecDeque::new();
        let mut visited: HashSet<String> = HashSet::new();

        queue.push_back((from.clone(), Decimal::ONE));
        visited.insert(from.clone());

        while let Some((current, current_rate)) = queue.pop_front() {
            if current == to {
                debug!("Resolved {} -> {} at rate {}", from, to, current_rate);
                return amount.checked_mul(current_rate).ok_or_else(|| {
                    FxError::InvalidAmount(format!(
                        "{} {} at rate {} overflows",
                        amount, from, current_rate
                    ))
                });
            }

            if let Some(neighbors) = self.adj.get(&current) {
                for neighbor in neighbors {
                    if visited.insert(neighbor.clone()) {
                        if let Some(rate) = self.rates.get(&(current.clone(), neighbor.clone())) {
                            let path_rate = current_rate.checked_mul(*rate).ok_or_else(|| {
                                FxError::InvalidRate(format!(
                                    "Rate overflow on path {} -> {} via {}",
                                    from, to, neighbor
                                ))
                            })?;
                            queue.push_back((neighbor.clone(), path_rate));
                        }
                    }
                }
            }
        }

        Err(FxError::RateNotFound(format!(
            "No conversion path found for {} -> {}",
            from, to
        )))
    }
}

impl RateProviderTrait for CurrencyConverter {
    fn get_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal, FxError> {
        self.convert_amount(Decimal::ONE, from_currency, to_currency)
    }
}
