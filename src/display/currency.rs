//! Currency formatting driven by user settings

use crate::config::Settings;
use crate::models::Money;

/// How amounts are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub show_cents: bool,
}

impl CurrencyFormat {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            symbol: settings.currency_symbol.clone(),
            show_cents: settings.show_cents,
        }
    }

    /// Format an amount, e.g. `$1,235` or `$1,234.50`
    pub fn amount(&self, money: Money) -> String {
        money.format(&self.symbol, self.show_cents)
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_whole_dollars() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.amount(Money::from_cents(123450)), "$1,235");
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            currency_symbol: "£".into(),
            show_cents: true,
            ..Settings::default()
        };
        let fmt = CurrencyFormat::from_settings(&settings);
        assert_eq!(fmt.amount(Money::from_cents(1999)), "£19.99");
    }
}
