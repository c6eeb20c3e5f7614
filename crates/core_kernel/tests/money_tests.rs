//! Unit tests for the Money module
//!
//! Tests cover money creation, minor-unit conversion, checked arithmetic,
//! currency handling, and serialization.

use core_kernel::{Money, Currency, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(650.00), Currency::USD);
        assert_eq!(m.amount(), dec!(650.00));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(58000, Currency::USD);
        assert_eq!(m.amount(), dec!(580.00));
    }

    #[test]
    fn test_from_minor_handles_krw_no_decimals() {
        let m = Money::from_minor(65000, Currency::KRW);
        assert_eq!(m.amount(), dec!(65000));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.to_minor(), Ok(0));
    }
}

mod minor_units {
    use super::*;

    #[test]
    fn test_to_minor_for_usd() {
        assert_eq!(Money::new(dec!(1730.00), Currency::USD).to_minor(), Ok(173000));
    }

    #[test]
    fn test_to_minor_for_jpy() {
        assert_eq!(Money::new(dec!(12345), Currency::JPY).to_minor(), Ok(12345));
    }

    #[test]
    fn test_to_minor_rounds_sub_cent_amounts() {
        assert_eq!(Money::new(dec!(0.005), Currency::USD).to_minor(), Ok(1));
    }

    #[test]
    fn test_to_minor_negative() {
        assert_eq!(Money::from_minor(-250, Currency::USD).to_minor(), Ok(-250));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::from_minor(65000, Currency::USD);
        let b = Money::from_minor(58000, Currency::USD);
        let result = a.checked_add(&b).unwrap();
        assert_eq!(result.amount(), dec!(1230.00));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::EUR);
        let result = a.checked_add(&b);
        assert_eq!(
            result,
            Err(MoneyError::CurrencyMismatch("USD".to_string(), "EUR".to_string()))
        );
    }

    #[test]
    fn test_checked_add_onto_zero() {
        let total = Money::zero(Currency::USD)
            .checked_add(&Money::from_minor(65000, Currency::USD))
            .unwrap();
        assert_eq!(total.to_minor(), Ok(65000));
    }

    #[test]
    fn test_checked_add_rejects_gbp_onto_usd() {
        let result = Money::zero(Currency::USD).checked_add(&Money::from_minor(100, Currency::GBP));
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_all_currencies_have_symbols() {
        let currencies = [
            Currency::USD, Currency::EUR, Currency::GBP, Currency::JPY, Currency::KRW,
        ];

        for currency in currencies {
            assert!(!currency.symbol().is_empty());
            assert_eq!(currency.code().len(), 3);
        }
    }

    #[test]
    fn test_currency_decimal_places() {
        assert_eq!(Currency::USD.decimal_places(), 2);
        assert_eq!(Currency::EUR.decimal_places(), 2);
        assert_eq!(Currency::JPY.decimal_places(), 0);
        assert_eq!(Currency::KRW.decimal_places(), 0);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(format!("{}", Currency::USD), "USD");
        assert_eq!(format!("{}", Currency::KRW), "KRW");
    }
}

mod display {
    use super::*;

    #[test]
    fn test_money_display_usd() {
        let m = Money::new(dec!(1234.5), Currency::USD);
        assert_eq!(format!("{}", m), "$ 1234.50");
    }

    #[test]
    fn test_money_display_jpy() {
        let m = Money::new(dec!(12345), Currency::JPY);
        assert!(format!("{}", m).contains("¥"));
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_money_json_roundtrip() {
        let m = Money::from_minor(65000, Currency::USD);
        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_currency_json_uses_iso_code() {
        let json = serde_json::to_string(&Currency::KRW).unwrap();
        assert_eq!(json, "\"KRW\"");
        let deserialized: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(deserialized, Currency::USD);
    }
}
