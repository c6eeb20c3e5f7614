//! Tests for locale-aware currency formatting

use core_kernel::{Currency, Locale, Money, MoneyError, MoneyFormatter, SymbolPosition};
use rust_decimal_macros::dec;

fn usd() -> MoneyFormatter {
    MoneyFormatter::new(Locale::EnUs, Currency::USD)
}

fn minor(units: i64, currency: Currency) -> Money {
    Money::from_minor(units, currency)
}

mod en_us {
    use super::*;

    #[test]
    fn test_formats_two_fraction_digits() {
        assert_eq!(usd().format(&minor(65000, Currency::USD)).unwrap(), "$650.00");
        assert_eq!(usd().format(&minor(58000, Currency::USD)).unwrap(), "$580.00");
    }

    #[test]
    fn test_inserts_thousands_separators() {
        assert_eq!(usd().format(&minor(173000, Currency::USD)).unwrap(), "$1,730.00");
        assert_eq!(usd().format(&minor(123456789, Currency::USD)).unwrap(), "$1,234,567.89");
    }

    #[test]
    fn test_formats_zero() {
        assert_eq!(usd().format(&Money::zero(Currency::USD)).unwrap(), "$0.00");
    }

    #[test]
    fn test_formats_negative_with_leading_sign() {
        assert_eq!(usd().format(&minor(-123456, Currency::USD)).unwrap(), "-$1,234.56");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let m = Money::new(dec!(0.125), Currency::USD);
        assert_eq!(usd().format(&m).unwrap(), "$0.13");
    }
}

mod fraction_digits {
    use super::*;

    #[test]
    fn test_defaults_to_currency_places() {
        assert_eq!(usd().fraction_digits(), 2);
        assert_eq!(MoneyFormatter::new(Locale::KoKr, Currency::KRW).fraction_digits(), 0);
    }

    #[test]
    fn test_zero_digits_omits_separator() {
        let format = MoneyFormatter::new(Locale::KoKr, Currency::KRW);
        assert_eq!(format.format(&minor(1234567, Currency::KRW)).unwrap(), "₩1,234,567");
    }

    #[test]
    fn test_override_pads_with_zeros() {
        let format = MoneyFormatter::new(Locale::KoKr, Currency::KRW).with_fraction_digits(2);
        assert_eq!(format.format(&minor(65000, Currency::KRW)).unwrap(), "₩65,000.00");
    }

    #[test]
    fn test_override_is_capped() {
        assert_eq!(usd().with_fraction_digits(40).fraction_digits(), 28);
    }
}

mod de_de {
    use super::*;

    #[test]
    fn test_swaps_separators_and_places_symbol_after() {
        let format = MoneyFormatter::new(Locale::DeDe, Currency::EUR);
        assert_eq!(format.format(&minor(173000, Currency::EUR)).unwrap(), "1.730,00\u{a0}€");
    }

    #[test]
    fn test_symbol_position() {
        assert_eq!(Locale::DeDe.symbol_position(), SymbolPosition::Suffix);
        assert_eq!(Locale::EnUs.symbol_position(), SymbolPosition::Prefix);
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_rejects_other_currency() {
        let result = usd().format(&Money::from_minor(100, Currency::EUR));
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_unsupported_locale() {
        assert_eq!(
            "fr-FR".parse::<Locale>(),
            Err(MoneyError::UnsupportedLocale("fr-FR".to_string()))
        );
    }
}

mod locale_serde {
    use super::*;

    #[test]
    fn test_locale_uses_language_tag() {
        assert_eq!(serde_json::to_string(&Locale::KoKr).unwrap(), "\"ko-KR\"");
        let parsed: Locale = serde_json::from_str("\"de-DE\"").unwrap();
        assert_eq!(parsed, Locale::DeDe);
        assert_eq!(Locale::default(), Locale::EnUs);
    }
}
