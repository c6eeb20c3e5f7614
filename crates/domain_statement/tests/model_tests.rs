//! Deserialization of the invoice and play catalog data shapes

use domain_statement::{Audience, Genre, Invoice, PlayCatalog, PlayId, StatementError};
use proptest::prelude::*;
use test_utils::negative_audience_strategy;

const PLAYS: &str = r#"{
    "hamlet": {"name": "Hamlet", "type": "tragedy"},
    "as-like": {"name": "As You Like It", "type": "comedy"},
    "henry-v": {"name": "Henry V", "type": "history"}
}"#;

const INVOICES: &str = r#"[
    {
        "customer": "BigCo",
        "performances": [
            {"playID": "hamlet", "audience": 55},
            {"playID": "as-like", "audience": 35}
        ]
    }
]"#;

mod catalog {
    use super::*;

    #[test]
    fn test_parses_object_keyed_by_play_id() {
        let catalog: PlayCatalog = serde_json::from_str(PLAYS).unwrap();

        assert_eq!(catalog.len(), 3);
        let hamlet = catalog.get(&PlayId::new("hamlet")).unwrap();
        assert_eq!(hamlet.name, "Hamlet");
        assert_eq!(hamlet.genre, Genre::Tragedy);
    }

    #[test]
    fn test_keeps_unsupported_genre() {
        let catalog: PlayCatalog = serde_json::from_str(PLAYS).unwrap();
        let henry = catalog.get(&PlayId::new("henry-v")).unwrap();

        assert_eq!(henry.genre, Genre::Unsupported("history".to_string()));
    }

    #[test]
    fn test_genre_serializes_under_type_key() {
        let catalog: PlayCatalog = serde_json::from_str(PLAYS).unwrap();
        let value = serde_json::to_value(catalog.get(&PlayId::new("as-like")).unwrap()).unwrap();

        assert_eq!(value["type"], "comedy");
    }
}

mod invoices {
    use super::*;

    #[test]
    fn test_parses_invoice_array() {
        let invoices: Vec<Invoice> = serde_json::from_str(INVOICES).unwrap();

        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].customer, "BigCo");
        assert_eq!(invoices[0].performances[1].play_id, PlayId::new("as-like"));
        assert_eq!(invoices[0].performances[1].audience, Audience::new(35));
    }

    #[test]
    fn test_rejects_negative_audience() {
        let json = r#"{"customer": "BigCo", "performances": [{"playID": "hamlet", "audience": -3}]}"#;
        let err = serde_json::from_str::<Invoice>(json).unwrap_err();

        assert!(err.to_string().contains("Invalid audience size: -3"));
    }

    #[test]
    fn test_rejects_fractional_audience() {
        let json = r#"{"customer": "BigCo", "performances": [{"playID": "hamlet", "audience": 2.5}]}"#;
        assert!(serde_json::from_str::<Invoice>(json).is_err());
    }
}

proptest! {
    #[test]
    fn negative_audiences_are_rejected(raw in negative_audience_strategy()) {
        prop_assert_eq!(Audience::try_from(raw), Err(StatementError::InvalidAudience(raw)));
    }

    #[test]
    fn non_negative_audiences_are_accepted(raw in 0i64..=i64::from(u32::MAX)) {
        prop_assert_eq!(Audience::try_from(raw).map(u32::from), Ok(raw as u32));
    }
}
