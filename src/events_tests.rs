//! Unit tests for the trade event wire format.

#[cfg(test)]
mod events_tests {
    use crate::events::{TradeDirection, TradeEvent};

    fn sample() -> TradeEvent {
        TradeEvent {
            id: "abc".to_string(),
            origin: "Germany".to_string(),
            destination: "France".to_string(),
            commodity: "Pharmaceuticals".to_string(),
            value: 15_560_000,
            timestamp: 1_700_000_000_123,
            direction: TradeDirection::Import,
        }
    }

    #[test]
    fn test_serialize_uses_type_field() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["type"], "Import");
        assert_eq!(json["value"], 15_560_000);
        assert_eq!(json["timestamp"], 1_700_000_000_123i64);
        assert!(json.get("direction").is_none());
    }

    #[test]
    fn test_deserialize_from_feed_json() {
        let raw = r#"{
            "id": "x1",
            "origin": "India",
            "destination": "UAE",
            "commodity": "Textiles",
            "value": 20000000,
            "timestamp": 1,
            "type": "Export"
        }"#;
        let event: TradeEvent = serde_json::from_str(raw).unwrap();

        assert_eq!(event.direction, TradeDirection::Export);
        assert_eq!(event.value, 20_000_000);
    }

    #[test]
    fn test_value_millions() {
        assert_eq!(sample().value_millions(), 15.56);
    }

    #[test]
    fn test_digest_line_rounds_to_one_decimal() {
        assert_eq!(sample().digest_line(), "Germany -> France: Pharmaceuticals ($15.6M)");
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(TradeDirection::Export.as_str(), "Export");
        assert_eq!(TradeDirection::Import.as_str(), "Import");
    }

    #[test]
    fn test_digest_line_rounds_exact_tie_up() {
        let mut event = sample();
        event.origin = "USA".to_string();
        event.destination = "China".to_string();
        event.commodity = "Copper".to_string();
        event.value = 10_250_000;
        assert_eq!(event.digest_line(), "USA -> China: Copper ($10.3M)");
    }
}
