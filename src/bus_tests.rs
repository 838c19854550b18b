//! Unit tests for the EventBus - change notifications for presentation.

#[cfg(test)]
mod bus_tests {
    use crate::bus::EventBus;
    use crate::data::counsel::CounselOutcome;
    use crate::events::{OracleEvent, TradeDirection, TradeEvent};

    fn trade() -> TradeEvent {
        TradeEvent {
            id: "evt-1".to_string(),
            origin: "Japan".to_string(),
            destination: "USA".to_string(),
            commodity: "Automobiles".to_string(),
            value: 33_000_000,
            timestamp: 1_700_000_000_000,
            direction: TradeDirection::Export,
        }
    }

    #[tokio::test]
    async fn test_eventbus_notify_subscribe() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        assert_eq!(bus.notify(OracleEvent::Trade(trade())), 1);

        match rx.recv().await {
            Ok(OracleEvent::Trade(event)) => {
                assert_eq!(event.id, "evt-1");
                assert_eq!(event.value, 33_000_000);
            }
            other => panic!("Expected trade event, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_eventbus_multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        assert_eq!(bus.notify(OracleEvent::Counsel(CounselOutcome::fallback())), 2);

        assert!(matches!(rx1.recv().await, Ok(OracleEvent::Counsel(_))));
        assert!(matches!(rx2.recv().await, Ok(OracleEvent::Counsel(_))));
    }

    #[test]
    fn test_notify_without_subscribers_delivers_to_nobody() {
        let bus = EventBus::new(16);
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(bus.notify(OracleEvent::Trade(trade())), 0);
    }

    #[tokio::test]
    async fn test_slow_subscriber_lags() {
        let bus = EventBus::new(2);
        let mut rx = bus.subscribe();

        for _ in 0..5 {
            assert_eq!(bus.notify(OracleEvent::Trade(trade())), 1);
        }

        assert!(matches!(
            rx.recv().await,
            Err(tokio::sync::broadcast::error::RecvError::Lagged(3))
        ));
    }
}
