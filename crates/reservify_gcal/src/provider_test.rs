#[cfg(test)]
mod tests {
    use crate::provider::GoogleGatewayProvider;
    use chrono::{Duration, TimeZone, Utc};
    use reservify_common::{GatewayProvider, NewCalendarEvent, ReservifyError, TimeWindow};
    use reservify_config::{BusinessConfig, BusinessRegistry, ServiceAccountCredentials};

    fn business_with_bad_key() -> BusinessConfig {
        BusinessConfig {
            id: "dollar-shop".to_string(),
            display_name: "Dollar Shop Hot Pot".to_string(),
            calendar_id: "cal-1".to_string(),
            credentials: ServiceAccountCredentials::from_value(serde_json::json!({
                "client_email": "booker@example.iam.gserviceaccount.com",
                "private_key": "not a pem key",
                "token_uri": "https://oauth2.googleapis.com/token"
            }))
            .unwrap(),
            timezone: chrono_tz::America::New_York,
            default_duration_minutes: 90,
            open_hour: 11,
            close_hour: 22,
        }
    }

    #[tokio::test]
    async fn test_unusable_key_yields_gateway_reporting_upstream_errors() {
        let business = business_with_bad_key();
        let registry = BusinessRegistry::new(vec![business.clone()]);

        let provider = GoogleGatewayProvider::connect(&registry).await;
        assert!(provider.is_empty(), "No business was authenticated");

        let gateway = provider
            .gateway_for(&business)
            .expect("a failing gateway is still handed out");
        let start = Utc.with_ymd_and_hms(2025, 6, 14, 23, 0, 0).unwrap();
        let window = TimeWindow::new(start, start + Duration::minutes(90)).unwrap();

        match gateway.list_events(&business.calendar_id, &window).await {
            Err(ReservifyError::ExternalServiceError { service_name, .. }) => {
                assert_eq!(service_name, "google-calendar")
            }
            other => panic!("Expected ExternalServiceError, got {:?}", other),
        }

        let event = NewCalendarEvent {
            summary: "Reservation: Ana (2 people)".to_string(),
            description: "Phone: 555\nParty Size: 2".to_string(),
            window,
            time_zone: "America/New_York".to_string(),
        };
        assert!(matches!(
            gateway.insert_event(&business.calendar_id, event).await,
            Err(ReservifyError::ExternalServiceError { .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_business_has_no_gateway() {
        let provider = GoogleGatewayProvider::connect(&BusinessRegistry::default()).await;
        assert_eq!(provider.len(), 0);

        match provider.gateway_for(&business_with_bad_key()) {
            Err(ReservifyError::ConfigError(msg)) => assert!(msg.contains("dollar-shop")),
            Err(other) => panic!("Expected ConfigError, got {:?}", other),
            Ok(_) => panic!("Expected no gateway for a business that was never connected"),
        }
    }
}
