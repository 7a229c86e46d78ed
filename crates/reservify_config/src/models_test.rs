#[cfg(test)]
mod tests {
    use crate::models::{AppConfig, AvailabilityPolicy, BookingFailurePolicy};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str("{}").expect("empty config should parse");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.reservation.default_business_id, "dollar-shop");
        assert_eq!(config.reservation.availability_policy, AvailabilityPolicy::FailOpen);
        assert_eq!(
            config.reservation.booking_failure_policy,
            BookingFailurePolicy::ReportSuccess
        );
        assert!(!config.reservation.enforce_business_hours);

        assert_eq!(config.businesses.len(), 1);
        let business = &config.businesses[0];
        assert_eq!(business.id, "dollar-shop");
        assert_eq!(business.display_name, "Dollar Shop Hot Pot");
        assert_eq!(business.timezone, "America/New_York");
        assert_eq!(business.default_duration_minutes, 90);
        assert_eq!((business.open_hour, business.close_hour), (11, 22));
        assert_eq!(business.credentials_env, "SERVICE_ACCOUNT_KEY");
        assert_eq!(business.calendar_id_env, "GOOGLE_CALENDAR_ID");
    }

    #[test]
    fn test_policies_parse_snake_case() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "reservation": {
                "availability_policy": "fail_closed",
                "booking_failure_policy": "report_failure"
            }
        }))
        .expect("policies should parse");

        assert_eq!(config.reservation.availability_policy, AvailabilityPolicy::FailClosed);
        assert_eq!(
            config.reservation.booking_failure_policy,
            BookingFailurePolicy::ReportFailure
        );
        // Untouched fields keep their defaults
        assert_eq!(config.reservation.default_business_id, "dollar-shop");
    }

    #[test]
    fn test_explicit_businesses_replace_default() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "businesses": [
                { "id": "noodle-bar", "display_name": "Noodle Bar", "timezone": "Europe/Zurich" }
            ]
        }))
        .expect("business list should parse");

        assert_eq!(config.businesses.len(), 1);
        assert_eq!(config.businesses[0].id, "noodle-bar");
        assert_eq!(config.businesses[0].timezone, "Europe/Zurich");
        assert_eq!(config.businesses[0].default_duration_minutes, 90);
    }
}
