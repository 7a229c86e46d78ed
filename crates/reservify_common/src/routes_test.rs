#[cfg(test)]
mod tests {
    use crate::routes::routes;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use reservify_config::{BusinessConfig, BusinessRegistry, ServiceAccountCredentials};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn get_health(registry: BusinessRegistry) -> (StatusCode, Option<String>, serde_json::Value) {
        let app = routes(Arc::new(registry));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let cache_control = response
            .headers()
            .get(header::CACHE_CONTROL)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, cache_control, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_with_empty_registry() {
        let (status, cache_control, body) = get_health(BusinessRegistry::default()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["businesses"], serde_json::json!([]));
        assert!(cache_control.unwrap().contains("no-store"));
    }

    #[tokio::test]
    async fn test_health_lists_configured_businesses() {
        let credentials = ServiceAccountCredentials::from_value(serde_json::json!({
            "client_email": "booker@example.iam.gserviceaccount.com",
            "private_key": "unused"
        }))
        .unwrap();
        let business = |id: &str| BusinessConfig {
            id: id.to_string(),
            display_name: id.to_string(),
            calendar_id: "cal".to_string(),
            credentials: credentials.clone(),
            timezone: chrono_tz::America::New_York,
            default_duration_minutes: 90,
            open_hour: 11,
            close_hour: 22,
        };

        let (status, _, body) =
            get_health(BusinessRegistry::new(vec![business("noodle-bar"), business("dollar-shop")])).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["businesses"], serde_json::json!(["dollar-shop", "noodle-bar"]));
    }
}
