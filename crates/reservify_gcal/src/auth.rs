// File: crates/reservify_gcal/src/auth.rs
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{parse_service_account_key, ServiceAccountAuthenticator},
    CalendarHub,
};
use reservify_config::ServiceAccountCredentials;
use std::error::Error;

// Type aliases for clarity
type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

/// Builds an authenticated Calendar hub from a business's service-account key.
///
/// No network traffic happens here; the first token is fetched on the first API call.
pub async fn create_calendar_hub(
    credentials: &ServiceAccountCredentials,
) -> Result<HubType, Box<dyn Error + Send + Sync>> {
    let sa_key = parse_service_account_key(credentials.as_json().to_string())?;

    let auth = ServiceAccountAuthenticator::builder(sa_key).build().await?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()?
        .https_or_http()
        .enable_http1()
        .build();

    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    let hub = CalendarHub::new(client, auth);

    Ok(hub)
}
