// --- File: crates/reservify_gcal/src/provider.rs ---
//! Per-business Google Calendar gateways, built once at startup.

use async_trait::async_trait;
use reservify_common::{
    config_error, external_service_error, CalendarEvent, CalendarGateway, GatewayProvider,
    InsertedEvent, NewCalendarEvent, ReservifyError, TimeWindow,
};
use reservify_config::{BusinessConfig, BusinessRegistry};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};

use crate::auth::create_calendar_hub;
use crate::service::{GoogleCalendarGateway, SERVICE_NAME};

/// Holds one gateway per configured business.
#[derive(Default)]
pub struct GoogleGatewayProvider {
    gateways: HashMap<String, Arc<dyn CalendarGateway>>,
    connected: usize,
}

impl GoogleGatewayProvider {
    /// Authenticates every business in the registry.
    ///
    /// A business whose credentials are rejected still gets a gateway; every
    /// call on it fails as an upstream error, so the availability and booking
    /// policies decide what the caller is told.
    pub async fn connect(registry: &BusinessRegistry) -> Self {
        let mut gateways: HashMap<String, Arc<dyn CalendarGateway>> = HashMap::new();
        let mut connected = 0;
        for business in registry.iter() {
            match create_calendar_hub(&business.credentials).await {
                Ok(hub) => {
                    info!(business_id = %business.id, "Calendar client ready");
                    connected += 1;
                    gateways.insert(
                        business.id.clone(),
                        Arc::new(GoogleCalendarGateway::new(Arc::new(hub))),
                    );
                }
                Err(e) => {
                    error!(
                        business_id = %business.id,
                        "Failed to create calendar client: {}", e
                    );
                    gateways.insert(
                        business.id.clone(),
                        Arc::new(UnavailableGateway {
                            reason: format!("calendar client unavailable: {}", e),
                        }),
                    );
                }
            }
        }
        Self {
            gateways,
            connected,
        }
    }

    /// Number of businesses with an authenticated calendar client.
    pub fn len(&self) -> usize {
        self.connected
    }

    pub fn is_empty(&self) -> bool {
        self.connected == 0
    }
}

impl GatewayProvider for GoogleGatewayProvider {
    fn gateway_for(
        &self,
        business: &BusinessConfig,
    ) -> Result<Arc<dyn CalendarGateway>, ReservifyError> {
        self.gateways.get(&business.id).cloned().ok_or_else(|| {
            config_error(format!(
                "no calendar client for business {}",
                business.id
            ))
        })
    }
}

/// Stands in for a business whose service account could not be authenticated.
struct UnavailableGateway {
    reason: String,
}

#[async_trait]
impl CalendarGateway for UnavailableGateway {
    async fn list_events(
        &self,
        _calendar_id: &str,
        _window: &TimeWindow,
    ) -> Result<Vec<CalendarEvent>, ReservifyError> {
        Err(external_service_error(SERVICE_NAME, &self.reason))
    }

    async fn insert_event(
        &self,
        _calendar_id: &str,
        _event: NewCalendarEvent,
    ) -> Result<InsertedEvent, ReservifyError> {
        Err(external_service_error(SERVICE_NAME, &self.reason))
    }
}
