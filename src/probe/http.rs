//! HEAD-request availability probe.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::app::validate_url;
use crate::config::PROBE_TIMEOUT;

use super::{Availability, AvailabilityProbe};

/// Probes a site with a single HEAD request bounded by a timeout.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Arc<reqwest::Client>,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(client: Arc<reqwest::Client>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Probe with a default client and the standard 8-second timeout.
    pub fn with_default_client() -> Self {
        Self::new(Arc::new(reqwest::Client::new()), PROBE_TIMEOUT)
    }
}

#[async_trait]
impl AvailabilityProbe for HttpProbe {
    async fn check_availability(&self, url: &str, cancel: &CancellationToken) -> Availability {
        let parsed = match validate_url(url) {
            Ok(parsed) => parsed,
            Err(defect) => return Availability::unavailable(defect.message()),
        };

        let request = self.client.head(parsed).send();

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Availability probe for {url} cancelled, treating as available");
                Availability::inconclusive()
            }
            outcome = tokio::time::timeout(self.timeout, request) => match outcome {
                Ok(Ok(response)) => {
                    // Any HTTP answer, even 4xx/5xx, proves something is listening
                    debug!("Availability probe for {url}: HTTP {}", response.status());
                    Availability::reachable()
                }
                Ok(Err(e)) => {
                    debug!("Availability probe for {url} failed ({e}), treating as available");
                    Availability::inconclusive()
                }
                Err(_) => {
                    debug!(
                        "Availability probe for {url} timed out after {:?}, treating as available",
                        self.timeout
                    );
                    Availability::inconclusive()
                }
            }
        }
    }
}
