//! Best-effort site availability probing.
//!
//! The prober exists to catch obviously malformed input, not to guarantee liveness.
//! Only a locally detected defect (syntax, scheme, missing host) makes a site
//! "unavailable". Network failures, timeouts and cancellation are inconclusive and
//! reported as available so the analysis can proceed.

mod http;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub use http::HttpProbe;

/// Result of an availability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    /// False only for definite, locally detected defects
    pub available: bool,
    /// User-facing message when unavailable
    pub error: Option<String>,
    /// True when the network phase failed and availability was assumed
    pub inconclusive: bool,
}

impl Availability {
    /// The site answered the probe.
    pub fn reachable() -> Self {
        Self {
            available: true,
            error: None,
            inconclusive: false,
        }
    }

    /// The probe could not tell; the site is treated as available.
    pub fn inconclusive() -> Self {
        Self {
            available: true,
            error: None,
            inconclusive: true,
        }
    }

    /// The URL is definitely unusable.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            available: false,
            error: Some(message.into()),
            inconclusive: false,
        }
    }
}

/// Checks whether a URL is worth analyzing.
#[async_trait]
pub trait AvailabilityProbe: Send + Sync {
    /// Probes `url`. Cancelling `cancel` resolves the probe as inconclusive.
    async fn check_availability(&self, url: &str, cancel: &CancellationToken) -> Availability;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_constructors() {
        assert!(Availability::reachable().available);
        let inconclusive = Availability::inconclusive();
        assert!(inconclusive.available && inconclusive.inconclusive);
        let down = Availability::unavailable("Invalid URL");
        assert!(!down.available);
        assert_eq!(down.error.as_deref(), Some("Invalid URL"));
    }
}
