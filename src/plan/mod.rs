//! Subscription plans and their static policy table.
//!
//! This module provides:
//! - The closed `Plan` variant (free, pro, business), totally ordered by feature richness
//! - The read-only per-plan `PlanPolicy` table
//! - Daily quota helpers (`can_perform_analysis`, `remaining_analyses`)
//! - The per-domain site quota helper (`can_add_site`)

mod policy;
mod quota;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

pub use policy::{get_plan_limits, get_plan_limits_by_key, Limit, PlanPolicy};
pub use quota::{can_add_site, can_perform_analysis, remaining_analyses, Remaining};

/// Subscription tier.
///
/// Variants are declared in ascending order of feature richness, so the derived
/// `Ord` matches the business ordering (`Free < Pro < Business`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Plan {
    /// Entry tier
    #[default]
    Free,
    /// Paid tier with detailed metrics and exports
    Pro,
    /// Top tier with monitoring, technical SEO and team features
    Business,
}

impl Plan {
    /// Lower-case key used in cache keys and seed strings.
    pub fn key(self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
            Plan::Business => "business",
        }
    }

    /// Parses a plan key, falling back to `Free` for unknown or missing keys.
    pub fn from_key_or_free(key: Option<&str>) -> Plan {
        key.and_then(|k| k.trim().parse().ok()).unwrap_or_default()
    }
}
