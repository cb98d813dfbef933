//! Static per-plan feature limits.

use std::fmt;

use super::Plan;

/// A numeric limit that may be unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// At most this many
    Limited(u32),
    /// No cap
    Unlimited,
}

impl Limit {
    /// Returns true if `count` is strictly below the limit.
    pub fn allows(self, count: u32) -> bool {
        match self {
            Limit::Limited(max) => count < max,
            Limit::Unlimited => true,
        }
    }

    /// Returns the cap, or `None` when unlimited.
    pub fn cap(self) -> Option<u32> {
        match self {
            Limit::Limited(max) => Some(max),
            Limit::Unlimited => None,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Limited(max) => write!(f, "{max}"),
            Limit::Unlimited => f.write_str("unlimited"),
        }
    }
}

/// Feature limits for one plan. Never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanPolicy {
    /// Name shown on pricing and dashboard pages
    pub display_name: &'static str,
    /// Analyses allowed per 24h
    pub max_analyses_per_day: Limit,
    /// History entries shown on the dashboard
    pub max_history_items: Limit,
    /// Distinct domains that may be analyzed
    pub max_sites: Limit,
    /// Load time / first contentful paint are shown
    pub detailed_metrics: bool,
    /// JSON/CSV export buttons are shown
    pub export_enabled: bool,
    /// PDF export is offered
    pub pdf_export: bool,
    /// Side-by-side comparison is offered
    pub comparison_enabled: bool,
    /// Programmatic API access
    pub api_access: bool,
}

static FREE_POLICY: PlanPolicy = PlanPolicy {
    display_name: "Start",
    max_analyses_per_day: Limit::Limited(1),
    max_history_items: Limit::Limited(3),
    max_sites: Limit::Limited(1),
    detailed_metrics: false,
    export_enabled: false,
    pdf_export: false,
    comparison_enabled: false,
    api_access: false,
};

static PRO_POLICY: PlanPolicy = PlanPolicy {
    display_name: "Pro",
    max_analyses_per_day: Limit::Unlimited,
    max_history_items: Limit::Limited(50),
    max_sites: Limit::Limited(10),
    detailed_metrics: true,
    export_enabled: true,
    pdf_export: true,
    comparison_enabled: true,
    api_access: false,
};

static BUSINESS_POLICY: PlanPolicy = PlanPolicy {
    display_name: "Business",
    max_analyses_per_day: Limit::Unlimited,
    max_history_items: Limit::Unlimited,
    max_sites: Limit::Limited(100),
    detailed_metrics: true,
    export_enabled: true,
    pdf_export: true,
    comparison_enabled: true,
    api_access: true,
};

/// Returns the policy for `plan`.
pub fn get_plan_limits(plan: Plan) -> &'static PlanPolicy {
    match plan {
        Plan::Free => &FREE_POLICY,
        Plan::Pro => &PRO_POLICY,
        Plan::Business => &BUSINESS_POLICY,
    }
}

/// Looks up a policy by plan key; unknown or missing keys get the free policy.
pub fn get_plan_limits_by_key(key: Option<&str>) -> &'static PlanPolicy {
    get_plan_limits(Plan::from_key_or_free(key))
}
