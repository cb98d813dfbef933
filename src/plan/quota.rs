//! Daily analysis quota and per-domain site quota.

use std::collections::HashSet;
use std::fmt;

use super::{get_plan_limits, Limit, Plan};

/// Remaining analyses for the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    /// The plan has no daily cap
    Unlimited,
    /// Analyses left today (never negative)
    Count(u32),
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Remaining::Unlimited => f.write_str("Unlimited"),
            Remaining::Count(n) => write!(f, "{n}"),
        }
    }
}

/// Returns true iff another analysis is allowed after `analyses_today` analyses.
pub fn can_perform_analysis(plan: Plan, analyses_today: u32) -> bool {
    get_plan_limits(plan).max_analyses_per_day.allows(analyses_today)
}

/// Returns how many analyses are left today, or `Remaining::Unlimited`.
pub fn remaining_analyses(plan: Plan, analyses_today: u32) -> Remaining {
    match get_plan_limits(plan).max_analyses_per_day {
        Limit::Unlimited => Remaining::Unlimited,
        Limit::Limited(cap) => Remaining::Count(cap.saturating_sub(analyses_today)),
    }
}

/// Extracts the comparable site host from a URL (`www.` prefix stripped).
fn site_host(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

/// Decides whether `url` may be analyzed given the sites already in `history_urls`.
///
/// A domain already present in the history is always allowed. A new domain is
/// allowed only while the number of distinct domains is below the plan's site cap.
/// URLs without a parseable host are rejected.
pub fn can_add_site<'a, I>(plan: Plan, history_urls: I, url: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let limit = get_plan_limits(plan).max_sites;
    if limit == Limit::Unlimited {
        return true;
    }

    let Some(domain) = site_host(url) else {
        return false;
    };

    let known: HashSet<String> = history_urls.into_iter().filter_map(site_host).collect();
    if known.contains(&domain) {
        return true;
    }

    // Counts above u32::MAX are not reachable for a per-user history
    let distinct = u32::try_from(known.len()).unwrap_or(u32::MAX);
    limit.allows(distinct)
}
