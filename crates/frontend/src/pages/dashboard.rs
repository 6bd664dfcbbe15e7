//! Landing dashboard: summary cards plus the recent-activity feed.

use std::collections::BTreeMap;

use wasm_bindgen_futures::spawn_local;
use web_types::{JobApplication, JobPosting, StatsSummary};
use yew::prelude::*;

use crate::api::{ApiClient, ApiError, ApplicationQuery, JobQuery};
use crate::components::{ActivityFeed, ErrorBanner, Loading, StatCard};
use crate::config::AppConfig;
use crate::feed::{build_activity_feed, format_success_rate};

/// Trailing window the stats read covers.
pub const STATS_PERIOD_DAYS: u32 = 30;
/// How many recent jobs and applications to fetch per load.
const RECENT_LIMIT: u32 = 10;

/// Snapshot backing one dashboard render.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub stats: StatsSummary,
    pub jobs: Vec<JobPosting>,
    pub applications: Vec<JobApplication>,
}

impl DashboardData {
    /// Zero-state shown when a load failed: all counters zero, all
    /// lists empty.
    fn zero() -> Self {
        Self {
            stats: StatsSummary::zero(STATS_PERIOD_DAYS),
            jobs: Vec::new(),
            applications: Vec::new(),
        }
    }
}

/// Load state. `Failed` is distinct from `Loading` so an outage is
/// never silently rendered as "no data yet".
#[derive(Debug, Clone, PartialEq, Default)]
enum DashboardState {
    #[default]
    Loading,
    Loaded(DashboardData),
    Failed,
}

/// Issue the three reads sequentially; the first failure aborts the
/// whole load.
async fn load_dashboard(api: &ApiClient, user_id: &str) -> Result<DashboardData, ApiError> {
    let stats = api.get_stats(user_id, STATS_PERIOD_DAYS).await?;
    let jobs = api
        .list_jobs(
            user_id,
            &JobQuery {
                limit: Some(RECENT_LIMIT),
                ..JobQuery::default()
            },
        )
        .await?;
    let applications = api
        .list_applications(
            user_id,
            &ApplicationQuery {
                limit: Some(RECENT_LIMIT),
                ..ApplicationQuery::default()
            },
        )
        .await?;

    Ok(DashboardData {
        stats,
        jobs,
        applications,
    })
}

/// Card values rendered verbatim from the stats response.
fn stat_values(stats: &StatsSummary) -> (String, String, String) {
    (
        stats.total_jobs_found.to_string(),
        stats.total_applications.to_string(),
        format_success_rate(stats.success_rate),
    )
}

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let api = use_context::<ApiClient>();
    let state = use_state(DashboardState::default);

    {
        let state = state.clone();
        let api = api
            .clone()
            .unwrap_or_else(|| ApiClient::new(&config.backend_url));
        let user_id = config.user_id.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_dashboard(&api, &user_id).await {
                    Ok(data) => state.set(DashboardState::Loaded(data)),
                    // Already logged by the API client.
                    Err(_) => state.set(DashboardState::Failed),
                }
            });
        });
    }

    let (data, failed) = match &*state {
        DashboardState::Loading => {
            return html! { <Loading message="Loading dashboard..." /> };
        }
        DashboardState::Loaded(data) => (data.clone(), false),
        DashboardState::Failed => (DashboardData::zero(), true),
    };

    let (jobs_found, applications_sent, success_rate) = stat_values(&data.stats);
    let feed = build_activity_feed(&data.applications, &data.jobs);

    html! {
        <div>
            <h1>{"Dashboard"}</h1>

            if failed {
                <ErrorBanner message="Could not reach the backend. Showing empty data." />
            }

            <div class="stats-grid">
                <StatCard
                    value={jobs_found}
                    label={"Jobs Found"}
                    hint={format!("Last {} days", data.stats.period_days)}
                />
                <StatCard
                    value={applications_sent}
                    label={"Applications"}
                />
                <StatCard
                    value={success_rate}
                    label={"Success Rate"}
                />
            </div>

            <div class="panel-grid">
                { breakdown_panel(
                    "Applications by Status",
                    &data.stats.applications_by_status,
                    "No applications yet.",
                ) }
                { breakdown_panel(
                    "Applications by Portal",
                    &data.stats.applications_by_portal,
                    "No portal activity yet.",
                ) }
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Recent Activity"}</h2>
                </div>
                <ActivityFeed entries={feed} />
            </div>
        </div>
    }
}

fn breakdown_panel(title: &str, entries: &BTreeMap<String, u32>, empty_message: &str) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">{ title }</h2>
            </div>
            if entries.is_empty() {
                <p class="empty-state">{ empty_message }</p>
            } else {
                <div class="breakdown-list">
                    { for entries.iter().map(|(name, count)| {
                        html! {
                            <div class="breakdown-row" key={name.clone()}>
                                <span class="breakdown-name">{ name }</span>
                                <span class="breakdown-count">{ count.to_string() }</span>
                            </div>
                        }
                    })}
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_values_are_verbatim_from_the_response() {
        // Stats example: 12 jobs, 4 applications, 33.333 success rate.
        let json = r#"{
            "period_days": 30,
            "total_applications": 4,
            "total_jobs_found": 12,
            "applications_by_status": {"pending": 2},
            "applications_by_portal": {},
            "success_rate": 33.333
        }"#;
        let stats: StatsSummary = serde_json::from_str(json).unwrap();

        let (jobs, applications, rate) = stat_values(&stats);

        assert_eq!(jobs, "12");
        assert_eq!(applications, "4");
        assert_eq!(rate, "33.3%");
        assert_eq!(stats.applications_by_status.get("pending"), Some(&2));
    }

    #[test]
    fn zero_state_renders_zeroed_cards_and_empty_lists() {
        let data = DashboardData::zero();

        let (jobs, applications, rate) = stat_values(&data.stats);

        assert_eq!(jobs, "0");
        assert_eq!(applications, "0");
        assert_eq!(rate, "0.0%");
        assert!(data.stats.applications_by_status.is_empty());
        assert!(data.stats.applications_by_portal.is_empty());
        assert!(data.jobs.is_empty());
        assert!(data.applications.is_empty());
        assert!(build_activity_feed(&data.applications, &data.jobs).is_empty());
    }

    #[test]
    fn stats_window_matches_the_backend_default() {
        assert_eq!(STATS_PERIOD_DAYS, 30);
    }
}
