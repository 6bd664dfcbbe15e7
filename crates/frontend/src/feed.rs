//! Recent-activity feed assembly.
//!
//! The dashboard merges the most recently fetched applications and jobs
//! into one feed. Entries are derived per render and carry no identity
//! beyond their source record.

use chrono::NaiveDateTime;
use web_types::{JobApplication, JobPosting};

/// Applications contributing to the feed, in fetch order.
pub const MAX_FEED_APPLICATIONS: usize = 3;
/// Jobs contributing to the feed, in fetch order.
pub const MAX_FEED_JOBS: usize = 2;

/// What kind of record produced a feed entry; selects icon and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    Application,
    Job,
}

impl ActivityCategory {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Application => "\u{1F4E8}",
            Self::Job => "\u{1F50E}",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Application => "activity-item application",
            Self::Job => "activity-item job",
        }
    }
}

/// One row of the recent-activity feed.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub id: String,
    pub content: String,
    pub target: String,
    pub date: NaiveDateTime,
    pub category: ActivityCategory,
}

/// Merge the first [`MAX_FEED_APPLICATIONS`] applications and first
/// [`MAX_FEED_JOBS`] jobs (both in received order) into a single feed,
/// newest first. The sort is stable, so entries with equal timestamps
/// keep the applications-before-jobs concatenation order.
pub fn build_activity_feed(
    applications: &[JobApplication],
    jobs: &[JobPosting],
) -> Vec<ActivityEntry> {
    let mut entries: Vec<ActivityEntry> = applications
        .iter()
        .take(MAX_FEED_APPLICATIONS)
        .map(application_entry)
        .chain(jobs.iter().take(MAX_FEED_JOBS).map(job_entry))
        .collect();

    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

fn application_entry(application: &JobApplication) -> ActivityEntry {
    ActivityEntry {
        id: application.id.clone(),
        content: "Application submitted".to_string(),
        target: application.job_id.clone(),
        date: application.created_at,
        category: ActivityCategory::Application,
    }
}

fn job_entry(job: &JobPosting) -> ActivityEntry {
    ActivityEntry {
        id: job.id.clone(),
        content: "Job found".to_string(),
        target: job.company.clone(),
        date: job.scraped_at,
        category: ActivityCategory::Job,
    }
}

/// Render a success rate (already a percentage) for a stat card.
pub fn format_success_rate(rate: f64) -> String {
    format!("{rate:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use web_types::ApplicationStatus;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn application(id: &str, created_at: NaiveDateTime) -> JobApplication {
        JobApplication {
            id: id.to_string(),
            user_id: "user-demo-123".to_string(),
            job_id: format!("job-for-{id}"),
            cv_used: "cv-1".to_string(),
            cover_letter: None,
            custom_message: None,
            portal_data: serde_json::Value::Null,
            status: ApplicationStatus::Pending,
            applied_at: None,
            last_update: created_at,
            response_received: false,
            interview_scheduled: None,
            notes: None,
            created_at,
        }
    }

    fn job(id: &str, company: &str, scraped_at: NaiveDateTime) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            portal: web_types::JobPortal::Linkedin,
            external_id: format!("ext-{id}"),
            url: format!("https://example.com/{id}"),
            title: "Engineer".to_string(),
            company: company.to_string(),
            company_url: None,
            location: "Santiago".to_string(),
            work_mode: None,
            job_type: None,
            salary: None,
            description: String::new(),
            requirements: vec![],
            benefits: vec![],
            posted_date: None,
            deadline: None,
            keywords_matched: vec![],
            match_percentage: None,
            scraped_at,
            updated_at: scraped_at,
        }
    }

    #[test]
    fn feed_is_empty_for_empty_inputs() {
        assert!(build_activity_feed(&[], &[]).is_empty());
    }

    #[test]
    fn feed_length_is_min_three_applications_plus_min_two_jobs() {
        let apps: Vec<_> = (1..=5).map(|i| application(&format!("a{i}"), at(i, 0))).collect();
        let jobs: Vec<_> = (1..=3).map(|i| job(&format!("j{i}"), "Acme", at(i, 12))).collect();

        assert_eq!(build_activity_feed(&apps[..1], &[]).len(), 1);
        assert_eq!(build_activity_feed(&apps, &[]).len(), 3);
        assert_eq!(build_activity_feed(&[], &jobs).len(), 2);
        assert_eq!(build_activity_feed(&apps, &jobs[..1]).len(), 4);
        assert_eq!(build_activity_feed(&apps, &jobs).len(), 5);
    }

    #[test]
    fn feed_takes_leading_records_in_fetch_order_then_resorts_by_date() {
        // Five applications and three jobs, all with distinct increasing
        // timestamps. The feed must contain the first three applications
        // and first two jobs by fetch order, re-sorted newest first.
        let apps: Vec<_> = (1..=5).map(|i| application(&format!("a{i}"), at(i, 0))).collect();
        let jobs: Vec<_> = (1..=3)
            .map(|i| job(&format!("j{i}"), "Acme", at(10 + i, 0)))
            .collect();

        let feed = build_activity_feed(&apps, &jobs);

        let ids: Vec<&str> = feed.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["j2", "j1", "a3", "a2", "a1"]);
    }

    #[test]
    fn feed_ordering_is_non_increasing_by_date() {
        let apps = vec![
            application("a1", at(3, 0)),
            application("a2", at(9, 0)),
            application("a3", at(1, 0)),
        ];
        let jobs = vec![job("j1", "Acme", at(7, 0)), job("j2", "Initech", at(2, 0))];

        let feed = build_activity_feed(&apps, &jobs);

        assert!(feed.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn equal_dates_keep_applications_before_jobs() {
        let when = at(5, 0);
        let feed = build_activity_feed(&[application("a1", when)], &[job("j1", "Acme", when)]);

        assert_eq!(feed[0].category, ActivityCategory::Application);
        assert_eq!(feed[1].category, ActivityCategory::Job);
    }

    #[test]
    fn entries_point_at_their_source_records() {
        let feed = build_activity_feed(
            &[application("a1", at(2, 0))],
            &[job("j1", "Initech", at(1, 0))],
        );

        assert_eq!(feed[0].target, "job-for-a1");
        assert_eq!(feed[0].content, "Application submitted");
        assert_eq!(feed[1].target, "Initech");
        assert_eq!(feed[1].content, "Job found");
    }

    #[test]
    fn success_rate_rounds_to_one_decimal_with_percent_sign() {
        assert_eq!(format_success_rate(33.333), "33.3%");
        assert_eq!(format_success_rate(0.0), "0.0%");
        assert_eq!(format_success_rate(100.0), "100.0%");
        assert_eq!(format_success_rate(66.66), "66.7%");
    }
}
