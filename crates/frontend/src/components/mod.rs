//! Reusable UI components.

mod activity_feed;
mod error_banner;
mod loading;
mod stat_card;

pub use activity_feed::ActivityFeed;
pub use error_banner::ErrorBanner;
pub use loading::Loading;
pub use stat_card::StatCard;
