//! Recent-activity feed component.

use yew::prelude::*;

use crate::feed::ActivityEntry;

/// Properties for ActivityFeed component.
#[derive(Properties, PartialEq)]
pub struct ActivityFeedProps {
    pub entries: Vec<ActivityEntry>,
}

/// Recent-activity list, newest entry first.
#[function_component(ActivityFeed)]
pub fn activity_feed(props: &ActivityFeedProps) -> Html {
    if props.entries.is_empty() {
        return html! {
            <p class="empty-state">{"No recent activity."}</p>
        };
    }

    html! {
        <div class="activity-list">
            { for props.entries.iter().map(|entry| {
                html! {
                    <div class={entry.category.css_class()} key={entry.id.clone()}>
                        <span class="activity-icon">{ entry.category.icon() }</span>
                        <div class="activity-info">
                            <div class="activity-content">{ &entry.content }</div>
                            <div class="activity-target">{ &entry.target }</div>
                        </div>
                        <div class="activity-date">
                            { entry.date.format("%Y-%m-%d %H:%M").to_string() }
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
