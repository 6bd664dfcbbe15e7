//! Error banner component.

use yew::prelude::*;

/// Properties for ErrorBanner component.
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
}

/// Inline banner shown when a load failed, as opposed to data simply
/// not having arrived yet.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="card error-banner">
            <span class="error-banner-icon">{"\u{26A0}"}</span>
            <span>{ &props.message }</span>
        </div>
    }
}
