//! GitHub star-count link with loading and link-only fallback states.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each mount owns a fresh `MetricState` and issues one request to the GitHub
//! API from the browser. Failures are logged and the widget degrades to a
//! plain link; it never shows a stale or partial number.

#[cfg(test)]
#[path = "github_stars_test.rs"]
mod github_stars_test;

use leptos::prelude::*;

use crate::net::github::{GITHUB_REPO, repo_html_url};
use crate::state::metric::{MetricPhase, MetricState};

/// What the widget renders for a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StarsView {
    /// Skeleton placeholder, no link.
    Placeholder,
    /// Plain repository link without a count.
    Link,
    /// Repository link with the star-count pill.
    Pill { count: u64 },
}

pub(crate) fn stars_view(phase: &MetricPhase) -> StarsView {
    match phase {
        MetricPhase::Loading => StarsView::Placeholder,
        MetricPhase::Error { .. } => StarsView::Link,
        MetricPhase::Ready { value } => StarsView::Pill { count: *value },
    }
}

/// Header link to the example-projects repository with its star count.
#[component]
pub fn GitHubStars() -> impl IntoView {
    let state = RwSignal::new(MetricState::default());
    let href = repo_html_url(GITHUB_REPO);

    #[cfg(feature = "hydrate")]
    {
        if state.try_update(MetricState::begin_fetch).unwrap_or(false) {
            leptos::task::spawn_local(async move {
                let result = crate::net::github::fetch_stargazers(GITHUB_REPO).await;
                if let Err(e) = &result {
                    log::warn!("star count unavailable for {GITHUB_REPO}: {e}");
                }
                // The widget may have unmounted while the request was in flight.
                let _ = state.try_update(|s| s.resolve(result));
            });
        }
    }

    view! {
        {move || match state.with(|s| stars_view(&s.phase)) {
            StarsView::Placeholder => {
                view! {
                    <div class="github-stars github-stars--loading" aria-busy="true">
                        <div class="github-stars__skeleton"></div>
                    </div>
                }
                    .into_any()
            }
            StarsView::Link => {
                view! {
                    <a class="github-stars github-stars--fallback" href=href.clone()>
                        "GitHub"
                    </a>
                }
                    .into_any()
            }
            StarsView::Pill { count } => {
                view! {
                    <a class="github-stars" href=href.clone()>
                        <span class="github-stars__logo" aria-hidden="true"></span>
                        <span class="github-stars__label">"Code"</span>
                        <span class="github-stars__pill">
                            <span class="github-stars__star" aria-hidden="true">"★"</span>
                            <span class="github-stars__count">{count}</span>
                        </span>
                    </a>
                }
                    .into_any()
            }
        }}
    }
}
