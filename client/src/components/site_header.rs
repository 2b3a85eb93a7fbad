//! Fixed top bar shared by every page.

use leptos::prelude::*;

use crate::components::github_stars::GitHubStars;

/// Brand link, page links and star-count widget. `children` render at
/// the trailing edge (the docs page puts its sidebar toggle there).
#[component]
pub fn SiteHeader(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="site-header__nav">
                <a href="/" class="site-header__brand">
                    <img src="/images/gorunn_logo_nobg.png" alt="Gorunn Logo" width="32" height="32"/>
                    <span class="site-header__name">"Gorunn"</span>
                </a>
                <span class="site-header__spacer"></span>
                <a href="/docs" class="site-header__link">"Documentation"</a>
                <a href="/donate" class="site-header__link">"Donate"</a>
                <GitHubStars/>
                {children.map(|c| c())}
            </nav>
        </header>
    }
}
