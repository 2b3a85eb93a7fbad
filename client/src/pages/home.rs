//! Landing page with install command and quick-start deep links.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::state::docs::SECTION_QUERY_PARAM;

#[derive(Clone, Copy)]
struct QuickStep {
    label: &'static str,
    command: &'static str,
    section: &'static str,
}

const QUICK_STEPS: &[QuickStep] = &[
    QuickStep { label: "Initialize gorunn cli and follow setup", command: "gorunn init", section: "quickstart" },
    QuickStep { label: "Parse projects", command: "gorunn parse", section: "quickstart" },
    QuickStep { label: "Build all projects", command: "gorunn build --app all", section: "commands" },
];

const FEATURES: &[(&str, &str)] = &[
    (
        "Supported Services",
        "gorunn supports MySQL, PostgreSQL, Opensearch, Chroma and Redis databases. \
         From the language side, Python, PHP and NextJS (node) are supported.",
    ),
    (
        "Collaboration",
        "gorunn provides an easy way to roll out organisation-wide and share the project \
         stack and secrets with other team members.",
    ),
    ("AI Powered", "gorunn brings AI coworking to the next level with Aider on OpenAI or Claude LLM."),
];

/// Link into the docs viewer with a preselected section.
fn docs_deep_link(section_id: &str) -> String {
    format!("/docs?{SECTION_QUERY_PARAM}={section_id}")
}

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <SiteHeader/>

            <section class="home-page__hero">
                <h1 class="home-page__title">"GORUNN"</h1>
                <p class="home-page__tagline">"Local Develop Environment Manager"</p>
                <p class="home-page__lead">
                    "gorunn sets up and manages dockerized local environment with all your projects in single stack."
                </p>
                <pre class="home-page__install"><code>"pip install gorunn"</code></pre>
                <p class="home-page__hint">"Paste that in a macOS Terminal or Linux shell prompt."</p>
            </section>

            <section class="home-page__features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="home-page__feature">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="home-page__quickstart">
                <h2>"Quick Start"</h2>
                <ol>
                    {QUICK_STEPS
                        .iter()
                        .map(|step| {
                            view! {
                                <li>
                                    <a href=docs_deep_link(step.section)>{step.label}</a>
                                    <pre><code>"$ "{step.command}</code></pre>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>
        </div>
    }
}
