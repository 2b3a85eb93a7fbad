//! Donation page: wallet addresses for supporting the project.
//!
//! SYSTEM CONTEXT
//! ==============
//! On narrow layouts the header links collapse into a slide-in panel. The
//! panel owns its own `PanelState` and outside-pointer subscription, released
//! when the page unmounts.

#[cfg(test)]
#[path = "donate_test.rs"]
mod donate_test;

use leptos::html::{Button, Div};
use leptos::prelude::*;

use crate::components::github_stars::GitHubStars;
use crate::components::site_header::SiteHeader;
use crate::state::panel::PanelState;
use crate::util::outside_click::on_pointerdown_classified;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DonationAddress {
    label: &'static str,
    address: &'static str,
}

const DONATION_ADDRESSES: &[DonationAddress] = &[
    DonationAddress { label: "Ethereum (ETH)", address: "0x880C5a968C9f8F7F6993Fd8f298A69dC18297806" },
    DonationAddress { label: "Bitcoin (BTC)", address: "bc1q7jeec2wtj8vqajl0d3k3tuxqxhczpd0m0wq6tq" },
    DonationAddress { label: "Solana (SOL)", address: "6b7xQGtpsNVeSWe6sqt2fpyMTk2PRjqtWaAiDSHnaLhT" },
    DonationAddress { label: "Ripple (XRP)", address: "rM5TZbcQ1itN9yZM9cMVZbzNw3M2J21k2L" },
];

const TAGLINE: &str = "Keep the code coming. Every donation feeds the dream!";

/// Donation page.
#[component]
pub fn DonatePage() -> impl IntoView {
    let panel = RwSignal::new(PanelState::default());
    let panel_ref = NodeRef::<Div>::new();
    let toggle_ref = NodeRef::<Button>::new();

    on_pointerdown_classified(panel_ref, toggle_ref, move |target| {
        panel.maybe_update(|p| p.dismiss(target));
    });

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        panel.update(PanelState::toggle);
    };

    view! {
        <div class="donate-page">
            <SiteHeader>
                <button
                    class="donate-page__menu-toggle"
                    node_ref=toggle_ref
                    on:click=on_toggle
                    aria-label="Toggle menu"
                    aria-expanded=move || panel.with(|p| p.open).to_string()
                >
                    <span class="donate-page__menu-bar"></span>
                    <span class="donate-page__menu-bar"></span>
                    <span class="donate-page__menu-bar"></span>
                </button>
            </SiteHeader>

            <div
                class="donate-page__panel"
                class:donate-page__panel--open=move || panel.with(|p| p.open)
                node_ref=panel_ref
            >
                <GitHubStars/>
                <a href="/docs" class="donate-page__panel-link">"Docs"</a>
            </div>

            <main class="donate-page__content">
                <h1 class="donate-page__title">"Support Gorunn"</h1>
                <p class="donate-page__tagline">{TAGLINE}</p>
                <ul class="donate-page__addresses">
                    {DONATION_ADDRESSES
                        .iter()
                        .map(|entry| {
                            view! {
                                <li class="donate-page__address">
                                    <span class="donate-page__address-label">{entry.label}</span>
                                    <code class="donate-page__address-value">{entry.address}</code>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </main>
        </div>
    }
}
