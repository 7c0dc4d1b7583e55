//! First-visit welcome dialog offering the coach tour.

use leptos::prelude::*;

const TOUR_TOPICS: [&str; 3] =
    ["Browse and search for assets", "Save your favorite items", "Request access to restricted content"];

#[component]
pub fn OnboardingModal(on_start: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="onboarding__backdrop">
            <div class="onboarding" role="dialog" aria-modal="true" aria-label="Welcome to the Library!">
                <button class="onboarding__close" on:click=move |_| on_close.run(()) title="Close">
                    "✕"
                </button>
                <div class="onboarding__glyph" aria-hidden="true">
                    "✦"
                </div>
                <h3 class="onboarding__title">"Welcome to the Library!"</h3>
                <p class="onboarding__intro">
                    "Let's take a quick tour to help you get the most out of our platform. We'll show you how to:"
                </p>
                <ul class="onboarding__topics">
                    {TOUR_TOPICS.into_iter().map(|topic| view! { <li>{topic}</li> }).collect_view()}
                </ul>
                <div class="onboarding__actions">
                    <button class="btn btn--primary" on:click=move |_| on_start.run(())>
                        "Start Tour"
                    </button>
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Skip for Now"
                    </button>
                </div>
            </div>
        </div>
    }
}
