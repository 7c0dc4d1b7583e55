//! Popover pointing at one element of the page during the coach tour.
//!
//! The popover anchors below the element tagged `data-coach="{target}"`.
//! When the anchor cannot be measured (server render, missing element) it
//! stays at the page origin.

#[cfg(test)]
#[path = "coach_mark_test.rs"]
mod coach_mark_test;

use catalog::CoachStep;
use leptos::prelude::*;

use crate::util::browser::coach_anchor;

/// "Step 2 of 4" for a zero-based `index`.
pub fn step_label(index: usize, total: usize) -> String {
    format!("Step {} of {total}", index + 1)
}

pub fn is_last_step(index: usize, total: usize) -> bool {
    index + 1 >= total
}

/// Inline position for a popover at page coordinates `(top, left)`.
pub fn position_style(anchor: Option<(f64, f64)>) -> String {
    let (top, left) = anchor.unwrap_or((0.0, 0.0));
    format!("top: {top}px; left: {left}px")
}

#[component]
pub fn CoachMark(
    step: &'static CoachStep,
    index: usize,
    total: usize,
    on_next: Callback<()>,
    on_previous: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let position = RwSignal::new(position_style(None));
    Effect::new(move || position.set(position_style(coach_anchor(step.target))));

    view! {
        <div class="coach-mark" role="dialog" aria-label=step.title style=move || position.get()>
            <div class="coach-mark__header">
                <h3 class="coach-mark__title">{step.title}</h3>
                <button class="coach-mark__close" on:click=move |_| on_close.run(()) title="Close tour">
                    "✕"
                </button>
            </div>
            <p class="coach-mark__description">{step.description}</p>
            <div class="coach-mark__footer">
                <span class="coach-mark__progress">{step_label(index, total)}</span>
                <Show when=move || { index > 0 }>
                    <button class="btn" on:click=move |_| on_previous.run(())>
                        "Previous"
                    </button>
                </Show>
                <Show
                    when=move || !is_last_step(index, total)
                    fallback=move || {
                        view! {
                            <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                                "Finish"
                            </button>
                        }
                    }
                >
                    <button class="btn btn--primary" on:click=move |_| on_next.run(())>
                        "Next"
                    </button>
                </Show>
            </div>
        </div>
    }
}
