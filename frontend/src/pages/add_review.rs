use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::field::{Field, SubmitButton};
use crate::forms::{self, FormPhase, ReviewForm};
use crate::state::{AppState, PageEffects};

/// `/places/:id/add-review`. The reviewer is the signed-in user.
#[component]
pub fn AddReviewPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let params = use_params_map();
    let place_id = move || params.read().get("id").unwrap_or_default();

    let form = RwSignal::new(ReviewForm::default());
    let phase = RwSignal::new(FormPhase::Idle);
    let busy = Signal::derive(move || phase.get().is_busy());
    let effects = PageEffects::new(state, use_navigate());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !phase.get_untracked().can_submit() {
            return;
        }
        phase.set(FormPhase::Submitting);

        let input = form.get_untracked();
        let session = state.session.get_untracked();
        let place = params.with_untracked(|p| p.get("id").unwrap_or_default());
        let api = state.api();
        let effects = effects.clone();
        spawn_local(async move {
            let outcome = forms::submit_review(&api, session.as_ref(), &place, &input).await;
            phase.set(forms::settle(&effects, outcome));
        });
    };

    view! {
        <section class="form-page">
            <h1>"Add a Review"</h1>
            <Show when=move || state.session.with(Option::is_none)>
                <p class="banner-warning">
                    "You need to " <A href="/login">"log in"</A> " before leaving a review."
                </p>
            </Show>
            <form on:submit=on_submit>
                <Field
                    label="Review Text"
                    multiline=true
                    value=Signal::derive(move || form.with(|f| f.text.clone()))
                    on_input=move |v: String| form.update(|f| f.text = v)
                    disabled=busy
                />
                <Field
                    label="Rating (1-5)"
                    kind="number"
                    min="1"
                    max="5"
                    step="1"
                    value=Signal::derive(move || form.with(|f| f.rating.clone()))
                    on_input=move |v: String| form.update(|f| f.rating = v)
                    disabled=busy
                />
                <SubmitButton label="Submit Review" busy_label="Submitting..." busy=busy />
            </form>
            <p class="form-footer">
                <A href=move || format!("/places/{}", place_id())>"Back to place"</A>
            </p>
        </section>
    }
}
