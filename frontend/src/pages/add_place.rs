use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::field::{Field, SubmitButton};
use crate::forms::{self, FormPhase, PlaceForm};
use crate::listing::LoadState;
use crate::models::Amenity;
use crate::state::{AppState, PageEffects};

/// `/places/add`. The owner is the signed-in user.
#[component]
pub fn AddPlacePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let form = RwSignal::new(PlaceForm::default());
    let phase = RwSignal::new(FormPhase::Idle);
    let busy = Signal::derive(move || phase.get().is_busy());
    let effects = PageEffects::new(state, use_navigate());

    let (amenities, set_amenities) = signal(LoadState::<Vec<Amenity>>::Loading);
    let api = state.api();
    spawn_local(async move {
        let loaded = match api.list_amenities().await {
            Ok(list) => LoadState::Ready(list),
            Err(e) => {
                log::error!("Failed to fetch amenities: {e}");
                LoadState::Failed("Amenities are unavailable right now.".to_string())
            }
        };
        set_amenities.set(loaded);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !phase.get_untracked().can_submit() {
            return;
        }
        phase.set(FormPhase::Submitting);

        let input = form.get_untracked();
        let session = state.session.get_untracked();
        let api = state.api();
        let effects = effects.clone();
        spawn_local(async move {
            let outcome = forms::create_place(&api, session.as_ref(), &input).await;
            phase.set(forms::settle(&effects, outcome));
        });
    };

    view! {
        <section class="form-page">
            <h1>"List Your Place"</h1>
            <Show when=move || state.session.with(Option::is_none)>
                <p class="banner-warning">
                    "You need to " <A href="/login">"log in"</A> " before listing a place."
                </p>
            </Show>
            <form on:submit=on_submit>
                <Field
                    label="Title"
                    value=Signal::derive(move || form.with(|f| f.title.clone()))
                    on_input=move |v: String| form.update(|f| f.title = v)
                    disabled=busy
                />
                <Field
                    label="Description"
                    multiline=true
                    value=Signal::derive(move || form.with(|f| f.description.clone()))
                    on_input=move |v: String| form.update(|f| f.description = v)
                    disabled=busy
                />
                <Field
                    label="Price"
                    kind="number"
                    min="0"
                    step="any"
                    value=Signal::derive(move || form.with(|f| f.price.clone()))
                    on_input=move |v: String| form.update(|f| f.price = v)
                    disabled=busy
                />
                <Field
                    label="Latitude"
                    kind="number"
                    step="any"
                    value=Signal::derive(move || form.with(|f| f.latitude.clone()))
                    on_input=move |v: String| form.update(|f| f.latitude = v)
                    disabled=busy
                />
                <Field
                    label="Longitude"
                    kind="number"
                    step="any"
                    value=Signal::derive(move || form.with(|f| f.longitude.clone()))
                    on_input=move |v: String| form.update(|f| f.longitude = v)
                    disabled=busy
                />

                <fieldset class="amenity-picker">
                    <legend>"Amenities"</legend>
                    {move || match amenities.get() {
                        LoadState::Loading => view! { <p class="muted">"Loading amenities..."</p> }.into_any(),
                        LoadState::Failed(msg) => view! { <p class="muted">{msg}</p> }.into_any(),
                        LoadState::Ready(list) if list.is_empty() => {
                            view! { <p class="muted">"No amenities available."</p> }.into_any()
                        }
                        LoadState::Ready(list) => list
                            .into_iter()
                            .map(|amenity| view! { <AmenityOption amenity=amenity form=form busy=busy /> })
                            .collect_view()
                            .into_any(),
                    }}
                </fieldset>

                <SubmitButton label="Create Place" busy_label="Creating..." busy=busy />
            </form>
        </section>
    }
}

#[component]
fn AmenityOption(amenity: Amenity, form: RwSignal<PlaceForm>, busy: Signal<bool>) -> impl IntoView {
    let id = amenity.id;
    let checked_id = id.clone();

    view! {
        <label class="checkbox">
            <input
                type="checkbox"
                prop:checked=move || form.with(|f| f.amenities.contains(&checked_id))
                on:change=move |_| form.update(|f| f.toggle_amenity(&id))
                disabled=move || busy.get()
            />
            {amenity.name}
        </label>
    }
}
