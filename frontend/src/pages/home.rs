use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::hero::Hero;
use crate::components::place_card::PlaceCard;
use crate::components::search_bar::SearchBar;
use crate::listing::{LoadState, filter_places, load_places};
use crate::models::Place;
use crate::state::AppState;

/// Landing page: every place, filtered as the user types.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (places, set_places) = signal(LoadState::<Vec<Place>>::Loading);
    let (query, set_query) = signal(String::new());

    // One fetch on mount, no retry.
    let api = state.api();
    spawn_local(async move {
        set_places.set(load_places(&api).await);
    });

    let status = Memo::new(move |_| places.with(LoadState::status));
    let filtered = Memo::new(move |_| {
        places.with(|s| match s {
            LoadState::Ready(all) => filter_places(all, &query.get()),
            _ => Vec::new(),
        })
    });

    view! {
        <Hero />
        <section class="container">
            {move || match status.get() {
                LoadState::Loading => view! {
                    <div class="status">
                        <div class="spinner"></div>
                        <p>"Loading..."</p>
                    </div>
                }.into_any(),
                LoadState::Failed(msg) => view! {
                    <p class="status error">{msg}</p>
                }.into_any(),
                LoadState::Ready(()) => view! {
                    <SearchBar query=query set_query=set_query />
                    <div class="place-grid">
                        {move || {
                            let list = filtered.get();
                            if list.is_empty() {
                                view! { <p>"No places found for your search."</p> }.into_any()
                            } else {
                                list.into_iter()
                                    .map(|place| view! { <PlaceCard place=place /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
