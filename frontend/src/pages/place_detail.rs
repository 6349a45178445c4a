use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::config::DEFAULT_IMAGE;
use crate::listing::{LoadState, load_place};
use crate::models::{Place, Review};
use crate::state::AppState;

/// `/places/:id`. A failed fetch shows an error with a retry button.
#[component]
pub fn PlaceDetailPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let params = use_params_map();
    let (place, set_place) = signal(LoadState::<Place>::Loading);
    let (attempt, set_attempt) = signal(0u32);

    Effect::new(move |_| {
        let id = params.read().get("id").unwrap_or_default();
        attempt.track();
        set_place.set(LoadState::Loading);

        let api = state.api();
        spawn_local(async move {
            set_place.set(load_place(&api, &id).await);
        });
    });

    let retry = move |_| set_attempt.update(|n| *n += 1);

    view! {
        <section class="container">
            {move || match place.get() {
                LoadState::Loading => view! { <p class="status">"Loading..."</p> }.into_any(),
                LoadState::Failed(msg) => view! {
                    <div class="status error">
                        <p>{msg}</p>
                        <button class="btn" on:click=retry>"Retry"</button>
                    </div>
                }.into_any(),
                LoadState::Ready(place) => view! { <PlaceDetails place=place /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn PlaceDetails(place: Place) -> impl IntoView {
    let navigate = use_navigate();
    let review_path = format!("/places/{}/add-review", place.id);
    let on_add_review = move |_| navigate(&review_path, NavigateOptions::default());

    let image = place.image_url.clone().unwrap_or_else(|| DEFAULT_IMAGE.to_string());
    let coordinates = format!(
        "📍 ({}, {})",
        coordinate(place.latitude),
        coordinate(place.longitude)
    );
    let price = place.price.map(|p| format!("${p} / night"));

    let owner = place.owner.clone().map(|owner| {
        view! {
            <p class="owner-name">{owner.full_name()}</p>
            <p class="muted">{owner.email}</p>
        }
    });

    let amenities = if place.amenities.is_empty() {
        view! { <p class="muted">"No amenities listed."</p> }.into_any()
    } else {
        view! {
            <div class="amenity-grid">
                {place.amenities
                    .iter()
                    .map(|name| view! { <div class="amenity">{name.clone()}</div> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    let reviews = if place.reviews.is_empty() {
        view! { <p class="muted">"No reviews yet."</p> }.into_any()
    } else {
        view! {
            <div class="review-list">
                {place.reviews
                    .into_iter()
                    .map(|review| view! { <ReviewItem review=review /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <img class="banner" src=image alt=place.title.clone() />

        <header class="detail-header">
            <h1>{place.title}</h1>
            <div class="detail-meta">
                {owner}
                <p class="muted">{coordinates}</p>
                {price.map(|p| view! { <p class="price">{p}</p> })}
            </div>
        </header>

        <section class="detail-section">
            <h2>"Description"</h2>
            <p>{place.description}</p>
        </section>

        <section class="detail-section">
            <h2>"Amenities"</h2>
            {amenities}
        </section>

        <section class="detail-section">
            <h2>"Reviews"</h2>
            {reviews}
        </section>

        <button class="btn btn-primary" on:click=on_add_review>"Add Review"</button>
    }
}

#[component]
fn ReviewItem(review: Review) -> impl IntoView {
    view! {
        <article class="review">
            <div class="review-head">
                <strong>{review.author_name()}</strong>
                <span class="stars">{format!("⭐ {}", review.rating)}</span>
            </div>
            <p>{review.text}</p>
        </article>
    }
}

fn coordinate(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "?".to_string())
}
