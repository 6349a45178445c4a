use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::DEFAULT_IMAGE;
use crate::models::Place;

/// Card linking to a place's detail page.
#[component]
pub fn PlaceCard(place: Place) -> impl IntoView {
    let href = format!("/places/{}", place.id);
    let image = place.image_url.unwrap_or_else(|| DEFAULT_IMAGE.to_string());

    view! {
        <A href=href>
            <article class="place-card">
                <img src=image alt=place.title.clone() />
                <div class="place-card-body">
                    <h3>{place.title}</h3>
                    <p class="clamp-2">{place.description}</p>
                </div>
            </article>
        </A>
    }
}
