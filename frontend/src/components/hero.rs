use leptos::prelude::*;
use leptos_router::components::A;

/// Banner at the top of the home page.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Find your next place to stay"</h1>
            <p>"Browse amazing homes and experiences across the world"</p>
            <div class="hero-actions">
                <A href="/places/add">
                    <span class="btn btn-outline">"List Your Place"</span>
                </A>
            </div>
        </section>
    }
}
