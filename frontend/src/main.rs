mod api;
mod components;
mod config;
mod errors;
mod forms;
mod http;
mod listing;
mod models;
mod pages;
mod session;
mod state;
mod validation;

#[cfg(test)]
mod testing;

use leptos::mount::mount_to_body;
use leptos::prelude::*;
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::path;

use components::navbar::Navbar;
use components::toasts::Toasts;
use pages::add_place::AddPlacePage;
use pages::add_review::AddReviewPage;
use pages::home::HomePage;
use pages::login::LoginPage;
use pages::place_detail::PlaceDetailPage;
use pages::signup::SignupPage;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    AppState::provide();

    // Static segments are listed before `:id` so `/places/add` is not
    // taken for a place id.
    view! {
        <Router>
            <Navbar />
            <Toasts />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/signup") view=SignupPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/places/add") view=AddPlacePage />
                    <Route path=path!("/places/:id/add-review") view=AddReviewPage />
                    <Route path=path!("/places/:id") view=PlaceDetailPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="status">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <A href="/">"Back to all places"</A>
        </section>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
