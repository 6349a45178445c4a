use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::AppState;

#[component]
pub fn Navbar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = StoredValue::new(use_navigate());

    let on_logout = move |_| {
        state.sign_out();
        navigate.with_value(|nav| nav("/", NavigateOptions::default()));
    };

    view! {
        <nav class="navbar">
            <A href="/">
                <span class="brand">"HBnB"</span>
            </A>
            <div class="nav-links">
                <A href="/places/add">
                    <span class="btn btn-ghost">"Add Place"</span>
                </A>
                <Show
                    when=move || state.session.with(Option::is_some)
                    fallback=|| view! {
                        <A href="/signup">
                            <span class="btn btn-primary">"Sign Up"</span>
                        </A>
                        <A href="/login">
                            <span class="btn">"Login"</span>
                        </A>
                    }
                >
                    <span class="greeting">
                        {move || {
                            state.session.with(|s| {
                                let name = s.as_ref().and_then(|s| s.first_name()).unwrap_or("there");
                                format!("Hi, {name}")
                            })
                        }}
                    </span>
                    <button class="btn" on:click=on_logout>"Logout"</button>
                </Show>
            </div>
        </nav>
    }
}
