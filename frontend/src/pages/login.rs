use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::field::{Field, SubmitButton};
use crate::forms::{self, FormPhase, LoginForm};
use crate::session::BrowserStorage;
use crate::state::{AppState, PageEffects};

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let form = RwSignal::new(LoginForm::default());
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
        let api = state.api();
        let effects = effects.clone();
        spawn_local(async move {
            let outcome = forms::login(&api, &BrowserStorage, &input).await;
            phase.set(forms::settle(&effects, outcome));
        });
    };

    view! {
        <section class="form-page">
            <h1>"Login"</h1>
            <form on:submit=on_submit>
                <Field
                    label="Email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=move |v: String| form.update(|f| f.email = v)
                    disabled=busy
                />
                <Field
                    label="Password"
                    kind="password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=move |v: String| form.update(|f| f.password = v)
                    disabled=busy
                />
                <SubmitButton label="Log In" busy_label="Logging in..." busy=busy />
            </form>
            <p class="form-footer">
                "Don't have an account? " <A href="/signup">"Sign Up"</A>
            </p>
        </section>
    }
}
