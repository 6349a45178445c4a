use leptos::prelude::*;

/// Labelled, required input bound to a piece of form state.
#[component]
pub fn Field(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] min: Option<&'static str>,
    #[prop(optional)] max: Option<&'static str>,
    #[prop(optional)] step: Option<&'static str>,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                required=true
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type=kind
                required=true
                min=min
                max=max
                step=step
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        }
        .into_any()
    };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            {input}
        </label>
    }
}

/// Submit control that is disabled and relabelled while the form is busy.
#[component]
pub fn SubmitButton(
    label: &'static str,
    busy_label: &'static str,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
            {move || if busy.get() { busy_label } else { label }}
        </button>
    }
}
