use leptos::prelude::*;

#[component]
pub fn SearchBar(query: ReadSignal<String>, set_query: WriteSignal<String>) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="Search places..."
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
        </div>
    }
}
