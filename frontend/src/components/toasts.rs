use leptos::prelude::*;

use crate::forms::NoticeKind;
use crate::state::AppState;

/// Stack of transient notices in the top-right corner. Click to dismiss.
#[component]
pub fn Toasts() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="toast-stack">
            <For
                each=move || state.toasts.get()
                key=|t| t.id
                let:toast
            >
                {
                    let class = match toast.notice.kind {
                        NoticeKind::Success => "toast toast-success",
                        NoticeKind::Error => "toast toast-error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status" on:click=move |_| state.dismiss(id)>
                            {toast.notice.text}
                        </div>
                    }
                }
            </For>
        </div>
    }
}
