use leptos::prelude::*;

use crate::state::AppState;

/// The most recent notification, if it has not timed out yet.
#[component]
pub fn ToastView() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        {move || {
            state.toast.get().map(|toast| {
                let set_toast = state.set_toast;
                view! {
                    <div class=toast.kind.css_class() role="status" on:click=move |_| set_toast.set(None)>
                        {toast.message}
                    </div>
                }
            })
        }}
    }
}
