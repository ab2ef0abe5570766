use leptos::ev;
use leptos::prelude::*;

use crate::components::mermaid::MermaidDiagram;
use crate::state::AppState;

/// The generated diagram, either as an inline card or as a fullscreen modal.
#[component]
pub fn DiagramDisplay() -> impl IntoView {
    let state = expect_context::<AppState>();

    let code = Memo::new(move |_| {
        state.session.with(|s| s.mermaid_code().unwrap_or_default().to_string())
    });

    let on_copy = {
        let state = state.clone();
        move |_: ev::MouseEvent| state.copy_code()
    };
    let on_export = {
        let state = state.clone();
        move |_: ev::MouseEvent| state.export_png()
    };
    let set_fullscreen = state.set_fullscreen;

    let actions = move |fullscreen: bool| {
        let (on_copy, on_export) = (on_copy.clone(), on_export.clone());
        let toggle = if fullscreen {
            view! { <button class="btn ghost" on:click=move |_| set_fullscreen.set(false)>"Exit Full Screen"</button> }
                .into_any()
        } else {
            view! { <button class="btn outline" on:click=move |_| set_fullscreen.set(true)>"Full Screen"</button> }
                .into_any()
        };
        view! {
            <div class="actions">
                {toggle}
                <button class="btn outline" on:click=on_copy>"Copy Code"</button>
                <button class="btn outline" on:click=on_export>"Download PNG"</button>
            </div>
        }
    };

    move || {
        if code.get().is_empty() {
            return ().into_any();
        }
        if state.fullscreen.get() {
            view! {
                <div
                    class="modal-backdrop"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| {
                        if ev.target() == ev.current_target() {
                            set_fullscreen.set(false);
                        }
                    }
                >
                    <div class="modal">
                        <div class="card-header">
                            <h2>"Generated Diagram"</h2>
                            {actions(true)}
                        </div>
                        <div class="modal-body">
                            <MermaidDiagram code=code fullscreen=true />
                        </div>
                    </div>
                </div>
            }
            .into_any()
        } else {
            view! {
                <section class="card diagram-display">
                    <div class="card-header">
                        <h2>"Generated Diagram"</h2>
                        {actions(false)}
                    </div>
                    <div class="diagram-frame">
                        <MermaidDiagram code=code fullscreen=false />
                    </div>
                </section>
            }
            .into_any()
        }
    }
}
