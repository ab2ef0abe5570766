use leptos::ev;
use leptos::prelude::*;

use crate::session::Phase;
use crate::state::AppState;

/// Diagram-type selector, prompt input and the generate/refine action.
#[component]
pub fn DiagramForm() -> impl IntoView {
    let state = expect_context::<AppState>();

    let busy = {
        let state = state.clone();
        move || state.is_generating()
    };
    let initial = {
        let state = state.clone();
        move || state.phase() == Phase::Initial
    };

    let on_submit = {
        let state = state.clone();
        move |_: ev::MouseEvent| state.submit()
    };
    let on_reset = {
        let state = state.clone();
        move |_: ev::MouseEvent| state.reset()
    };

    let selector_locked = {
        let (busy, initial) = (busy.clone(), initial.clone());
        move || busy() || !initial()
    };
    let reset_button = {
        let initial = initial.clone();
        move || {
            (!initial()).then(|| {
                let on_reset = on_reset.clone();
                view! { <button class="btn outline" on:click=on_reset>"Start Over"</button> }
            })
        }
    };
    let button_disabled = busy.clone();
    let button_label = {
        let (busy, initial) = (busy.clone(), initial.clone());
        move || {
            if busy() {
                "Generating..."
            } else if initial() {
                "Generate Diagram"
            } else {
                "Refine Diagram"
            }
        }
    };

    view! {
        <section class="card diagram-form">
            <div class="card-header">
                <h1>"Create " <strong>"any"</strong> " diagram"</h1>
                {reset_button}
            </div>

            <div class="field inline">
                <label for="diagram-type">"Diagram Type:"</label>
                <select
                    id="diagram-type"
                    prop:value=move || state.diagram_type.get()
                    on:change=move |ev| state.set_diagram_type.set(event_target_value(&ev))
                    disabled=selector_locked
                >
                    <For
                        each=move || state.diagram_types.get()
                        key=|ty| ty.clone()
                        children=move |ty: String| {
                            let value = ty.clone();
                            let label = ty.clone();
                            let is_selected = move || state.diagram_type.get() == ty;
                            view! { <option value=value selected=is_selected>{label}</option> }
                        }
                    />
                </select>
            </div>

            {move || {
                let busy = busy.clone();
                if initial() {
                    view! {
                        <div class="field">
                            <textarea
                                id="description"
                                rows="6"
                                placeholder="Describe the diagram you want to create..."
                                prop:value=move || state.description.get()
                                on:input=move |ev| state.set_description.set(event_target_value(&ev))
                                disabled=busy
                            />
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="field">
                            <label for="follow-up">"Refine Your Diagram"</label>
                            <textarea
                                id="follow-up"
                                rows="6"
                                placeholder="Enter a follow-up prompt to refine the diagram..."
                                prop:value=move || state.follow_up.get()
                                on:input=move |ev| state.set_follow_up.set(event_target_value(&ev))
                                disabled=busy
                            />
                        </div>
                    }
                    .into_any()
                }
            }}

            {move || {
                state.error.get().map(|err| {
                    view! {
                        <div class="error-panel">
                            <p class="error-title">"Error"</p>
                            <p>{err}</p>
                        </div>
                    }
                })
            }}

            <button class="btn primary" on:click=on_submit disabled=button_disabled>
                {button_label}
            </button>
        </section>
    }
}
