use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::render::{self, DiagramLayout, RenderError};

/// Renders Mermaid source to SVG, re-rendering whenever `code` changes.
/// Failures replace the drawing with a panel showing the source and the raw error.
#[component]
pub fn MermaidDiagram(#[prop(into)] code: Signal<String>, fullscreen: bool) -> impl IntoView {
    let layout = DiagramLayout::for_fullscreen(fullscreen);
    let container = NodeRef::<html::Div>::new();
    let (error, set_error) = signal(None::<RenderError>);
    let (height, set_height) = signal(layout.container_height(None));
    // Bumped per render so a slow render cannot overwrite a newer one.
    let renders = StoredValue::new(0u64);

    Effect::new(move |_| {
        let code = code.get();
        let Some(el) = container.get() else {
            return;
        };
        renders.update_value(|n| *n += 1);
        let ticket = renders.get_value();

        spawn_local(async move {
            let result = render::render_into(&el, &code, layout).await;
            if renders.try_get_value() != Some(ticket) {
                return;
            }
            match result {
                Ok(rendered) => {
                    set_error.set(None);
                    set_height.set(layout.container_height(rendered.view_box));
                }
                Err(e) => {
                    log::error!("Error rendering diagram: {e}");
                    set_error.set(Some(e));
                    set_height.set(layout.container_height(None));
                }
            }
        });
    });

    let canvas_class = match layout {
        DiagramLayout::Inline => "diagram-canvas",
        DiagramLayout::Fullscreen => "diagram-canvas fullscreen",
    };

    view! {
        <div
            node_ref=container
            class=canvas_class
            style:height=move || height.get()
            style:display=move || if error.get().is_some() { "none" } else { "block" }
        ></div>
        {move || {
            error.get().map(|e| {
                view! {
                    <div class="render-error">
                        <p class="error-title">{e.title()}</p>
                        <p>"Failed to render the diagram. Please check the Mermaid syntax."</p>
                        <details open>
                            <summary>"View Mermaid Code"</summary>
                            <pre>{code.get_untracked()}</pre>
                        </details>
                        <details>
                            <summary>"Error Details"</summary>
                            <pre>{e.to_string()}</pre>
                        </details>
                    </div>
                }
            })
        }}
    }
}
