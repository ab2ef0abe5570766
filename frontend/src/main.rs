mod api;
mod components;
mod export;
mod models;
mod render;
mod session;
mod state;

use leptos::ev;
use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::display::DiagramDisplay;
use components::form::DiagramForm;
use components::toast::ToastView;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let state = AppState::provide();

    state.load_diagram_types();

    // Escape leaves fullscreen
    let set_fullscreen = state.set_fullscreen;
    let _ = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            set_fullscreen.set(false);
        }
    });

    view! {
        <main class="app-container">
            <DiagramForm />
            <DiagramDisplay />
            <ToastView />
        </main>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
