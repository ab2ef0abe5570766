use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::api;
use crate::export;
use crate::session::{DiagramSession, Outcome, Phase, SessionError};

const DEFAULT_DIAGRAM_TYPE: &str = "Flowchart";
const TOAST_DURATION_MS: u32 = 3_000;
const PNG_FILE_NAME: &str = "diagram.png";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Info => "toast info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Shared application state, provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    // --- Read signals ---
    pub diagram_types: ReadSignal<Vec<String>>,
    pub default_type: ReadSignal<String>,
    pub diagram_type: ReadSignal<String>,
    pub description: ReadSignal<String>,
    pub follow_up: ReadSignal<String>,
    pub session: ReadSignal<DiagramSession>,
    pub error: ReadSignal<Option<String>>,
    pub toast: ReadSignal<Option<Toast>>,
    pub fullscreen: ReadSignal<bool>,

    // --- Write signals ---
    pub set_diagram_types: WriteSignal<Vec<String>>,
    pub set_default_type: WriteSignal<String>,
    pub set_diagram_type: WriteSignal<String>,
    pub set_description: WriteSignal<String>,
    pub set_follow_up: WriteSignal<String>,
    pub set_session: WriteSignal<DiagramSession>,
    pub set_error: WriteSignal<Option<String>>,
    pub set_toast: WriteSignal<Option<Toast>>,
    pub set_fullscreen: WriteSignal<bool>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (diagram_types, set_diagram_types) = signal(vec![DEFAULT_DIAGRAM_TYPE.to_string()]);
        let (default_type, set_default_type) = signal(DEFAULT_DIAGRAM_TYPE.to_string());
        let (diagram_type, set_diagram_type) = signal(DEFAULT_DIAGRAM_TYPE.to_string());
        let (description, set_description) = signal(String::new());
        let (follow_up, set_follow_up) = signal(String::new());
        let (session, set_session) = signal(DiagramSession::default());
        let (error, set_error) = signal(None::<String>);
        let (toast, set_toast) = signal(None::<Toast>);
        let (fullscreen, set_fullscreen) = signal(false);

        let state = Self {
            diagram_types,
            default_type,
            diagram_type,
            description,
            follow_up,
            session,
            error,
            toast,
            fullscreen,
            set_diagram_types,
            set_default_type,
            set_diagram_type,
            set_description,
            set_follow_up,
            set_session,
            set_error,
            set_toast,
            set_fullscreen,
        };

        provide_context(state.clone());
        state
    }

    pub fn phase(&self) -> Phase {
        self.session.with(|s| s.phase())
    }

    pub fn is_generating(&self) -> bool {
        self.session.with(|s| s.is_busy())
    }

    /// Load the diagram-type registry from the backend.
    pub fn load_diagram_types(&self) {
        let state = self.clone();
        spawn_local(async move {
            match api::fetch_diagram_types().await {
                Ok(types) => {
                    if !types.diagram_types.contains(&state.diagram_type.get_untracked()) {
                        state.set_diagram_type.set(types.default_type.clone());
                    }
                    state.set_default_type.set(types.default_type);
                    state.set_diagram_types.set(types.diagram_types);
                }
                Err(e) => {
                    log::error!("Failed to fetch diagram types: {e}");
                    state.set_error.set(Some(e));
                }
            }
        });
    }

    /// Generate a first diagram or refine the current one, depending on the phase.
    pub fn submit(&self) {
        let phase = self.session.with_untracked(|s| s.phase());
        let prompt = match phase {
            Phase::Initial => self.description.get_untracked(),
            Phase::HasDiagram => self.follow_up.get_untracked(),
        };
        let diagram_type = self.diagram_type.get_untracked();

        let mut started = Err(SessionError::Busy);
        self.set_session.update(|s| started = s.begin(&diagram_type, &prompt));
        let (token, request) = match started {
            Ok(started) => started,
            Err(SessionError::EmptyPrompt) => {
                let message = match phase {
                    Phase::Initial => SessionError::EmptyPrompt.to_string(),
                    Phase::HasDiagram => "Please enter a follow-up prompt".to_string(),
                };
                self.show_toast(ToastKind::Error, message);
                return;
            }
            Err(SessionError::Busy) => {
                log::debug!("Ignoring submit while a request is outstanding");
                return;
            }
        };
        self.set_error.set(None);

        let state = self.clone();
        spawn_local(async move {
            let result = api::generate(&request).await.and_then(|resp| {
                if resp.mermaid_code.trim().is_empty() {
                    Err("No valid Mermaid code was generated. Please try again with a different description."
                        .to_string())
                } else {
                    Ok(resp)
                }
            });

            match result {
                Ok(resp) => {
                    let mut outcome = Outcome::Stale;
                    state.set_session.update(|s| outcome = s.complete(token, &resp));
                    if outcome == Outcome::Stale {
                        log::debug!("Discarding response for a reset session");
                        return;
                    }
                    let message = match phase {
                        Phase::Initial => "Diagram generated successfully",
                        Phase::HasDiagram => {
                            state.set_follow_up.set(String::new());
                            "Diagram refined successfully"
                        }
                    };
                    state.show_toast(ToastKind::Success, message);
                }
                Err(e) => {
                    let mut outcome = Outcome::Stale;
                    state.set_session.update(|s| outcome = s.fail(token));
                    if outcome == Outcome::Stale {
                        log::debug!("Discarding failure for a reset session: {e}");
                        return;
                    }
                    log::error!("Generation failed: {e}");
                    state.set_error.set(Some(e.clone()));
                    state.show_toast(ToastKind::Error, e);
                }
            }
        });
    }

    /// Back to a blank form. A request still in flight is ignored when it lands.
    pub fn reset(&self) {
        self.set_session.update(|s| s.reset());
        self.set_diagram_type.set(self.default_type.get_untracked());
        self.set_description.set(String::new());
        self.set_follow_up.set(String::new());
        self.set_error.set(None);
        self.set_fullscreen.set(false);
        self.show_toast(ToastKind::Info, "Form has been reset");
    }

    /// Copy the current Mermaid code to the clipboard.
    pub fn copy_code(&self) {
        let Some(code) = self.session.with_untracked(|s| s.mermaid_code().map(str::to_owned)) else {
            return;
        };
        let state = self.clone();
        spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let written = JsFuture::from(window.navigator().clipboard().write_text(&code)).await;
            match written {
                Ok(_) => state.show_toast(ToastKind::Success, "Mermaid code copied to clipboard"),
                Err(e) => {
                    log::error!("Clipboard write failed: {e:?}");
                    state.show_toast(ToastKind::Error, "Failed to copy code");
                }
            }
        });
    }

    /// Download the rendered diagram as a PNG.
    pub fn export_png(&self) {
        let state = self.clone();
        spawn_local(async move {
            match export::export_png(PNG_FILE_NAME).await {
                Ok(()) => state.show_toast(ToastKind::Success, "Diagram exported as PNG"),
                Err(e) => {
                    log::error!("PNG export failed: {e}");
                    state.show_toast(ToastKind::Error, format!("Failed to export PNG: {e}"));
                }
            }
        });
    }

    /// Show a toast that dismisses itself unless replaced by a newer one.
    pub fn show_toast(&self, kind: ToastKind, message: impl Into<String>) {
        let id = js_sys::Date::now() as u64;
        self.set_toast.set(Some(Toast { id, kind, message: message.into() }));

        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            set_toast.update(|current| {
                if current.as_ref().is_some_and(|t| t.id == id) {
                    *current = None;
                }
            });
        });
    }
}
