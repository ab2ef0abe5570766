//! Client-side conversation state: the current diagram plus the turns replayed
//! to the server on every refinement.
//!
//! Each request is tagged with a token. Only the latest token may change the
//! session, so a response that lands after `reset()` (or after a newer request
//! started) is reported as stale and dropped.

use crate::models::{ConversationTurn, GenerateRequest, GenerateResponse};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No diagram generated yet.
    Initial,
    /// At least one successful generation.
    HasDiagram,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    EmptyPrompt,
    Busy,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::EmptyPrompt => f.write_str("Please enter a description for your diagram"),
            SessionError::Busy => f.write_str("A diagram is already being generated"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Stale,
}

#[derive(Clone, Debug, PartialEq)]
struct Pending {
    token: RequestToken,
    prompt: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagramSession {
    history: Vec<ConversationTurn>,
    mermaid_code: Option<String>,
    pending: Option<Pending>,
    issued: u64,
}

impl DiagramSession {
    pub fn phase(&self) -> Phase {
        if self.mermaid_code.is_some() {
            Phase::HasDiagram
        } else {
            Phase::Initial
        }
    }

    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    pub fn mermaid_code(&self) -> Option<&str> {
        self.mermaid_code.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a request: a first generation in `Initial`, a refinement in `HasDiagram`.
    /// Refinements carry the full history; first generations carry none.
    pub fn begin(
        &mut self,
        diagram_type: &str,
        prompt: &str,
    ) -> Result<(RequestToken, GenerateRequest), SessionError> {
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        if prompt.trim().is_empty() {
            return Err(SessionError::EmptyPrompt);
        }

        self.issued += 1;
        let token = RequestToken(self.issued);
        self.pending = Some(Pending { token, prompt: prompt.to_string() });

        let history = match self.phase() {
            Phase::Initial => Vec::new(),
            Phase::HasDiagram => self.history.clone(),
        };
        let request = GenerateRequest {
            diagram_type: diagram_type.to_string(),
            description: prompt.to_string(),
            history,
        };
        Ok((token, request))
    }

    /// Applies a successful response if `token` is still the outstanding one.
    pub fn complete(&mut self, token: RequestToken, response: &GenerateResponse) -> Outcome {
        let Some(pending) = self.take_pending(token) else {
            return Outcome::Stale;
        };

        if self.phase() == Phase::Initial {
            self.history.clear();
        }
        self.history.push(ConversationTurn::user(pending.prompt));
        self.history.push(ConversationTurn::assistant(response.full_response.clone()));
        self.mermaid_code = Some(response.mermaid_code.clone());
        Outcome::Applied
    }

    /// Clears the outstanding request; history and diagram are left untouched.
    pub fn fail(&mut self, token: RequestToken) -> Outcome {
        match self.take_pending(token) {
            Some(_) => Outcome::Applied,
            None => Outcome::Stale,
        }
    }

    /// Back to `Initial`. Any in-flight request becomes stale.
    pub fn reset(&mut self) {
        self.history.clear();
        self.mermaid_code = None;
        self.pending = None;
    }

    fn take_pending(&mut self, token: RequestToken) -> Option<Pending> {
        if self.pending.as_ref().is_some_and(|p| p.token == token) {
            self.pending.take()
        } else {
            None
        }
    }
}
