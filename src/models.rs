use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One role-tagged message of a conversation, as replayed to the LLM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Body of `POST /api/generate`.
///
/// Absent `diagramType` / `description` keys deserialize as empty strings so the
/// service rejects them as missing fields rather than failing the JSON parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub diagram_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub mermaid_code: String,
    /// Verbatim LLM reply, appended by the client as the next assistant turn.
    pub full_response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramTypesResponse {
    pub diagram_types: Vec<String>,
    pub default_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_missing_keys() {
        let req: GenerateRequest = serde_json::from_str(r#"{"description":"a b c"}"#).unwrap();
        assert_eq!(req.diagram_type, "");
        assert_eq!(req.description, "a b c");
        assert!(req.history.is_empty());
    }

    #[test]
    fn history_roles_are_lowercase_on_the_wire() {
        let req: GenerateRequest = serde_json::from_str(
            r#"{"diagramType":"Flowchart","description":"x",
                "history":[{"role":"user","content":"A"},{"role":"assistant","content":"B"}]}"#,
        )
        .unwrap();
        assert_eq!(req.history, vec![ConversationTurn::user("A"), ConversationTurn::assistant("B")]);

        let json = serde_json::to_value(ConversationTurn::system("p")).unwrap();
        assert_eq!(json["role"], "system");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let parsed = serde_json::from_str::<ConversationTurn>(r#"{"role":"tool","content":"x"}"#);
        assert!(parsed.is_err());
        let shouty = serde_json::from_str::<ConversationTurn>(r#"{"role":"USER","content":"x"}"#);
        assert!(shouty.is_err());
    }

    #[test]
    fn response_uses_camel_case() {
        let json = serde_json::to_value(GenerateResponse {
            mermaid_code: "pie".into(),
            full_response: "```mermaid\npie```".into(),
        })
        .unwrap();
        assert_eq!(json["mermaidCode"], "pie");
        assert_eq!(json["fullResponse"], "```mermaid\npie```");
    }
}
