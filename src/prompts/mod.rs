//! Diagram-type registry and the system-prompt catalogue.
//!
//! Every template is [`BASE_PROMPT`] followed by family-specific syntax rules
//! and one worked example. The base block defines the output contract that
//! [`crate::extraction`] relies on.

mod charts;
mod diagrams;

use std::collections::HashMap;

/// Output-format rules shared by every template.
pub const BASE_PROMPT: &str = "You are an expert at creating Mermaid diagrams. Your task is to generate ONLY valid Mermaid code based on the user's description.

CRITICAL INSTRUCTIONS:
1. ONLY output the raw Mermaid code wrapped in ```mermaid and ``` tags.
2. DO NOT include any explanations, comments, or text outside the code block.
3. DO NOT use %% comments within the Mermaid code.
4. DO NOT use // comments within the Mermaid code.
5. DO NOT modify the syntax or structure of the Mermaid code in any way that would break its rendering.
6. Ensure proper spacing and indentation in the Mermaid code.
7. Keep the diagram simple and focused on the key elements.
8. Ensure all nodes are properly connected.
9. Use standard Mermaid syntax without experimental features unless the user explicitly requests them.";

/// Body appended to [`BASE_PROMPT`] for identifiers outside the registry.
const DEFAULT_RULES: &str = "Example of valid syntax:
```mermaid
flowchart TD
    A[Start] --> B{Decision}
    B -->|Yes| C[Action]
    B -->|No| D[Another Action]
    C --> E[End]
    D --> E
```";

/// A supported diagram family. Registry order is the order shown in the UI selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramType {
    Flowchart,
    SequenceDiagram,
    ClassDiagram,
    StateDiagram,
    EntityRelationshipDiagram,
    UserJourney,
    GanttChart,
    PieChart,
    QuadrantChart,
    RequirementDiagram,
    GitgraphDiagram,
    C4Diagram,
    Mindmap,
    Timeline,
    SankeyDiagram,
    XyChart,
    BlockDiagram,
    ProcessFlow,
    SystemDiagram,
    Eerd,
}

impl DiagramType {
    pub const ALL: [DiagramType; 20] = [
        DiagramType::Flowchart,
        DiagramType::SequenceDiagram,
        DiagramType::ClassDiagram,
        DiagramType::StateDiagram,
        DiagramType::EntityRelationshipDiagram,
        DiagramType::UserJourney,
        DiagramType::GanttChart,
        DiagramType::PieChart,
        DiagramType::QuadrantChart,
        DiagramType::RequirementDiagram,
        DiagramType::GitgraphDiagram,
        DiagramType::C4Diagram,
        DiagramType::Mindmap,
        DiagramType::Timeline,
        DiagramType::SankeyDiagram,
        DiagramType::XyChart,
        DiagramType::BlockDiagram,
        DiagramType::ProcessFlow,
        DiagramType::SystemDiagram,
        DiagramType::Eerd,
    ];

    pub const DEFAULT: DiagramType = DiagramType::Flowchart;

    /// The wire identifier, also the label shown in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagramType::Flowchart => "Flowchart",
            DiagramType::SequenceDiagram => "Sequence Diagram",
            DiagramType::ClassDiagram => "Class Diagram",
            DiagramType::StateDiagram => "State Diagram",
            DiagramType::EntityRelationshipDiagram => "Entity Relationship Diagram",
            DiagramType::UserJourney => "User Journey",
            DiagramType::GanttChart => "Gantt Chart",
            DiagramType::PieChart => "Pie Chart",
            DiagramType::QuadrantChart => "Quadrant Chart",
            DiagramType::RequirementDiagram => "Requirement Diagram",
            DiagramType::GitgraphDiagram => "Gitgraph Diagram",
            DiagramType::C4Diagram => "C4 Diagram",
            DiagramType::Mindmap => "Mindmap",
            DiagramType::Timeline => "Timeline",
            DiagramType::SankeyDiagram => "Sankey Diagram",
            DiagramType::XyChart => "XY Chart",
            DiagramType::BlockDiagram => "Block Diagram",
            DiagramType::ProcessFlow => "Process Flow",
            DiagramType::SystemDiagram => "System Diagram",
            DiagramType::Eerd => "EERD",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == id)
    }

    fn family_rules(&self) -> &'static str {
        match self {
            DiagramType::Flowchart => diagrams::FLOWCHART,
            DiagramType::SequenceDiagram => diagrams::SEQUENCE,
            DiagramType::ClassDiagram => diagrams::CLASS,
            DiagramType::StateDiagram => diagrams::STATE,
            DiagramType::EntityRelationshipDiagram => diagrams::ENTITY_RELATIONSHIP,
            DiagramType::UserJourney => charts::USER_JOURNEY,
            DiagramType::GanttChart => charts::GANTT,
            DiagramType::PieChart => charts::PIE,
            DiagramType::QuadrantChart => charts::QUADRANT,
            DiagramType::RequirementDiagram => diagrams::REQUIREMENT,
            DiagramType::GitgraphDiagram => charts::GITGRAPH,
            DiagramType::C4Diagram => diagrams::C4,
            DiagramType::Mindmap => charts::MINDMAP,
            DiagramType::Timeline => charts::TIMELINE,
            DiagramType::SankeyDiagram => charts::SANKEY,
            DiagramType::XyChart => charts::XY_CHART,
            DiagramType::BlockDiagram => diagrams::BLOCK,
            DiagramType::ProcessFlow => diagrams::PROCESS_FLOW,
            DiagramType::SystemDiagram => diagrams::SYSTEM,
            DiagramType::Eerd => diagrams::EERD,
        }
    }
}

impl std::fmt::Display for DiagramType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn compose(rules: &str) -> String {
    format!("{BASE_PROMPT}\n\n{rules}")
}

/// Immutable map from diagram type to its full system prompt.
/// Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PromptCatalogue {
    templates: HashMap<DiagramType, String>,
    default_template: String,
}

impl PromptCatalogue {
    pub fn new() -> Self {
        let templates = DiagramType::ALL
            .iter()
            .map(|t| (*t, compose(t.family_rules())))
            .collect();
        Self { templates, default_template: compose(DEFAULT_RULES) }
    }

    /// Template for `id`, or the generic default when `id` is not registered.
    /// Never fails.
    pub fn resolve(&self, id: &str) -> &str {
        DiagramType::from_id(id)
            .and_then(|t| self.templates.get(&t))
            .unwrap_or(&self.default_template)
    }

    pub fn is_registered(&self, id: &str) -> bool {
        DiagramType::from_id(id).is_some()
    }

    pub fn default_template(&self) -> &str {
        &self.default_template
    }

    /// Registered identifiers in registry order.
    pub fn diagram_types(&self) -> Vec<&'static str> {
        DiagramType::ALL.iter().map(|t| t.as_str()).collect()
    }
}

impl Default for PromptCatalogue {
    fn default() -> Self {
        Self::new()
    }
}
