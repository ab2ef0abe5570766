pub mod display;
pub mod form;
pub mod mermaid;
pub mod toast;
