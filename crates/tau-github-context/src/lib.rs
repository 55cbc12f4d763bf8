//! Canonical GitHub trigger context for Tau automation runs.
//!
//! Normalizes the ambient workflow event (optionally patched by a
//! `WEBHOOK_EVENT` envelope) and the action inputs into one
//! [`CanonicalContext`] consumed by the mode-execution layer.

pub mod action_inputs;
pub mod context_builder;
pub mod event_guards;
pub mod event_source;
pub mod github_context_error;
pub mod input_parsing;
pub mod input_source;
pub mod mode_registry;
pub mod webhook_override;

pub use action_inputs::*;
pub use context_builder::*;
pub use event_guards::*;
pub use event_source::*;
pub use github_context_error::*;
pub use input_parsing::*;
pub use input_source::*;
pub use mode_registry::*;
pub use webhook_override::*;
