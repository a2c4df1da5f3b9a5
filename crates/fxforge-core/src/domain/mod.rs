// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for FXForge.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror/serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod error;
pub mod plan;
pub mod resource;
pub mod templates;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use error::DomainError;
pub use plan::{DirectoryToCreate, FileToWrite, FsEntry, ScaffoldPlan};
pub use resource::{DEFAULT_DESCRIPTION, DEFAULT_VERSION, ResourceConfig};
pub use templates::TemplateKind;
pub use value_objects::ScriptGroup;

// Internal only - not re-exported
pub use validation::DomainValidator;
