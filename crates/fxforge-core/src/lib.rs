//! FXForge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the FXForge
//! resource generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          fxforge-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (InterviewService, ScaffoldService)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Filesystem, Console)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    fxforge-adapters (Infrastructure)    │
//! │  (LocalFilesystem, StdioConsole, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ResourceConfig, ScaffoldPlan, etc)    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fxforge_core::application::{InterviewService, ScaffoldService};
//!
//! // 1. Collect the configuration (with an injected console adapter)
//! let interview = InterviewService::new(console);
//! let config = interview.collect()?;
//!
//! // 2. Materialize it (with injected filesystem + console adapters)
//! let service = ScaffoldService::new(filesystem, console);
//! service.materialize(&config, "./output".as_ref())?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InterviewService, ScaffoldService, ScaffoldSummary,
        ports::{Console, Filesystem},
    };
    pub use crate::domain::{
        DEFAULT_DESCRIPTION, DEFAULT_VERSION, DomainError, FsEntry, ResourceConfig, ScaffoldPlan,
        ScriptGroup, TemplateKind,
    };
    pub use crate::error::{FxforgeError, FxforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
