//! Ribgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the ribgen
//! RIB scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           ribgen-cli (CLI)              │
//! │   (tokens -> Argument -> Invocation)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService: per-edge pipelines) │
//! │   Commands: CreateComponent, ...        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, SourceIndex, TemplateStore)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     ribgen-adapters (Infrastructure)    │
//! │ (LocalFilesystem, WalkSourceIndex, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Argument, Outline, Edge, Settings)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ribgen_core::domain::Outline;
//!
//! let outline = Outline::parse("- Root\n  - Child\n").unwrap();
//! let edges = outline.edges("App");
//! assert_eq!(edges.len(), 2);
//!
//! // With injected adapters:
//! // let service = ScaffoldService::new(settings, filesystem, index, templates);
//! // let summary = service.scaffold(&edges, &mut |step| println!("{step:?}"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Command, CommandResult, Report, ReportStatus, RunSummary, ScaffoldService, StepReport,
        ports::{Filesystem, SourceIndex, TemplateStore},
    };
    pub use crate::domain::{Argument, Edge, Invocation, Node, Outline, Settings};
    pub use crate::error::{RibgenError, RibgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
