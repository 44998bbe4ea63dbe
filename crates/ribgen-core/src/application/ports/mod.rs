//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `ribgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation, file reads and writes
//!   - `SourceIndex`: Snapshot of existing source paths
//!   - `TemplateStore`: Template blob retrieval
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by `ScaffoldService`)

pub mod output;

pub use output::{Filesystem, SourceIndex, TemplateStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockSourceIndex, MockTemplateStore};
