//! Source index adapters.

mod walk;

pub use walk::WalkSourceIndex;
