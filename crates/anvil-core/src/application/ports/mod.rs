//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `anvil-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory and file creation
//!   - `TemplateRenderer`: blueprint to text
//!   - `MetadataSource`: remote version metadata
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, MetadataSource, TemplateRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockMetadataSource, MockTemplateRenderer};
