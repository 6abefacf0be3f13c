//! XDG base directory locations for a named program.
//!
//! Every path is computed on demand from the environment; nothing is cached
//! and nothing is created on disk.

pub mod env;
pub mod kind;
pub mod paths;
pub mod snapshot;

pub use env::{Environment, MapEnv, SystemEnv};
pub use kind::{PathKind, UnknownPathKind};
pub use paths::ProgramPaths;
pub use snapshot::PathsSnapshot;
