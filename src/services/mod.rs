//! Service layer for business logic.
//!
//! This module contains the resolution engine (switch repository, key well
//! resolver, thumb cluster normalizer, assembler) and the generation runs
//! that drive it from a project tree, once or in watch mode.

pub mod assembler;
pub mod generator;
pub mod keywell;
pub mod switch_repo;
pub mod thumb_cluster;
pub mod watch;

// Re-export commonly used types and functions
pub use assembler::{assemble, AssemblyError};
pub use generator::Generator;
pub use switch_repo::{SwitchRepoError, SwitchRepository};
