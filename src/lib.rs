//! Falling Blocks (workspace facade crate).
//!
//! Re-exports the member crates under short names so integration tests,
//! benches and the binary can write `falling_blocks::core::Board` and
//! friends. The implementation lives in dedicated crates under `crates/`.

pub use falling_blocks_core as core;
pub use falling_blocks_input as input;
pub use falling_blocks_term as term;
pub use falling_blocks_types as types;
