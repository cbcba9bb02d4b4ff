//! Compiles high-level cauldron intents ("deposit collateral then borrow", "repay and withdraw",
//! "deposit and leverage") into calldata for a cauldron's batched `cook` entry point, or a
//! direct `borrow` call when that is all the intent asks for.
//!
//! Pipeline: [`types::Intent`] → ordered [`binder::Action`] list → [`finalizer::CompiledCall`].
//! Everything is pure and synchronous; nothing is shared between compilations.

pub mod approval;
pub mod binder;
pub mod compiler;
pub mod errors;
pub mod finalizer;
pub mod interfaces;
pub mod types;


pub use binder::{bind_action, Action};
pub use compiler::Cooker;
pub use errors::CookError;
pub use finalizer::{finalize, CompiledCall};
pub use types::Intent;
