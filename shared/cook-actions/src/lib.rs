//! Shared types for cauldron cook batches: the action catalog, argument values and cauldron
//! descriptions. Consumed by the encoder and by tooling.

pub mod catalog;
pub mod cauldron;
pub mod value;

pub use catalog::{ActionDescriptor, ActionKind, Param, ParamType, CATALOG};
pub use cauldron::{Cauldron, CauldronContract, CauldronVersion, Swapper, SwapperKind};
pub use value::{Amount, Asset, OutputSlot, ParamValue, USE_NATIVE};
