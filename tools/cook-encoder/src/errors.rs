use cook_actions::{ActionKind, CauldronVersion, SwapperKind};

/// Errors raised while compiling an intent. None of them carry partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CookError {
    /// Argument count or shape does not fit the descriptor's schema.
    #[error("argument mismatch for {action:?}: {reason}")]
    ArgumentMismatch { action: ActionKind, reason: String },

    /// The intent names no sub-intent.
    #[error("intent has no sub-intent to compile")]
    EmptyIntent,

    /// The swapper kind has no call encoder.
    #[error("no call encoder for swapper kind {0:?}")]
    UnsupportedVariant(SwapperKind),

    /// The target cauldron predates the action's opcode.
    #[error("{action:?} requires cauldron {required:?} or later, target is {actual:?}")]
    UnsupportedVersion {
        action: ActionKind,
        required: CauldronVersion,
        actual: CauldronVersion,
    },

    /// Transposed cook arrays disagree in length. Indicates a defect in the finalizer.
    #[error("cook arrays out of step: {actions} actions, {values} values, {datas} datas")]
    SequenceLengthMismatch {
        actions: usize,
        values: usize,
        datas: usize,
    },

    #[error("approval signing failed: {0}")]
    Signing(String),
}
