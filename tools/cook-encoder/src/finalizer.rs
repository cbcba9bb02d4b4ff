use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;

use crate::{binder::Action, errors::CookError, interfaces::ICauldron};

/// Final calldata for a cauldron: a direct `borrow` or a batched `cook`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompiledCall {
    Borrow(ICauldron::borrowCall),
    Cook(ICauldron::cookCall),
}

impl CompiledCall {
    /// Selector-prefixed ABI encoding, ready for a transaction's `data` field.
    pub fn calldata(&self) -> Bytes {
        match self {
            CompiledCall::Borrow(call) => call.abi_encode().into(),
            CompiledCall::Cook(call) => call.abi_encode().into(),
        }
    }

    /// Native amount the transaction must attach.
    pub fn value(&self) -> U256 {
        match self {
            CompiledCall::Borrow(_) => U256::ZERO,
            CompiledCall::Cook(call) => call
                .values
                .iter()
                .fold(U256::ZERO, |total, v| total.saturating_add(*v)),
        }
    }

    pub fn is_direct(&self) -> bool {
        matches!(self, CompiledCall::Borrow(_))
    }

    /// Number of cook steps; a direct call counts as one.
    pub fn action_count(&self) -> usize {
        match self {
            CompiledCall::Borrow(_) => 1,
            CompiledCall::Cook(call) => call.actions.len(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CompiledCall::Borrow(_) => "borrow",
            CompiledCall::Cook(_) => "cook",
        }
    }
}

/// Direct `borrow(to, amount)` call.
pub fn direct_borrow(to: Address, amount: U256) -> CompiledCall {
    CompiledCall::Borrow(ICauldron::borrowCall { to, amount })
}

/// Transpose an ordered action list into the three parallel `cook` arrays.
pub fn finalize(actions: Vec<Action>) -> Result<CompiledCall, CookError> {
    if actions.is_empty() {
        return Err(CookError::EmptyIntent);
    }

    let mut opcodes = Vec::with_capacity(actions.len());
    let mut values = Vec::with_capacity(actions.len());
    let mut datas = Vec::with_capacity(actions.len());
    for action in actions {
        opcodes.push(action.opcode);
        values.push(action.value);
        datas.push(action.data);
    }

    if opcodes.len() != values.len() || values.len() != datas.len() {
        return Err(CookError::SequenceLengthMismatch {
            actions: opcodes.len(),
            values: values.len(),
            datas: datas.len(),
        });
    }

    tracing::debug!(actions = ?opcodes, "finalized cook batch");
    Ok(CompiledCall::Cook(ICauldron::cookCall {
        actions: opcodes,
        values,
        datas,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn action(opcode: u8, value: u64, data: &[u8]) -> Action {
        Action {
            opcode,
            value: U256::from(value),
            data: Bytes::copy_from_slice(data),
        }
    }

    #[test]
    fn preserves_index_correspondence() {
        let call = finalize(vec![
            action(20, 7, &[1]),
            action(10, 0, &[2, 2]),
            action(5, 0, &[3, 3, 3]),
        ])
        .unwrap();
        let CompiledCall::Cook(cook) = &call else {
            panic!("expected cook");
        };
        assert_eq!(cook.actions, vec![20, 10, 5]);
        assert_eq!(cook.values[0], U256::from(7u64));
        assert_eq!(&cook.datas[2][..], &[3u8, 3, 3]);
        assert_eq!(call.value(), U256::from(7u64));
        assert_eq!(call.action_count(), 3);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(finalize(vec![]), Err(CookError::EmptyIntent));
    }

    #[test]
    fn cook_selector() {
        let call = finalize(vec![action(5, 0, &[])]).unwrap();
        assert_eq!(&call.calldata()[..4], ICauldron::cookCall::SELECTOR.as_slice());
    }

    #[test]
    fn direct_borrow_encoding() {
        let to = address!("DAFEA492D9c6733ae3d56b7Ed1ADB60692c98Bc5");
        let call = direct_borrow(to, U256::from(1000u64));
        assert!(call.is_direct());
        assert_eq!(
            hex::encode(call.calldata()),
            "4b8a3529\
             000000000000000000000000dafea492d9c6733ae3d56b7ed1adb60692c98bc5\
             00000000000000000000000000000000000000000000000000000000000003e8"
        );
    }
}
