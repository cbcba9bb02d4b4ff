use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Bytes, U256};
use cook_actions::{ActionDescriptor, Param, ParamType, ParamValue};

use crate::errors::CookError;

/// One bound cook step: `(actions[i], values[i], datas[i])`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub opcode: u8,
    /// Native amount forwarded with this step. Not part of `data`.
    pub value: U256,
    pub data: Bytes,
}

/// Bind `args` (in schema order) to `descriptor`, producing an encoded [`Action`].
///
/// `value` is kept only for descriptors that may carry native currency; otherwise the action
/// forwards zero.
pub fn bind_action(
    descriptor: &ActionDescriptor,
    value: U256,
    args: Vec<ParamValue>,
) -> Result<Action, CookError> {
    if args.len() != descriptor.params.len() {
        return Err(CookError::ArgumentMismatch {
            action: descriptor.kind,
            reason: format!(
                "expected {} arguments, got {}",
                descriptor.params.len(),
                args.len()
            ),
        });
    }

    let tokens = descriptor
        .params
        .iter()
        .zip(args)
        .map(|(param, arg)| lower_param(descriptor, param, arg))
        .collect::<Result<Vec<_>, _>>()?;
    let data = DynSolValue::Tuple(tokens).abi_encode_params();

    let value = if descriptor.native_value {
        value
    } else {
        if !value.is_zero() {
            tracing::warn!(action = ?descriptor.kind, %value, "dropping native value on non-payable action");
        }
        U256::ZERO
    };

    tracing::trace!(
        opcode = descriptor.opcode(),
        %value,
        data_len = data.len(),
        "bound {}",
        descriptor.signature()
    );

    Ok(Action {
        opcode: descriptor.opcode(),
        value,
        data: data.into(),
    })
}

fn lower_param(
    descriptor: &ActionDescriptor,
    param: &Param,
    arg: ParamValue,
) -> Result<DynSolValue, CookError> {
    let token = match (param.ty, arg) {
        (ParamType::Address, ParamValue::Address(address)) => DynSolValue::Address(address),
        (ParamType::Bool, ParamValue::Bool(flag)) => DynSolValue::Bool(flag),
        (ParamType::Uint8, ParamValue::Uint(v)) if v <= U256::from(u8::MAX) => {
            DynSolValue::Uint(v, 8)
        }
        (ParamType::Uint256, ParamValue::Uint(v)) => DynSolValue::Uint(v, 256),
        (ParamType::Int256, ParamValue::Amount(amount)) => {
            let word = amount.to_signed().ok_or_else(|| CookError::ArgumentMismatch {
                action: descriptor.kind,
                reason: format!("`{}` literal does not fit int256", param.name),
            })?;
            DynSolValue::Int(word, 256)
        }
        (ParamType::Bytes32, ParamValue::Word(word)) => DynSolValue::FixedBytes(word, 32),
        (ParamType::Bytes, ParamValue::Bytes(bytes)) => DynSolValue::Bytes(bytes.to_vec()),
        (ParamType::AddressArray, ParamValue::Addresses(list)) => {
            DynSolValue::Array(list.into_iter().map(DynSolValue::Address).collect())
        }
        (ParamType::Uint256Array, ParamValue::Uints(list)) => {
            DynSolValue::Array(list.into_iter().map(|v| DynSolValue::Uint(v, 256)).collect())
        }
        (ty, arg) => {
            return Err(CookError::ArgumentMismatch {
                action: descriptor.kind,
                reason: format!("`{}` expects {ty}, got {}", param.name, arg.shape()),
            })
        }
    };
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, Address, B256};
    use cook_actions::{catalog, Amount, OutputSlot};

    const USER: Address = address!("DAFEA492D9c6733ae3d56b7Ed1ADB60692c98Bc5");

    #[test]
    fn repay_action_layout() {
        let action = bind_action(
            &catalog::REPAY,
            U256::ZERO,
            vec![
                Amount::Literal(U256::from(1000u64)).into(),
                USER.into(),
                false.into(),
            ],
        )
        .unwrap();
        assert_eq!(action.opcode, 2);
        assert_eq!(action.value, U256::ZERO);
        assert_eq!(
            hex::encode(&action.data),
            "00000000000000000000000000000000000000000000000000000000000003e8\
             000000000000000000000000dafea492d9c6733ae3d56b7ed1adb60692c98bc5\
             0000000000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn sentinel_fills_signed_slot() {
        let action = bind_action(
            &catalog::ADD_COLLATERAL,
            U256::ZERO,
            vec![Amount::Prior(OutputSlot::Two).into(), USER.into(), false.into()],
        )
        .unwrap();
        let mut minus_two = [0xffu8; 32];
        minus_two[31] = 0xfe;
        assert_eq!(&action.data[..32], &minus_two);
    }

    #[test]
    fn arity_mismatch() {
        let err = bind_action(&catalog::BORROW, U256::ZERO, vec![USER.into()]).unwrap_err();
        assert!(matches!(err, CookError::ArgumentMismatch { .. }));
    }

    #[test]
    fn type_mismatch() {
        // Unsigned literal in a signed slot must go through `Amount`.
        let err = bind_action(
            &catalog::BORROW,
            U256::ZERO,
            vec![U256::from(1u64).into(), USER.into()],
        )
        .unwrap_err();
        match err {
            CookError::ArgumentMismatch { reason, .. } => {
                assert_eq!(reason, "`amount` expects int256, got uint")
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn uint8_range_is_checked() {
        let args = |v: u64| {
            vec![
                USER.into(),
                USER.into(),
                true.into(),
                U256::from(v).into(),
                B256::ZERO.into(),
                B256::ZERO.into(),
            ]
        };
        assert!(bind_action(&catalog::BENTO_SET_APPROVAL, U256::ZERO, args(28)).is_ok());
        assert!(bind_action(&catalog::BENTO_SET_APPROVAL, U256::ZERO, args(256)).is_err());
    }

    #[test]
    fn native_value_only_on_payable_descriptors() {
        let deposit = bind_action(
            &catalog::BENTO_DEPOSIT,
            U256::from(5u64),
            vec![
                Address::ZERO.into(),
                USER.into(),
                U256::from(5u64).into(),
                U256::ZERO.into(),
            ],
        )
        .unwrap();
        assert_eq!(deposit.value, U256::from(5u64));

        let borrow = bind_action(
            &catalog::BORROW,
            U256::from(5u64),
            vec![Amount::Literal(U256::from(5u64)).into(), USER.into()],
        )
        .unwrap();
        assert_eq!(borrow.value, U256::ZERO);
    }

    #[test]
    fn empty_schema_encodes_empty_blob() {
        let action =
            bind_action(&catalog::RELEASE_COLLATERAL_FROM_STRATEGY, U256::ZERO, vec![]).unwrap();
        assert_eq!(action.opcode, 32);
        assert!(action.data.is_empty());
    }
}
