//! Static catalog of the primitive actions a cauldron's `cook` entry point accepts.
//!
//! Each entry fixes the opcode, the ABI layout of the action's `datas[i]` blob, whether the
//! action may carry a native-currency value, and the first cauldron revision that understands
//! the opcode. Adding a primitive means adding one descriptor here and one arm to
//! [`ActionKind::descriptor`].

use serde::Serialize;

use crate::cauldron::CauldronVersion;

/// Primitive operations understood by `cook`, keyed by their on-chain opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ActionKind {
    Repay = 2,
    RemoveCollateral = 4,
    Borrow = 5,
    GetRepayShare = 6,
    GetRepayPart = 7,
    AddCollateral = 10,
    UpdateExchangeRate = 11,

    BentoDeposit = 20,
    BentoWithdraw = 21,
    BentoTransfer = 22,
    BentoTransferMultiple = 23,
    BentoSetApproval = 24,

    Call = 30,
    Liquidate = 31,
    ReleaseCollateralFromStrategy = 32,
}

impl TryFrom<u8> for ActionKind {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use ActionKind::*;
        let kind = match value {
            2 => Repay,
            4 => RemoveCollateral,
            5 => Borrow,
            6 => GetRepayShare,
            7 => GetRepayPart,
            10 => AddCollateral,
            11 => UpdateExchangeRate,
            20 => BentoDeposit,
            21 => BentoWithdraw,
            22 => BentoTransfer,
            23 => BentoTransferMultiple,
            24 => BentoSetApproval,
            30 => Call,
            31 => Liquidate,
            32 => ReleaseCollateralFromStrategy,
            other => return Err(other),
        };
        Ok(kind)
    }
}

impl ActionKind {
    /// Catalog entry for this kind.
    pub const fn descriptor(self) -> &'static ActionDescriptor {
        use ActionKind::*;
        match self {
            Repay => &REPAY,
            RemoveCollateral => &REMOVE_COLLATERAL,
            Borrow => &BORROW,
            GetRepayShare => &GET_REPAY_SHARE,
            GetRepayPart => &GET_REPAY_PART,
            AddCollateral => &ADD_COLLATERAL,
            UpdateExchangeRate => &UPDATE_EXCHANGE_RATE,
            BentoDeposit => &BENTO_DEPOSIT,
            BentoWithdraw => &BENTO_WITHDRAW,
            BentoTransfer => &BENTO_TRANSFER,
            BentoTransferMultiple => &BENTO_TRANSFER_MULTIPLE,
            BentoSetApproval => &BENTO_SET_APPROVAL,
            Call => &CALL,
            Liquidate => &LIQUIDATE,
            ReleaseCollateralFromStrategy => &RELEASE_COLLATERAL_FROM_STRATEGY,
        }
    }
}

/// ABI type of one parameter slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ParamType {
    #[serde(rename = "address")]
    Address,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "uint8")]
    Uint8,
    #[serde(rename = "uint256")]
    Uint256,
    /// Signed slot; the only slot type that accepts a prior-output sentinel.
    #[serde(rename = "int256")]
    Int256,
    #[serde(rename = "bytes32")]
    Bytes32,
    #[serde(rename = "bytes")]
    Bytes,
    #[serde(rename = "address[]")]
    AddressArray,
    #[serde(rename = "uint256[]")]
    Uint256Array,
}

impl ParamType {
    /// Solidity spelling of the type.
    pub const fn as_str(self) -> &'static str {
        match self {
            ParamType::Address => "address",
            ParamType::Bool => "bool",
            ParamType::Uint8 => "uint8",
            ParamType::Uint256 => "uint256",
            ParamType::Int256 => "int256",
            ParamType::Bytes32 => "bytes32",
            ParamType::Bytes => "bytes",
            ParamType::AddressArray => "address[]",
            ParamType::Uint256Array => "uint256[]",
        }
    }
}

impl core::fmt::Display for ParamType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named slot in a descriptor's parameter schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: ParamType,
}

const fn param(name: &'static str, ty: ParamType) -> Param {
    Param { name, ty }
}

/// Immutable description of one primitive action kind.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ActionDescriptor {
    pub kind: ActionKind,
    /// Ordered parameter schema of the action's data blob.
    pub params: &'static [Param],
    /// Whether the action may forward a native-currency amount.
    pub native_value: bool,
    /// Lowest cauldron revision that implements the opcode.
    pub min_version: CauldronVersion,
}

impl ActionDescriptor {
    pub const fn opcode(&self) -> u8 {
        self.kind as u8
    }

    /// `name(type,...)`-style rendering, handy in logs and error messages.
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self.params.iter().map(|p| p.ty.as_str()).collect();
        format!("{:?}({})", self.kind, types.join(","))
    }
}

use ParamType::*;

pub const REPAY: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::Repay,
    params: &[param("part", Int256), param("to", Address), param("skim", Bool)],
    native_value: false,
    min_version: CauldronVersion::V1,
};

pub const REMOVE_COLLATERAL: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::RemoveCollateral,
    params: &[param("share", Int256), param("to", Address)],
    native_value: false,
    min_version: CauldronVersion::V1,
};

pub const BORROW: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::Borrow,
    params: &[param("amount", Int256), param("to", Address)],
    native_value: false,
    min_version: CauldronVersion::V1,
};

pub const GET_REPAY_SHARE: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::GetRepayShare,
    params: &[param("part", Uint256)],
    native_value: false,
    min_version: CauldronVersion::V1,
};

pub const GET_REPAY_PART: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::GetRepayPart,
    params: &[param("amount", Uint256)],
    native_value: false,
    min_version: CauldronVersion::V1,
};

pub const ADD_COLLATERAL: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::AddCollateral,
    params: &[param("share", Int256), param("to", Address), param("skim", Bool)],
    native_value: false,
    min_version: CauldronVersion::V1,
};

pub const UPDATE_EXCHANGE_RATE: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::UpdateExchangeRate,
    params: &[
        param("mustUpdate", Bool),
        param("minRate", Uint256),
        param("maxRate", Uint256),
    ],
    native_value: false,
    min_version: CauldronVersion::V1,
};

pub const BENTO_DEPOSIT: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::BentoDeposit,
    params: &[
        param("token", Address),
        param("to", Address),
        param("amount", Uint256),
        param("share", Uint256),
    ],
    native_value: true,
    min_version: CauldronVersion::V1,
};

pub const BENTO_WITHDRAW: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::BentoWithdraw,
    params: &[
        param("token", Address),
        param("to", Address),
        param("amount", Uint256),
        param("share", Uint256),
    ],
    native_value: true,
    min_version: CauldronVersion::V1,
};

pub const BENTO_TRANSFER: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::BentoTransfer,
    params: &[param("token", Address), param("to", Address), param("share", Int256)],
    native_value: true,
    min_version: CauldronVersion::V1,
};

pub const BENTO_TRANSFER_MULTIPLE: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::BentoTransferMultiple,
    params: &[
        param("token", Address),
        param("tos", AddressArray),
        param("share", Uint256Array),
    ],
    native_value: true,
    min_version: CauldronVersion::V1,
};

pub const BENTO_SET_APPROVAL: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::BentoSetApproval,
    params: &[
        param("user", Address),
        param("masterContract", Address),
        param("approved", Bool),
        param("v", Uint8),
        param("r", Bytes32),
        param("s", Bytes32),
    ],
    native_value: false,
    min_version: CauldronVersion::V1,
};

pub const CALL: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::Call,
    params: &[
        param("callee", Address),
        param("callData", Bytes),
        param("useValue1", Bool),
        param("useValue2", Bool),
        param("returnValues", Uint8),
    ],
    native_value: true,
    min_version: CauldronVersion::V1,
};

pub const LIQUIDATE: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::Liquidate,
    params: &[
        param("users", AddressArray),
        param("maxBorrowParts", Uint256Array),
        param("to", Address),
        param("swapper", Address),
        param("swapperData", Bytes),
    ],
    native_value: true,
    min_version: CauldronVersion::V4,
};

pub const RELEASE_COLLATERAL_FROM_STRATEGY: ActionDescriptor = ActionDescriptor {
    kind: ActionKind::ReleaseCollateralFromStrategy,
    params: &[],
    native_value: true,
    min_version: CauldronVersion::V4,
};

/// Every descriptor, ordered by opcode.
pub const CATALOG: &[&ActionDescriptor] = &[
    &REPAY,
    &REMOVE_COLLATERAL,
    &BORROW,
    &GET_REPAY_SHARE,
    &GET_REPAY_PART,
    &ADD_COLLATERAL,
    &UPDATE_EXCHANGE_RATE,
    &BENTO_DEPOSIT,
    &BENTO_WITHDRAW,
    &BENTO_TRANSFER,
    &BENTO_TRANSFER_MULTIPLE,
    &BENTO_SET_APPROVAL,
    &CALL,
    &LIQUIDATE,
    &RELEASE_COLLATERAL_FROM_STRATEGY,
];

/// Look up a descriptor by its raw opcode.
pub fn descriptor_by_opcode(opcode: u8) -> Option<&'static ActionDescriptor> {
    ActionKind::try_from(opcode).ok().map(ActionKind::descriptor)
}
