use alloy_primitives::{Address, B256, U256};
use cook_actions::Asset;
use serde::{Deserialize, Serialize};

/// Signed BentoBox master-contract approval, replayed through `cook`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterContractApproval {
    pub user: Address,
    pub master_contract: Address,
    pub approved: bool,
    pub v: u8,
    pub r: B256,
    pub s: B256,
}

/// Deposit `amount` of `token` into BentoBox and post it as collateral.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCollateral {
    pub token: Asset,
    pub amount: U256,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrow {
    pub amount: U256,
    /// Recipient; defaults to the intent's `from`.
    pub to: Option<Address>,
}

/// Repay `amount` of debt token on behalf of `to` (or `from`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repay {
    pub token: Address,
    pub amount: U256,
    pub to: Option<Address>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveCollateral {
    pub token: Asset,
    pub amount: U256,
    pub to: Option<Address>,
}

/// Borrow `amount` into the leverage swapper and post the swap output as collateral.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leverage {
    pub amount: U256,
    /// Minimum collateral share the swap must return.
    pub min_share_out: U256,
    /// Collateral beneficiary; defaults to `from`.
    pub to: Option<Address>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCollateralAndBorrow {
    pub from: Address,
    pub master_contract_approval: Option<MasterContractApproval>,
    pub add: Option<AddCollateral>,
    pub borrow: Option<Borrow>,
}

impl AddCollateralAndBorrow {
    pub fn is_empty(&self) -> bool {
        self.master_contract_approval.is_none() && self.add.is_none() && self.borrow.is_none()
    }

    /// True when borrowing is the only thing asked for.
    pub fn is_borrow_only(&self) -> bool {
        self.master_contract_approval.is_none() && self.add.is_none() && self.borrow.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepayAndRemoveCollateral {
    pub from: Address,
    pub master_contract_approval: Option<MasterContractApproval>,
    pub repay: Option<Repay>,
    pub remove: Option<RemoveCollateral>,
}

impl RepayAndRemoveCollateral {
    pub fn is_empty(&self) -> bool {
        self.master_contract_approval.is_none() && self.repay.is_none() && self.remove.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCollateralAndLeverage {
    pub from: Address,
    pub master_contract_approval: Option<MasterContractApproval>,
    pub add: Option<AddCollateral>,
    pub leverage: Option<Leverage>,
}

impl AddCollateralAndLeverage {
    pub fn is_empty(&self) -> bool {
        self.master_contract_approval.is_none() && self.add.is_none() && self.leverage.is_none()
    }
}

/// Any supported high-level operation, tagged by `operation` in JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Intent {
    AddCollateralAndBorrow(AddCollateralAndBorrow),
    RepayAndRemoveCollateral(RepayAndRemoveCollateral),
    AddCollateralAndLeverage(AddCollateralAndLeverage),
}
