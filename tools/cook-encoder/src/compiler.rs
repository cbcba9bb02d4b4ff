//! Intent → cook compilation.
//!
//! Each operation inspects which optional sub-intents are present and appends fixed action
//! groups in a fixed order:
//!
//! 1. master-contract approval (always first: later steps move funds through BentoBox);
//! 2. the deposit-oriented group (add collateral, or repay);
//! 3. the terminal group (borrow, remove collateral, or leverage).
//!
//! Cross-step data flows through [`OutputSlot`] sentinels, resolved on chain by `cook`.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolCall, SolValue};
use cook_actions::{
    catalog, ActionDescriptor, Amount, Cauldron, OutputSlot, ParamValue, Swapper, SwapperKind,
};

use crate::{
    binder::{bind_action, Action},
    errors::CookError,
    finalizer::{direct_borrow, finalize, CompiledCall},
    interfaces::ISimpleSwap,
    types::{
        AddCollateral, AddCollateralAndBorrow, AddCollateralAndLeverage, Intent, Leverage,
        MasterContractApproval, RemoveCollateral, RepayAndRemoveCollateral,
    },
};

/// Compiles intents for one cauldron.
#[derive(Clone, Debug)]
pub struct Cooker {
    cauldron: Cauldron,
    direct_borrow: bool,
}

impl Cooker {
    pub fn new(cauldron: Cauldron) -> Self {
        Self {
            cauldron,
            direct_borrow: true,
        }
    }

    /// Allow (default) or forbid the direct `borrow` shortcut for borrow-only intents.
    pub fn with_direct_borrow(mut self, enabled: bool) -> Self {
        self.direct_borrow = enabled;
        self
    }

    pub fn cauldron(&self) -> &Cauldron {
        &self.cauldron
    }

    pub fn compile(&self, intent: &Intent) -> Result<CompiledCall, CookError> {
        match intent {
            Intent::AddCollateralAndBorrow(intent) => self.add_collateral_and_borrow(intent),
            Intent::RepayAndRemoveCollateral(intent) => self.repay_and_remove_collateral(intent),
            Intent::AddCollateralAndLeverage(intent) => self.add_collateral_and_leverage(intent),
        }
    }

    pub fn add_collateral_and_borrow(
        &self,
        intent: &AddCollateralAndBorrow,
    ) -> Result<CompiledCall, CookError> {
        if intent.is_empty() {
            return Err(CookError::EmptyIntent);
        }
        let from = intent.from;

        if let Some(borrow) = intent.borrow.as_ref().filter(|_| intent.is_borrow_only()) {
            if self.direct_borrow {
                let to = borrow.to.unwrap_or(from);
                tracing::debug!(%to, amount = %borrow.amount, "borrow-only intent, direct call");
                return Ok(direct_borrow(to, borrow.amount));
            }
        }

        let mut cook = self.builder();
        if let Some(approval) = &intent.master_contract_approval {
            cook.approval(approval)?;
        }
        if let Some(add) = &intent.add {
            cook.add_collateral(from, add)?;
        }
        if let Some(borrow) = &intent.borrow {
            cook.push(
                &catalog::BORROW,
                U256::ZERO,
                vec![
                    Amount::Literal(borrow.amount).into(),
                    borrow.to.unwrap_or(from).into(),
                ],
            )?;
        }
        cook.finish("add_collateral_and_borrow")
    }

    pub fn repay_and_remove_collateral(
        &self,
        intent: &RepayAndRemoveCollateral,
    ) -> Result<CompiledCall, CookError> {
        if intent.is_empty() {
            return Err(CookError::EmptyIntent);
        }
        let from = intent.from;

        let mut cook = self.builder();
        if let Some(approval) = &intent.master_contract_approval {
            cook.approval(approval)?;
        }
        if let Some(repay) = &intent.repay {
            cook.push(
                &catalog::BENTO_DEPOSIT,
                U256::ZERO,
                vec![
                    repay.token.into(),
                    from.into(),
                    repay.amount.into(),
                    U256::ZERO.into(),
                ],
            )?
            .push(&catalog::GET_REPAY_PART, U256::ZERO, vec![repay.amount.into()])?
            .push(
                &catalog::REPAY,
                U256::ZERO,
                vec![
                    Amount::Prior(OutputSlot::One).into(),
                    repay.to.unwrap_or(from).into(),
                    false.into(),
                ],
            )?;
        }
        if let Some(remove) = &intent.remove {
            cook.remove_collateral(from, remove)?;
        }
        cook.finish("repay_and_remove_collateral")
    }

    pub fn add_collateral_and_leverage(
        &self,
        intent: &AddCollateralAndLeverage,
    ) -> Result<CompiledCall, CookError> {
        if intent.is_empty() {
            return Err(CookError::EmptyIntent);
        }
        let from = intent.from;

        let mut cook = self.builder();
        if let Some(approval) = &intent.master_contract_approval {
            cook.approval(approval)?;
        }
        if let Some(add) = &intent.add {
            cook.add_collateral(from, add)?;
        }
        if let Some(leverage) = &intent.leverage {
            cook.leverage(from, &self.cauldron.leverage_swapper, leverage)?;
        }
        cook.finish("add_collateral_and_leverage")
    }

    fn builder(&self) -> CookBuilder {
        CookBuilder {
            cauldron: &self.cauldron,
            actions: Vec::new(),
        }
    }
}

/// Ordered append-only action list for one compilation.
#[derive(Debug)]
struct CookBuilder<'a> {
    cauldron: &'a Cauldron,
    actions: Vec<Action>,
}

impl CookBuilder<'_> {
    fn push(
        &mut self,
        descriptor: &ActionDescriptor,
        value: U256,
        args: Vec<ParamValue>,
    ) -> Result<&mut Self, CookError> {
        let actual = self.cauldron.version();
        if descriptor.min_version > actual {
            return Err(CookError::UnsupportedVersion {
                action: descriptor.kind,
                required: descriptor.min_version,
                actual,
            });
        }
        self.actions.push(bind_action(descriptor, value, args)?);
        Ok(self)
    }

    fn approval(&mut self, approval: &MasterContractApproval) -> Result<&mut Self, CookError> {
        self.push(
            &catalog::BENTO_SET_APPROVAL,
            U256::ZERO,
            vec![
                approval.user.into(),
                approval.master_contract.into(),
                approval.approved.into(),
                U256::from(approval.v).into(),
                approval.r.into(),
                approval.s.into(),
            ],
        )
    }

    /// Deposit into BentoBox, then post the deposited share (deposit output 2) as collateral.
    fn add_collateral(&mut self, from: Address, add: &AddCollateral) -> Result<&mut Self, CookError> {
        let value = if add.token.is_native() {
            add.amount
        } else {
            U256::ZERO
        };
        self.push(
            &catalog::BENTO_DEPOSIT,
            value,
            vec![
                add.token.slot_address().into(),
                from.into(),
                add.amount.into(),
                U256::ZERO.into(),
            ],
        )?
        .push(
            &catalog::ADD_COLLATERAL,
            U256::ZERO,
            vec![
                Amount::Prior(OutputSlot::Two).into(),
                from.into(),
                false.into(),
            ],
        )
    }

    fn remove_collateral(
        &mut self,
        from: Address,
        remove: &RemoveCollateral,
    ) -> Result<&mut Self, CookError> {
        self.push(
            &catalog::REMOVE_COLLATERAL,
            U256::ZERO,
            vec![Amount::Literal(remove.amount).into(), from.into()],
        )?
        .push(
            &catalog::BENTO_WITHDRAW,
            U256::ZERO,
            vec![
                remove.token.slot_address().into(),
                remove.to.unwrap_or(from).into(),
                remove.amount.into(),
                U256::ZERO.into(),
            ],
        )
    }

    /// Borrow into the swapper, swap, and post the swap's `shareReturned` as collateral.
    fn leverage(
        &mut self,
        from: Address,
        swapper: &Swapper,
        leverage: &Leverage,
    ) -> Result<&mut Self, CookError> {
        let call_data = swap_call_data(swapper.kind, from, leverage.min_share_out)?;
        self.push(
            &catalog::BORROW,
            U256::ZERO,
            vec![Amount::Literal(leverage.amount).into(), swapper.address.into()],
        )?
        .push(
            &catalog::CALL,
            U256::ZERO,
            vec![
                swapper.address.into(),
                call_data.into(),
                // shareFrom is appended on chain from the borrow's second output.
                false.into(),
                true.into(),
                // swap returns (extraShare, shareReturned); keep both.
                U256::from(2u8).into(),
            ],
        )?
        .push(
            &catalog::ADD_COLLATERAL,
            U256::ZERO,
            vec![
                Amount::Prior(OutputSlot::Two).into(),
                leverage.to.unwrap_or(from).into(),
                false.into(),
            ],
        )
    }

    fn finish(self, operation: &str) -> Result<CompiledCall, CookError> {
        tracing::debug!(operation, actions = self.actions.len(), "compiled intent");
        finalize(self.actions)
    }
}

/// Swapper calldata minus the trailing `shareFrom` word, which `cook` appends.
fn swap_call_data(kind: SwapperKind, recipient: Address, share_to_min: U256) -> Result<Bytes, CookError> {
    match kind {
        SwapperKind::SimpleSwap => {
            let mut data = ISimpleSwap::swapCall::SELECTOR.to_vec();
            data.extend_from_slice(&(recipient, share_to_min).abi_encode_params());
            Ok(data.into())
        }
        SwapperKind::LevSwapperV2 | SwapperKind::Swapper | SwapperKind::SwapperWithExact => {
            Err(CookError::UnsupportedVariant(kind))
        }
    }
}
