use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Cauldron contract revision. Later revisions understand every opcode of earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CauldronVersion {
    V1,
    V2,
    V3,
    V4,
}

/// Swapper interfaces a cauldron may be configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapperKind {
    /// `swap(address recipient, uint256 shareToMin, uint256 shareFrom)`.
    #[serde(rename = "ISimpleSwap")]
    SimpleSwap,
    #[serde(rename = "ILevSwapperV2")]
    LevSwapperV2,
    #[serde(rename = "ISwapper")]
    Swapper,
    #[serde(rename = "ISwapperWithExact")]
    SwapperWithExact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swapper {
    pub address: Address,
    pub kind: SwapperKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauldronContract {
    pub address: Address,
    pub kind: CauldronVersion,
}

/// A deployed cauldron that intents are compiled against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cauldron {
    pub name: String,
    pub chain_id: u64,
    pub id: u32,
    pub contract: CauldronContract,
    pub leverage_swapper: Swapper,
}

impl Cauldron {
    pub fn address(&self) -> Address {
        self.contract.address
    }

    pub fn version(&self) -> CauldronVersion {
        self.contract.kind
    }
}
