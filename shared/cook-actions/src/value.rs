//! Argument values bound into action parameter slots.

use core::{fmt, str::FromStr};

use alloy_primitives::{Address, Bytes, Sign, B256, I256, U256};
use serde::{Deserialize, Serialize};

/// Token slot value meaning "the chain's native currency".
pub const USE_NATIVE: Address = Address::ZERO;

/// Which output of an earlier action an amount refers to.
///
/// `cook` keeps the last two values returned by any action; a sentinel in a signed slot
/// tells the cauldron to read one of them instead of the literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputSlot {
    One,
    Two,
}

impl OutputSlot {
    pub const fn depth(self) -> u8 {
        match self {
            OutputSlot::One => 1,
            OutputSlot::Two => 2,
        }
    }

    /// Reserved negative integer the cauldron recognises for this slot.
    pub fn sentinel(self) -> I256 {
        -I256::from_raw(U256::from(self.depth()))
    }
}

/// Amount bound into a signed parameter slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Amount {
    Literal(U256),
    Prior(OutputSlot),
}

impl Amount {
    /// Lower to the raw signed word. `None` when a literal does not fit the positive half of
    /// `int256`, which would make it indistinguishable from a sentinel.
    pub fn to_signed(self) -> Option<I256> {
        match self {
            Amount::Literal(value) => I256::checked_from_sign_and_abs(Sign::Positive, value),
            Amount::Prior(slot) => Some(slot.sentinel()),
        }
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Amount::Literal(value)
    }
}

impl From<OutputSlot> for Amount {
    fn from(slot: OutputSlot) -> Self {
        Amount::Prior(slot)
    }
}

/// Collateral or repayment asset: either an ERC-20 or the native currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Asset {
    Native,
    Token(Address),
}

impl Asset {
    /// Address written into a token slot.
    pub fn slot_address(self) -> Address {
        match self {
            Asset::Native => USE_NATIVE,
            Asset::Token(token) => token,
        }
    }

    pub fn is_native(self) -> bool {
        matches!(self, Asset::Native)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Native => f.write_str("ETH"),
            Asset::Token(token) => write!(f, "{token}"),
        }
    }
}

impl FromStr for Asset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("eth") {
            return Ok(Asset::Native);
        }
        Address::from_str(s)
            .map(Asset::Token)
            .map_err(|e| format!("invalid asset `{s}`: {e}"))
    }
}

impl TryFrom<String> for Asset {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Asset> for String {
    fn from(asset: Asset) -> Self {
        asset.to_string()
    }
}

/// A value for one parameter slot, before ABI encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    Address(Address),
    Bool(bool),
    Uint(U256),
    Amount(Amount),
    Word(B256),
    Bytes(Bytes),
    Addresses(Vec<Address>),
    Uints(Vec<U256>),
}

impl ParamValue {
    /// Short name of the runtime shape, for mismatch reports.
    pub const fn shape(&self) -> &'static str {
        match self {
            ParamValue::Address(_) => "address",
            ParamValue::Bool(_) => "bool",
            ParamValue::Uint(_) => "uint",
            ParamValue::Amount(_) => "amount",
            ParamValue::Word(_) => "word",
            ParamValue::Bytes(_) => "bytes",
            ParamValue::Addresses(_) => "address list",
            ParamValue::Uints(_) => "uint list",
        }
    }
}

impl From<Address> for ParamValue {
    fn from(value: Address) -> Self {
        ParamValue::Address(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<U256> for ParamValue {
    fn from(value: U256) -> Self {
        ParamValue::Uint(value)
    }
}

impl From<Amount> for ParamValue {
    fn from(value: Amount) -> Self {
        ParamValue::Amount(value)
    }
}

impl From<B256> for ParamValue {
    fn from(value: B256) -> Self {
        ParamValue::Word(value)
    }
}

impl From<Bytes> for ParamValue {
    fn from(value: Bytes) -> Self {
        ParamValue::Bytes(value)
    }
}
