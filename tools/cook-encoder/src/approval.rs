//! BentoBox master-contract approval signatures.
//!
//! A cauldron can only move a user's BentoBox balance once the user has approved the cauldron's
//! master contract. The approval is an EIP-712 signature the cauldron replays through
//! `BentoSetApproval`, so it can ride in the same cook batch as the actions that need it.

use alloy_primitives::{keccak256, Address, B256, U256};
use k256::ecdsa::SigningKey;

use crate::{errors::CookError, types::MasterContractApproval};

pub const APPROVE_WARNING: &str = "Give FULL access to funds in (and approved to) BentoBox?";
pub const REVOKE_WARNING: &str = "Revoke access to BentoBox?";

/// Everything the BentoBox approval digest commits to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApprovalRequest {
    pub chain_id: u64,
    pub bentobox: Address,
    pub user: Address,
    pub master_contract: Address,
    pub approved: bool,
    /// BentoBox `nonces(user)` at signing time.
    pub nonce: U256,
}

impl ApprovalRequest {
    /// EIP-712 digest checked by `BentoBox.setMasterContractApproval`.
    pub fn digest(&self) -> B256 {
        let domain_type_hash =
            keccak256(b"EIP712Domain(string name,uint256 chainId,address verifyingContract)");
        let domain_name_hash = keccak256(b"BentoBox V1");

        let mut domain_buf = Vec::with_capacity(32 * 4);
        domain_buf.extend_from_slice(domain_type_hash.as_slice());
        domain_buf.extend_from_slice(domain_name_hash.as_slice());
        domain_buf.extend_from_slice(&U256::from(self.chain_id).to_be_bytes::<32>());
        domain_buf.extend_from_slice(&pad_address(self.bentobox));
        let domain_separator = keccak256(&domain_buf);

        let msg_type_hash = keccak256(
            b"SetMasterContractApproval(string warning,address user,address masterContract,bool approved,uint256 nonce)",
        );
        let warning_hash = if self.approved {
            keccak256(APPROVE_WARNING.as_bytes())
        } else {
            keccak256(REVOKE_WARNING.as_bytes())
        };

        let mut struct_buf = Vec::with_capacity(32 * 6);
        struct_buf.extend_from_slice(msg_type_hash.as_slice());
        struct_buf.extend_from_slice(warning_hash.as_slice());
        struct_buf.extend_from_slice(&pad_address(self.user));
        struct_buf.extend_from_slice(&pad_address(self.master_contract));
        struct_buf.extend_from_slice(&U256::from(self.approved as u8).to_be_bytes::<32>());
        struct_buf.extend_from_slice(&self.nonce.to_be_bytes::<32>());
        let struct_hash = keccak256(&struct_buf);

        let mut final_buf = Vec::with_capacity(2 + 32 + 32);
        final_buf.extend_from_slice(b"\x19\x01");
        final_buf.extend_from_slice(domain_separator.as_slice());
        final_buf.extend_from_slice(struct_hash.as_slice());
        keccak256(&final_buf)
    }
}

fn pad_address(address: Address) -> [u8; 32] {
    let mut padded = [0u8; 32];
    padded[12..32].copy_from_slice(address.as_slice());
    padded
}

/// Ethereum address controlled by `key`.
pub fn signer_address(key: &SigningKey) -> Address {
    let point = key.verifying_key().to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}

/// Sign `request` with the user's key, producing the approval sub-intent.
///
/// Fails if `key` does not belong to `request.user`; BentoBox would reject the signature.
pub fn sign_approval(
    request: &ApprovalRequest,
    key: &SigningKey,
) -> Result<MasterContractApproval, CookError> {
    let signer = signer_address(key);
    if signer != request.user {
        return Err(CookError::Signing(format!(
            "key controls {signer}, approval is for {}",
            request.user
        )));
    }

    let digest = request.digest();
    let (signature, recovery_id) = key
        .sign_prehash_recoverable(digest.as_slice())
        .map_err(|e| CookError::Signing(e.to_string()))?;
    let (r, s) = signature.split_bytes();

    tracing::debug!(user = %request.user, approved = request.approved, "signed master contract approval");
    Ok(MasterContractApproval {
        user: request.user,
        master_contract: request.master_contract,
        approved: request.approved,
        v: 27 + recovery_id.to_byte(),
        r: B256::from_slice(&r),
        s: B256::from_slice(&s),
    })
}
