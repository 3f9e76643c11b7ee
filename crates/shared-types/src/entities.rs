//! # Core Domain Entities
//!
//! Defines the account-side entities shared by every subsystem that reads
//! or writes signer state.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `PublicKey`, `Hash`
//! - **Accounts**: `BaseAccount`

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use sha2::{Digest, Sha256};

/// A 32-byte hash (SHA-256).
pub type Hash = [u8; 32];

/// A 20-byte account address.
///
/// Derived from the first 20 bytes of `SHA-256(compressed_pubkey)`.
pub type Address = [u8; 20];

/// Length of a SEC1-compressed secp256k1 public key.
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// A SEC1-compressed secp256k1 public key.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(#[serde_as(as = "Bytes")] pub [u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    /// Returns the account address owned by this key.
    pub fn address(&self) -> Address {
        address_from_pubkey(&self.0)
    }

    /// Returns the raw SEC1 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Derive an account address from raw public key bytes.
pub fn address_from_pubkey(pubkey: &[u8]) -> Address {
    let digest = Sha256::digest(pubkey);
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[..20]);
    address
}

/// Lowercase hex rendering of an address, used in logs and error details.
pub fn address_to_hex(address: &Address) -> String {
    address.iter().map(|b| format!("{:02x}", b)).collect()
}

/// A signer account as held by the account store.
///
/// `sequence` is the monotonic replay counter consumed by sequence-mode
/// transactions. `pub_key` is unset until the first signed transaction
/// from the account is admitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAccount {
    /// Account address.
    pub address: Address,
    /// Public key, set on first use.
    pub pub_key: Option<PublicKey>,
    /// Globally unique account number, part of the signed payload.
    pub account_number: u64,
    /// Next expected sequence value.
    pub sequence: u64,
}

impl BaseAccount {
    /// Creates a fresh account with no public key and sequence zero.
    pub fn new(address: Address, account_number: u64) -> Self {
        Self {
            address,
            pub_key: None,
            account_number,
            sequence: 0,
        }
    }
}
