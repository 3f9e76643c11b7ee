//! secp256k1 signature verification.
//!
//! Signatures are 64-byte `r || s` over the SHA-256 digest of the sign
//! bytes. High-S signatures are rejected so a valid signature has exactly
//! one encoding.

use crate::domain::SignatureError;
use crate::ports::{SignatureVerifier, SignerData};
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature, VerifyingKey};
use sha2::{Digest, Sha256};
use shared_types::PublicKey;

#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Verifier;

impl Secp256k1Verifier {
    pub fn new() -> Self {
        Self
    }
}

impl SignatureVerifier for Secp256k1Verifier {
    fn verify(
        &self,
        pub_key: &PublicKey,
        _signer: &SignerData,
        signature: &[u8],
        sign_bytes: &[u8],
    ) -> Result<(), SignatureError> {
        let verifying_key = VerifyingKey::from_sec1_bytes(pub_key.as_bytes())
            .map_err(|e| SignatureError::InvalidKey(e.to_string()))?;

        let signature = Signature::from_slice(signature)
            .map_err(|e| SignatureError::InvalidFormat(e.to_string()))?;
        if signature.normalize_s().is_some() {
            return Err(SignatureError::Malleable);
        }

        let digest = Sha256::digest(sign_bytes);
        verifying_key
            .verify_prehash(&digest, &signature)
            .map_err(|_| SignatureError::Mismatch)
    }
}
