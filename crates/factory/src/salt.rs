use alloy::primitives::B256;

/// Generate a fresh random salt for a token deployment.
///
/// The factory derives the token ID from the deployer and the salt, so each
/// new deployment needs its own.
pub fn generate_salt() -> B256 {
    B256::random()
}
