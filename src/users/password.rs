use bcrypt::hash;
use tracing::error;

/// bcrypt cost factor applied to every hash.
const COST: u32 = 10;

/// One-way hash of a plaintext password before it is persisted. bcrypt
/// generates a fresh salt per call.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    hash(plain, COST).map_err(|e| {
        error!(error = %e, "bcrypt hash error");
        anyhow::anyhow!(e.to_string())
    })
}
