use bcrypt::BcryptError;

/// Work factor of stored password hashes.
pub const HASH_COST: u32 = 10;

/// Hashes on a blocking thread; bcrypt at this cost takes tens of
/// milliseconds.
pub async fn hash_password(plain: &str) -> crate::error::Result<String> {
    let plain = plain.to_owned();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plain, HASH_COST))
        .await
        .map_err(|e| anyhow::anyhow!("password hashing task failed: {}", e))??;
    Ok(hashed)
}

pub async fn verify_password(plain: &str, hashed: &str) -> crate::error::Result<bool> {
    let plain = plain.to_owned();
    let hashed = hashed.to_owned();
    let ok = tokio::task::spawn_blocking(move || verify_password_blocking(&plain, &hashed))
        .await
        .map_err(|e| anyhow::anyhow!("password verification task failed: {}", e))??;
    Ok(ok)
}

/// A hash the library cannot parse is a mismatch, not a server error.
fn verify_password_blocking(plain: &str, hashed: &str) -> Result<bool, BcryptError> {
    match bcrypt::verify(plain, hashed) {
        Ok(ok) => Ok(ok),
        Err(BcryptError::InvalidHash(_))
        | Err(BcryptError::InvalidPrefix(_))
        | Err(BcryptError::InvalidBase64(_)) => Ok(false),
        Err(err) => Err(err),
    }
}
