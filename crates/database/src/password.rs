use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::Rng;
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "pbkdf2:sha256";
const ITERATIONS: u32 = 260_000;
const KEY_LENGTH: usize = 32;
const SALT_LENGTH: usize = 16;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("malformed password hash")]
    MalformedHash,

    #[error("key derivation failed")]
    Derivation,
}

/// Hashes a password as `pbkdf2:sha256:<iterations>$<salt>$<hash>`, salt and
/// hash being unpadded URL-safe base64
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill(&mut salt);

    let mut key = [0u8; KEY_LENGTH];
    derive(password, &salt, ITERATIONS, &mut key)?;

    Ok(format!(
        "{ALGORITHM}:{ITERATIONS}${}${}",
        URL_SAFE_NO_PAD.encode(salt),
        URL_SAFE_NO_PAD.encode(key)
    ))
}

/// Checks a password against a hash produced by [`hash_password`]
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    let mut parts = stored_hash.split('$');
    let (Some(header), Some(salt), Some(hash), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(PasswordError::MalformedHash);
    };

    let iterations = header
        .strip_prefix(ALGORITHM)
        .and_then(|rest| rest.strip_prefix(':'))
        .and_then(|n| n.parse::<u32>().ok())
        .ok_or(PasswordError::MalformedHash)?;

    let salt = URL_SAFE_NO_PAD
        .decode(salt)
        .map_err(|_| PasswordError::MalformedHash)?;
    let expected = URL_SAFE_NO_PAD
        .decode(hash)
        .map_err(|_| PasswordError::MalformedHash)?;

    let mut computed = vec![0u8; expected.len()];
    derive(password, &salt, iterations, &mut computed)?;

    Ok(constant_time_eq(&computed, &expected))
}

fn derive(password: &str, salt: &[u8], iterations: u32, out: &mut [u8]) -> Result<(), PasswordError> {
    pbkdf2::<HmacSha256>(password.as_bytes(), salt, iterations, out)
        .map_err(|_| PasswordError::Derivation)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
