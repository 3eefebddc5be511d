//! Signed session tokens carried in the session cookie.
//!
//! Token format: `<session uuid>.<base64url(HMAC-SHA256(secret, uuid))>`.
//! The uuid is not secret; the signature stops clients from choosing
//! another browser's session id.

use aes_gcm::aead::{OsRng, rand_core::RngCore};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Minimum accepted session secret length in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Signs and verifies session tokens with a process-wide secret.
#[derive(Clone)]
pub struct SessionSigner {
    secret: SecretString,
}

impl SessionSigner {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC-SHA256 accepts keys of any length")
    }

    /// Produce the cookie token for `session_id`.
    pub fn sign(&self, session_id: &Uuid) -> String {
        let mut mac = self.mac();
        mac.update(session_id.to_string().as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        format!("{session_id}.{signature}")
    }

    /// Verify a token and return its session id.
    ///
    /// Returns `None` for malformed tokens or bad signatures.
    pub fn verify(&self, token: &str) -> Option<Uuid> {
        let (id_part, sig_part) = token.split_once('.')?;
        let session_id = Uuid::parse_str(id_part).ok()?;
        let signature = URL_SAFE_NO_PAD.decode(sig_part).ok()?;

        let mut mac = self.mac();
        mac.update(session_id.to_string().as_bytes());
        mac.verify_slice(&signature).ok()?;
        Some(session_id)
    }
}

/// Generate a random 32-byte secret, base64url encoded.
pub fn generate_secret() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer(secret: &str) -> SessionSigner {
        SessionSigner::new(SecretString::from(secret.to_string()))
    }

    #[test]
    fn test_sign_then_verify() {
        let s = signer("0123456789abcdef0123456789abcdef");
        let id = Uuid::now_v7();
        let token = s.sign(&id);
        assert!(token.starts_with(&id.to_string()));
        assert_eq!(s.verify(&token), Some(id));
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let a = signer("0123456789abcdef0123456789abcdef");
        let b = signer("fedcba9876543210fedcba9876543210");
        let token = a.sign(&Uuid::now_v7());
        assert_eq!(b.verify(&token), None);
    }

    #[test]
    fn test_verify_rejects_swapped_id() {
        let s = signer("0123456789abcdef0123456789abcdef");
        let token = s.sign(&Uuid::now_v7());
        let (_, sig) = token.split_once('.').unwrap();
        let forged = format!("{}.{sig}", Uuid::now_v7());
        assert_eq!(s.verify(&forged), None);
    }

    #[test]
    fn test_verify_rejects_malformed() {
        let s = signer("0123456789abcdef0123456789abcdef");
        assert_eq!(s.verify(""), None);
        assert_eq!(s.verify("not-a-token"), None);
        assert_eq!(s.verify("not-a-uuid.abc"), None);
        assert_eq!(s.verify(&format!("{}.!!!", Uuid::now_v7())), None);
    }

    #[test]
    fn test_generate_secret_is_random_and_long_enough() {
        let a = generate_secret();
        let b = generate_secret();
        assert_ne!(a, b);
        assert!(a.len() >= MIN_SECRET_LEN);
    }
}
