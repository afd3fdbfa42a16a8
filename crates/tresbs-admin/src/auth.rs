//! Credential checks for the admin login.

use argon2::{Argon2, PasswordHash, PasswordVerifier};

use crate::{Error, Result};

/// Decides whether a username/password pair may open an admin session.
pub trait Authenticator: Send + Sync {
  fn verify(&self, username: &str, password: &str) -> Result<()>;

  /// `true` for stand-in implementations that do not actually check
  /// credentials.
  fn is_placeholder(&self) -> bool { false }
}

// ─── Placeholder ─────────────────────────────────────────────────────────────

/// Accepts any pair where both fields are non-blank.
///
/// This is a stub standing in for a real identity provider. It is used only
/// when no password hash is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAuthenticator;

impl Authenticator for PlaceholderAuthenticator {
  fn verify(&self, username: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() || password.trim().is_empty() {
      return Err(Error::Unauthorized);
    }
    Ok(())
  }

  fn is_placeholder(&self) -> bool { true }
}

// ─── Argon2 ──────────────────────────────────────────────────────────────────

/// A single configured user with an argon2 password hash.
#[derive(Clone)]
pub struct Argon2Authenticator {
  username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  password_hash: String,
}

impl Argon2Authenticator {
  /// Fails if `password_hash` is not a valid PHC string.
  pub fn new(
    username: impl Into<String>,
    password_hash: impl Into<String>,
  ) -> std::result::Result<Self, argon2::password_hash::Error> {
    let password_hash = password_hash.into();
    PasswordHash::new(&password_hash)?;
    Ok(Self { username: username.into(), password_hash })
  }
}

impl Authenticator for Argon2Authenticator {
  fn verify(&self, username: &str, password: &str) -> Result<()> {
    if username != self.username {
      return Err(Error::Unauthorized);
    }

    let parsed_hash =
      PasswordHash::new(&self.password_hash).map_err(|_| Error::Unauthorized)?;

    Argon2::default()
      .verify_password(password.as_bytes(), &parsed_hash)
      .map_err(|_| Error::Unauthorized)
  }
}

#[cfg(test)]
mod tests {
  use argon2::{PasswordHasher, password_hash::SaltString};
  use rand_core::OsRng;

  use super::*;

  fn hash(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .unwrap()
      .to_string()
  }

  #[test]
  fn placeholder_accepts_any_non_blank_pair() {
    let auth = PlaceholderAuthenticator;
    assert!(auth.verify("anyone", "anything").is_ok());
    assert!(matches!(auth.verify("admin", "  "), Err(Error::Unauthorized)));
    assert!(matches!(auth.verify("", "secret"), Err(Error::Unauthorized)));
    assert!(auth.is_placeholder());
  }

  #[test]
  fn argon2_correct_credentials() {
    let auth = Argon2Authenticator::new("admin", hash("secret")).unwrap();
    assert!(auth.verify("admin", "secret").is_ok());
    assert!(!auth.is_placeholder());
  }

  #[test]
  fn argon2_wrong_password() {
    let auth = Argon2Authenticator::new("admin", hash("secret")).unwrap();
    assert!(matches!(auth.verify("admin", "wrong"), Err(Error::Unauthorized)));
  }

  #[test]
  fn argon2_wrong_username() {
    let auth = Argon2Authenticator::new("admin", hash("secret")).unwrap();
    assert!(matches!(auth.verify("root", "secret"), Err(Error::Unauthorized)));
  }

  #[test]
  fn malformed_hash_is_rejected_up_front() {
    assert!(Argon2Authenticator::new("admin", "not-a-phc-string").is_err());
  }
}
