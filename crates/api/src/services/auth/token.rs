//! Signed-token issuance and verification.
//!
//! Each account domain (administrator, end user) gets its own [`TokenSigner`]
//! built once from configuration; the two are never interchangeable. Claims
//! are minimal - a single identifying field. Tokens carry no expiry claim and
//! verification does not require one, so a token stays valid until its
//! signing secret rotates.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Claims carried by administrator tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub username: String,
}

/// Claims carried by end-user tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub email: String,
}

/// HS256 issuer/verifier for one signing domain.
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    /// Build a signer from the domain secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();

        // Tokens are issued without an exp claim; do not demand one back.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            validation,
        }
    }

    /// Sign a claim set into a compact token.
    ///
    /// # Errors
    ///
    /// Returns an error if the claims cannot be serialized.
    pub fn issue<C: Serialize>(&self, claims: &C) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }

    /// Verify a token's signature and decode its claims.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is malformed, signed by a different
    /// secret, or its payload does not match the expected claim shape.
    pub fn verify<C: DeserializeOwned>(
        &self,
        token: &str,
    ) -> Result<C, jsonwebtoken::errors::Error> {
        decode::<C>(token, &self.decoding, &self.validation).map(|data| data.claims)
    }
}
