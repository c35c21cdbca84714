//! Token issuance and verification

use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, IssuedToken};
use crate::domain::entities::user::User;
use crate::errors::{DomainResult, TokenError};
use crate::repositories::UserRepository;

use super::config::TokenServiceConfig;

/// Signs access tokens and resolves them back to live users
///
/// The signing secret comes from [`TokenServiceConfig`]; two services built
/// with different secrets reject each other's tokens.
pub struct TokenService<U: UserRepository + ?Sized> {
    users: Arc<U>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    /// Same checks without the signature, so expiry is reported first
    expiry_validation: Validation,
}

impl<U: UserRepository + ?Sized> TokenService<U> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `users` - Credential store used to re-fetch token subjects
    /// * `config` - Secret, algorithm and lifetime
    pub fn new(users: Arc<U>, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;

        let mut expiry_validation = validation.clone();
        expiry_validation.insecure_disable_signature_validation();

        Self {
            users,
            config,
            encoding_key,
            decoding_key,
            validation,
            expiry_validation,
        }
    }

    /// Signs a token for `user` valid for `ttl_seconds`
    ///
    /// Has no side effects; recording the login is the caller's job.
    pub fn issue(&self, user: &User, ttl_seconds: i64) -> DomainResult<IssuedToken> {
        let claims = Claims::for_user(user, ttl_seconds);
        let header = Header::new(self.config.algorithm);
        let token = encode(&header, &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, user_id = user.id, "Failed to sign access token");
            TokenError::GenerationFailed
        })?;

        Ok(IssuedToken {
            token,
            expires_in: ttl_seconds,
        })
    }

    /// Signs a token with the configured lifetime
    pub fn issue_access_token(&self, user: &User) -> DomainResult<IssuedToken> {
        self.issue(user, self.config.access_token_ttl_seconds)
    }

    /// Decodes and checks a token without touching the credential store
    ///
    /// Expiry is checked before the signature: an expired token is
    /// `Expired` whoever signed it.
    pub fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        let unverified = decode::<Claims>(token, &self.decoding_key, &self.expiry_validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;
        if unverified.claims.is_expired() {
            return Err(TokenError::Expired);
        }

        let verified = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;

        Ok(verified.claims)
    }

    /// Resolves a token to the current state of its subject
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The live, active user (not the claims snapshot)
    /// * `Err(DomainError::Token(_))` - One of the verification failures
    /// * `Err(DomainError::Internal)` - The credential store failed
    pub async fn verify(&self, token: &str) -> DomainResult<User> {
        let claims = self.decode_claims(token)?;
        let user_id = claims.user_id().ok_or(TokenError::Malformed)?;

        match self.users.find_by_id(user_id).await? {
            Some(user) if user.is_active => Ok(user),
            Some(_) => {
                tracing::debug!(user_id, "Token subject is inactive");
                Err(TokenError::UnknownOrInactiveSubject.into())
            }
            None => {
                tracing::debug!(user_id, "Token subject no longer exists");
                Err(TokenError::UnknownOrInactiveSubject.into())
            }
        }
    }
}
