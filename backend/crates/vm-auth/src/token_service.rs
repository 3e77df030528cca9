use crate::{AuthError, Claims, Result as AuthErrorResult, Subject};

use vm_core::Role;

use std::panic::Location;

use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::debug;

/// Lifetime of every token issued at login
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

/// Issues and verifies HS256 identity tokens with one process-wide secret
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl: Duration::days(DEFAULT_TOKEN_TTL_DAYS),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject` that expires after the standard ttl
    #[track_caller]
    pub fn issue(&self, subject: Subject, role: Role) -> AuthErrorResult<String> {
        self.issue_with_ttl(subject, role, self.ttl)
    }

    #[track_caller]
    pub fn issue_with_ttl(
        &self,
        subject: Subject,
        role: Role,
        ttl: Duration,
    ) -> AuthErrorResult<String> {
        let exp = (Utc::now() + ttl).timestamp();
        debug!("Issuing {} token for {} (exp {})", role, subject.email, exp);
        self.sign(&Claims::new(subject, role, exp))
    }

    #[track_caller]
    pub fn sign(&self, claims: &Claims) -> AuthErrorResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            AuthError::TokenEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Decode `token`, checking signature first and expiry second.
    ///
    /// Only two failure kinds leave this function: `TokenExpired` and
    /// `InvalidToken`.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::InvalidToken {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })
    }
}
