//! Authentication endpoints.
//!
//! `AuthApi` is a passthrough over the shared [`Transport`]: each method
//! issues exactly one call to a fixed path and returns the decoded body.
//! Failures are returned as the transport produced them.

use chrono::{DateTime, Utc};
use console_model::{Organisation, User};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::endpoints::{AUTH_LOGIN, AUTH_SEND_OTP, AUTH_UPDATE_PASSWORD, AUTH_VERIFY_OTP};
use crate::error::ApiResult;
use crate::transport::{decode, encode, Transport};

/// Credentials for `POST /auth/login`.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,

    /// Plain-text password.
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginRequest {
    /// Create a login request.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Token payload returned by OTP verification and password updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    /// Access token (JWT).
    pub access_token: String,

    /// Refresh token, if issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Access token lifetime in seconds, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

/// Session payload returned by `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Issued tokens.
    #[serde(flatten)]
    pub token: TokenData,

    /// The signed-in user, if the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Organisations the user can switch between.
    #[serde(default)]
    pub organisations: Vec<Organisation>,
}

/// Claims read from an access token without verifying its signature.
///
/// Verification belongs to the backend; the console only reads the claims to
/// decide when to prompt for a new session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (user id).
    pub sub: String,

    /// Expiry as a Unix timestamp.
    #[serde(default)]
    pub exp: Option<i64>,

    /// Email, if present.
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionClaims {
    /// Expiry as a timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Check if the token is expired at `now`. Tokens without `exp` never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().map(|at| at <= now).unwrap_or(false)
    }
}

#[cfg(feature = "jwt")]
impl TokenData {
    /// Read the access token's claims without verifying its signature.
    pub fn claims(&self) -> ApiResult<SessionClaims> {
        use jsonwebtoken::{decode as decode_jwt, Algorithm, DecodingKey, Validation};

        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        decode_jwt::<SessionClaims>(&self.access_token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .map_err(|e| crate::error::ApiError::Decode(format!("access token: {}", e)))
    }
}

/// Authentication endpoint wrapper.
#[derive(Clone)]
pub struct AuthApi {
    transport: Arc<dyn Transport>,
}

impl AuthApi {
    /// Create a wrapper over the shared transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Sign in with email and password.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        debug!("Signing in");
        let body = self.transport.post(AUTH_LOGIN, encode(request)?).await?;
        decode(body)
    }

    /// Request a one-time password. The response shape is backend-defined.
    #[instrument(skip(self, payload))]
    pub async fn send_otp<P>(&self, payload: &P) -> ApiResult<Value>
    where
        P: Serialize + Sync + ?Sized,
    {
        self.transport.post(AUTH_SEND_OTP, encode(payload)?).await
    }

    /// Exchange a one-time password for tokens.
    #[instrument(skip(self, payload))]
    pub async fn verify_otp<P>(&self, payload: &P) -> ApiResult<TokenData>
    where
        P: Serialize + Sync + ?Sized,
    {
        let body = self.transport.post(AUTH_VERIFY_OTP, encode(payload)?).await?;
        decode(body)
    }

    /// Set a new password.
    #[instrument(skip(self, payload))]
    pub async fn update_password<P>(&self, payload: &P) -> ApiResult<TokenData>
    where
        P: Serialize + Sync + ?Sized,
    {
        let body = self
            .transport
            .post(AUTH_UPDATE_PASSWORD, encode(payload)?)
            .await?;
        decode(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_login_request_debug_redacts_password() {
        let request = LoginRequest::new("ada@acme.io", "hunter2");
        let printed = format!("{:?}", request);
        assert!(printed.contains("ada@acme.io"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_login_response_flattens_tokens() {
        let json = r#"{
            "accessToken": "abc",
            "refreshToken": "def",
            "organisations": [
                {"id": "0190c1d2-0000-7000-8000-000000000001", "name": "Acme", "isOwner": true}
            ]
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.token.access_token, "abc");
        assert_eq!(response.token.refresh_token.as_deref(), Some("def"));
        assert_eq!(response.organisations.len(), 1);
        assert!(response.user.is_none());
    }

    #[test]
    fn test_session_claims_expiry() {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: "user-1".to_string(),
            exp: Some((now - Duration::minutes(5)).timestamp()),
            email: None,
        };
        assert!(claims.is_expired_at(now));

        let claims = SessionClaims {
            exp: Some((now + Duration::hours(1)).timestamp()),
            ..claims
        };
        assert!(!claims.is_expired_at(now));

        let claims = SessionClaims { exp: None, ..claims };
        assert!(!claims.is_expired_at(now));
    }

    #[cfg(feature = "jwt")]
    #[test]
    fn test_token_claims_are_read_without_the_secret() {
        use jsonwebtoken::{encode as encode_jwt, EncodingKey, Header};

        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let claims = SessionClaims {
            sub: "user-42".to_string(),
            exp: Some(exp),
            email: Some("ada@acme.io".to_string()),
        };
        let token = encode_jwt(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"backend-only-secret"),
        )
        .unwrap();

        let data = TokenData {
            access_token: token,
            refresh_token: None,
            expires_in: Some(3600),
        };
        let decoded = data.claims().unwrap();

        assert_eq!(decoded.sub, "user-42");
        assert_eq!(decoded.exp, Some(exp));
        assert!(!decoded.is_expired_at(Utc::now()));
    }

    #[cfg(feature = "jwt")]
    #[test]
    fn test_malformed_token_is_a_decode_error() {
        let data = TokenData {
            access_token: "not-a-jwt".to_string(),
            refresh_token: None,
            expires_in: None,
        };
        assert!(matches!(data.claims(), Err(crate::error::ApiError::Decode(_))));
    }
}
