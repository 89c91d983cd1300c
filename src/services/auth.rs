use actix_web::{dev::Payload, http::StatusCode, web, FromRequest, HttpRequest, HttpResponse, ResponseError};
use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use thiserror::Error;
use crate::models::ErrorResponse;
use crate::routes::AppState;

/// Errors that can occur while authenticating an agent
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid session token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Failed to encode session token: {0}")]
    TokenEncoding(jsonwebtoken::errors::Error),

    #[error("Session state unavailable")]
    Unavailable,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::TokenEncoding(_) | AuthError::Unavailable => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error = if status == StatusCode::UNAUTHORIZED { "Unauthorized" } else { "Internal error" };
        HttpResponse::build(status).json(ErrorResponse::new(error, self.to_string(), status.as_u16()))
    }
}

/// A verified agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentIdentity {
    pub username: String,
}

/// Credential verification backend
///
/// Implementations delegate to whatever identity provider the deployment uses.
pub trait IdentityProvider: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> Result<AgentIdentity, AuthError>;
}

/// Single agent credential taken from settings
///
/// Intended for local development and demos.
pub struct ConfiguredIdentityProvider {
    username: String,
    password: String,
}

impl ConfiguredIdentityProvider {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl IdentityProvider for ConfiguredIdentityProvider {
    fn verify(&self, username: &str, password: &str) -> Result<AgentIdentity, AuthError> {
        if username == self.username && password == self.password {
            Ok(AgentIdentity { username: username.to_string() })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Authenticated agent session, carried by a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Issues and validates signed session tokens
pub struct SessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl SessionManager {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Issue a token for a verified identity
    pub fn issue(&self, identity: &AgentIdentity) -> Result<(String, Session), AuthError> {
        self.issue_at(identity, Utc::now())
    }

    pub fn issue_at(&self, identity: &AgentIdentity, now: DateTime<Utc>) -> Result<(String, Session), AuthError> {
        let expires_at = now + self.ttl;
        let claims = Claims {
            sub: identity.username.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(AuthError::TokenEncoding)?;

        Ok((token, session_from_claims(&claims)))
    }

    /// Validate a token and recover its session
    pub fn validate(&self, token: &str) -> Result<Session, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(session_from_claims(&data.claims))
    }
}

fn session_from_claims(claims: &Claims) -> Session {
    Session {
        username: claims.sub.clone(),
        issued_at: Utc.timestamp_opt(claims.iat, 0).single().unwrap_or_default(),
        expires_at: Utc.timestamp_opt(claims.exp, 0).single().unwrap_or_default(),
    }
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequest for Session {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.app_data::<web::Data<AppState>>() {
            None => Err(AuthError::Unavailable),
            Some(state) => match bearer_token(req) {
                None => Err(AuthError::MissingToken),
                Some(token) => state.sessions.validate(token),
            },
        };

        if let Err(e) = &result {
            tracing::debug!("Rejected session on {}: {}", req.path(), e);
        }

        ready(result)
    }
}
