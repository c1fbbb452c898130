use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::claims::{
    booking_validity, hotel_admin_validity, staff_validity, BookingClaims, StaffClaims,
    StaffIdentity, BOOKING_MANAGEMENT_TYPE,
};
use crate::config::SigningConfig;
use crate::error::{Result, TokenError};

/// A freshly signed token together with the claims it carries.
#[derive(Debug, Clone)]
pub struct IssuedToken<C> {
    pub token: String,
    pub claims: C,
}

impl<C> IssuedToken<C> {
    fn new(token: String, claims: C) -> Self {
        Self { token, claims }
    }
}

/// Sign any claim set into a compact JWT.
pub fn issue_token<C: Serialize>(config: &SigningConfig, claims: &C) -> Result<String> {
    let token = encode(
        &Header::new(config.algorithm()),
        claims,
        &EncodingKey::from_secret(config.secret()),
    )?;
    Ok(token)
}

/// Helper to create a staff token with a custom validity
pub fn issue_staff_token_with_validity(
    config: &SigningConfig,
    identity: StaffIdentity,
    validity: Duration,
) -> Result<IssuedToken<StaffClaims>> {
    let claims = StaffClaims::new(identity, Utc::now(), validity)?;
    let token = issue_token(config, &claims)?;
    tracing::debug!(sub = %claims.sub, exp = claims.exp, "issued staff token");
    Ok(IssuedToken::new(token, claims))
}

/// Hotel admin token, valid for 30 days.
pub fn issue_hotel_admin_token(
    config: &SigningConfig,
    identity: StaffIdentity,
) -> Result<IssuedToken<StaffClaims>> {
    issue_staff_token_with_validity(config, identity, hotel_admin_validity())
}

/// Staff user token, valid for 24 hours.
pub fn issue_staff_token(
    config: &SigningConfig,
    identity: StaffIdentity,
) -> Result<IssuedToken<StaffClaims>> {
    issue_staff_token_with_validity(config, identity, staff_validity())
}

/// Helper to create a booking management token with a custom validity
pub fn issue_booking_token_with_validity(
    config: &SigningConfig,
    reservation_id: i64,
    guest_email: &str,
    validity: Duration,
) -> Result<IssuedToken<BookingClaims>> {
    let claims = BookingClaims::new(reservation_id, guest_email, Utc::now(), validity)?;
    let token = issue_token(config, &claims)?;
    tracing::debug!(sub = %claims.sub, exp = claims.exp, "issued booking token");
    Ok(IssuedToken::new(token, claims))
}

/// Booking management token, valid for 365 days.
pub fn issue_booking_token(
    config: &SigningConfig,
    reservation_id: i64,
    guest_email: &str,
) -> Result<IssuedToken<BookingClaims>> {
    issue_booking_token_with_validity(config, reservation_id, guest_email, booking_validity())
}

/// Link a guest follows to manage their reservation.
pub fn booking_management_url(base_url: &str, token: &str) -> String {
    format!(
        "{}/guest-booking-management?token={}",
        base_url.trim_end_matches('/'),
        token
    )
}

/// Helper to verify a token's signature and expiry and return its claims.
pub fn verify_token<C: DeserializeOwned>(config: &SigningConfig, token: &str) -> Result<C> {
    let decoding_key = DecodingKey::from_secret(config.secret());
    let mut validation = Validation::new(config.algorithm());
    validation.leeway = 0;

    let token_data = decode::<C>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        e
    })?;
    Ok(token_data.claims)
}

/// Verify a booking management token, rejecting any other token type.
pub fn verify_booking_token(config: &SigningConfig, token: &str) -> Result<BookingClaims> {
    let claims: BookingClaims = verify_token(config, token)?;
    if claims.token_type != BOOKING_MANAGEMENT_TYPE {
        return Err(TokenError::WrongTokenType {
            expected: BOOKING_MANAGEMENT_TYPE.to_string(),
            found: claims.token_type,
        });
    }
    Ok(claims)
}

/// Header and payload of a token, read without checking the signature.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    pub header: Value,
    pub payload: Value,
}

impl DecodedToken {
    pub fn algorithm(&self) -> Option<&str> {
        self.header.get("alg").and_then(Value::as_str)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.payload
            .get("exp")
            .and_then(Value::as_i64)
            .and_then(|exp| DateTime::from_timestamp(exp, 0))
    }
}

/// Decode header and payload without verification.
pub fn decode_unverified(token: &str) -> Result<DecodedToken> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::Malformed(format!(
            "expected 3 segments, found {}",
            parts.len()
        )));
    }

    Ok(DecodedToken {
        header: decode_segment(parts[0])?,
        payload: decode_segment(parts[1])?,
    })
}

fn decode_segment(segment: &str) -> Result<Value> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| TokenError::Malformed(format!("base64 decode failed: {}", e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| TokenError::Malformed(format!("invalid JSON segment: {}", e)))
}
