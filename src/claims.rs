//! Claim sets understood by the hotel booking backend.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};

/// Discriminator carried by booking management tokens.
pub const BOOKING_MANAGEMENT_TYPE: &str = "booking_management";

pub const HOTEL_ADMIN_ROLE: &str = "HOTEL_ADMIN";

/// Validity of the hotel admin token.
pub fn hotel_admin_validity() -> Duration {
    Duration::days(30)
}

/// Validity of the staff user token.
pub fn staff_validity() -> Duration {
    Duration::hours(24)
}

/// Validity of a booking management token.
pub fn booking_validity() -> Duration {
    Duration::days(365)
}

/// Validity of `days` days, rejecting values chrono cannot represent.
pub fn validity_days(days: i64) -> Result<Duration> {
    Duration::try_days(days).ok_or(TokenError::ValidityOutOfRange {
        value: days,
        unit: "days",
    })
}

/// Validity of `hours` hours, rejecting values chrono cannot represent.
pub fn validity_hours(hours: i64) -> Result<Duration> {
    Duration::try_hours(hours).ok_or(TokenError::ValidityOutOfRange {
        value: hours,
        unit: "hours",
    })
}

/// Who a staff token is issued to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffIdentity {
    pub user_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<String>,
    /// `None` for system-wide users; hotel staff carry both ids.
    pub hotel_id: Option<i64>,
    pub tenant_id: Option<String>,
    pub hotel_name: Option<String>,
}

impl Default for StaffIdentity {
    /// The Sheraton Addis Ababa admin used throughout manual testing.
    fn default() -> Self {
        Self {
            user_id: 118,
            email: "hotel.admin@sheraton-addis.et".to_string(),
            first_name: "Hawaryat".to_string(),
            last_name: "Bekele".to_string(),
            roles: vec![HOTEL_ADMIN_ROLE.to_string()],
            hotel_id: Some(14),
            tenant_id: Some("ethiopian-heritage".to_string()),
            hotel_name: None,
        }
    }
}

/// Claims for hotel staff and admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffClaims {
    /// Subject (email)
    pub sub: String,
    pub user_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<String>,
    pub hotel_id: Option<i64>,
    pub tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    /// Issued at (UTC seconds)
    pub iat: i64,
    /// Expiration time (UTC seconds)
    pub exp: i64,
}

impl StaffClaims {
    pub fn new(
        identity: StaffIdentity,
        issued_at: DateTime<Utc>,
        validity: Duration,
    ) -> Result<Self> {
        let (iat, exp) = window(issued_at, validity)?;
        Ok(Self {
            sub: identity.email.clone(),
            user_id: identity.user_id,
            email: identity.email,
            first_name: identity.first_name,
            last_name: identity.last_name,
            roles: identity.roles,
            hotel_id: identity.hotel_id,
            tenant_id: identity.tenant_id,
            hotel_name: identity.hotel_name,
            iat,
            exp,
        })
    }
}

/// Claims letting an anonymous guest manage a single reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingClaims {
    /// `booking:<reservation id>`
    pub sub: String,
    pub reservation_id: i64,
    pub guest_email: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub iat: i64,
    pub exp: i64,
}

impl BookingClaims {
    pub fn new(
        reservation_id: i64,
        guest_email: impl Into<String>,
        issued_at: DateTime<Utc>,
        validity: Duration,
    ) -> Result<Self> {
        let (iat, exp) = window(issued_at, validity)?;
        Ok(Self {
            sub: format!("booking:{}", reservation_id),
            reservation_id,
            guest_email: guest_email.into(),
            token_type: BOOKING_MANAGEMENT_TYPE.to_string(),
            iat,
            exp,
        })
    }
}

/// Default reservation used by the booking token.
pub const DEFAULT_RESERVATION_ID: i64 = 6;
pub const DEFAULT_GUEST_EMAIL: &str = "test@example.com";

// iat and exp come from the same instant so exp - iat is exactly the validity.
fn window(issued_at: DateTime<Utc>, validity: Duration) -> Result<(i64, i64)> {
    let seconds = validity.num_seconds();
    if seconds <= 0 {
        return Err(TokenError::InvalidValidity(seconds));
    }
    let iat = issued_at.timestamp();
    Ok((iat, iat + seconds))
}
