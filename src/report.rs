//! Human-readable output printed by the token binaries.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::auth::IssuedToken;
use crate::claims::{BookingClaims, StaffClaims};

pub fn hotel_admin_report(issued: &IssuedToken<StaffClaims>) -> String {
    format!("Hotel admin token: {}", issued.token)
}

/// Token, username, hotel ID, tenant ID and expiry, one per line.
pub fn staff_report(issued: &IssuedToken<StaffClaims>) -> String {
    let claims = &issued.claims;
    [
        format!("Token: {}", issued.token),
        format!("Username: {}", claims.email),
        format!("Hotel ID: {}", display_or_none(claims.hotel_id)),
        format!("Tenant ID: {}", display_or_none(claims.tenant_id.as_deref())),
        format!("Expires: {}", format_timestamp(claims.exp)),
    ]
    .join("\n")
}

pub fn booking_report(issued: &IssuedToken<BookingClaims>) -> String {
    format!("Booking management token: {}", issued.token)
}

/// RFC 3339 rendering of a Unix timestamp, or `invalid`.
pub fn format_timestamp(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "invalid".to_string())
}

fn display_or_none<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "none".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::{staff_validity, StaffIdentity};

    fn staff(identity: StaffIdentity) -> IssuedToken<StaffClaims> {
        let now = DateTime::from_timestamp(1_756_323_594, 0).unwrap();
        IssuedToken {
            token: "h.p.s".to_string(),
            claims: StaffClaims::new(identity, now, staff_validity()).unwrap(),
        }
    }

    #[test]
    fn test_staff_report_has_five_lines() {
        let report = staff_report(&staff(StaffIdentity::default()));
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Token: h.p.s",
                "Username: hotel.admin@sheraton-addis.et",
                "Hotel ID: 14",
                "Tenant ID: ethiopian-heritage",
                "Expires: 2025-08-28T19:39:54Z",
            ]
        );
    }

    #[test]
    fn test_staff_report_without_hotel() {
        let identity = StaffIdentity {
            hotel_id: None,
            tenant_id: None,
            ..StaffIdentity::default()
        };
        let report = staff_report(&staff(identity));
        assert!(report.contains("Hotel ID: none"));
        assert!(report.contains("Tenant ID: none"));
    }

    #[test]
    fn test_single_line_reports() {
        let issued = staff(StaffIdentity::default());
        assert_eq!(hotel_admin_report(&issued), "Hotel admin token: h.p.s");
    }
}
