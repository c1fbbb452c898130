use chrono::{Duration, Utc};
use hotel_jwt::auth::{issue_booking_token_with_validity, issue_staff_token_with_validity};
use hotel_jwt::claims::StaffIdentity;
use hotel_jwt::config::DEV_SECRET;
use hotel_jwt::{
    decode_unverified, issue_booking_token, issue_hotel_admin_token, issue_staff_token,
    issue_token, verify_booking_token, verify_token, BookingClaims, SigningConfig, StaffClaims,
    TokenError,
};

const DAY: i64 = 24 * 60 * 60;

fn config() -> SigningConfig {
    SigningConfig::new(DEV_SECRET).unwrap()
}

fn other_config() -> SigningConfig {
    SigningConfig::new("x".repeat(64)).unwrap()
}

fn payload_keys(token: &str) -> Vec<String> {
    let decoded = decode_unverified(token).unwrap();
    let mut keys: Vec<String> = decoded
        .payload
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}

#[test]
fn test_hotel_admin_token_claims() {
    let issued = issue_hotel_admin_token(&config(), StaffIdentity::default()).unwrap();
    let decoded = decode_unverified(&issued.token).unwrap();
    let payload = &decoded.payload;

    assert_eq!(decoded.algorithm(), Some("HS512"));
    assert_eq!(payload["sub"], "hotel.admin@sheraton-addis.et");
    assert_eq!(payload["userId"], 118);
    assert_eq!(payload["email"], "hotel.admin@sheraton-addis.et");
    assert_eq!(payload["firstName"], "Hawaryat");
    assert_eq!(payload["lastName"], "Bekele");
    assert_eq!(payload["roles"], serde_json::json!(["HOTEL_ADMIN"]));
    assert_eq!(payload["hotelId"], 14);
    assert_eq!(payload["tenantId"], "ethiopian-heritage");

    assert_eq!(
        payload_keys(&issued.token),
        vec![
            "email", "exp", "firstName", "hotelId", "iat", "lastName", "roles", "sub",
            "tenantId", "userId"
        ]
    );
    assert_eq!(issued.claims.exp - issued.claims.iat, 30 * DAY);
}

#[test]
fn test_staff_token_validity_is_24_hours() {
    let issued = issue_staff_token(&config(), StaffIdentity::default()).unwrap();
    let claims: StaffClaims = verify_token(&config(), &issued.token).unwrap();
    assert_eq!(claims.exp - claims.iat, DAY);
}

#[test]
fn test_booking_token_scenario() {
    let before = Utc::now().timestamp();
    let issued = issue_booking_token(&config(), 6, "test@example.com").unwrap();
    let claims = verify_booking_token(&config(), &issued.token).unwrap();

    assert_eq!(claims.sub, "booking:6");
    assert_eq!(claims.reservation_id, 6);
    assert_eq!(claims.guest_email, "test@example.com");
    assert_eq!(claims.token_type, "booking_management");
    assert!((claims.exp - (claims.iat + 365 * DAY)).abs() <= 1);
    assert!(claims.iat >= before);

    assert_eq!(
        payload_keys(&issued.token),
        vec!["exp", "guestEmail", "iat", "reservationId", "sub", "type"]
    );
}

#[test]
fn test_wrong_secret_fails_verification() {
    let staff = issue_staff_token(&config(), StaffIdentity::default()).unwrap();
    let err = verify_token::<StaffClaims>(&other_config(), &staff.token).unwrap_err();
    assert!(matches!(err, TokenError::Jwt(_)));

    let booking = issue_booking_token(&config(), 6, "test@example.com").unwrap();
    assert!(verify_booking_token(&other_config(), &booking.token).is_err());
}

#[test]
fn test_token_kinds_are_not_interchangeable() {
    let staff = issue_staff_token(&config(), StaffIdentity::default()).unwrap();
    assert!(verify_booking_token(&config(), &staff.token).is_err());

    let booking = issue_booking_token(&config(), 6, "test@example.com").unwrap();
    assert!(verify_token::<StaffClaims>(&config(), &booking.token).is_err());
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now() - Duration::days(2);
    let claims = BookingClaims::new(6, "test@example.com", now, Duration::hours(1)).unwrap();
    let token = issue_token(&config(), &claims).unwrap();

    let err = verify_booking_token(&config(), &token).unwrap_err();
    match err {
        TokenError::Jwt(e) => assert!(matches!(
            e.kind(),
            jsonwebtoken::errors::ErrorKind::ExpiredSignature
        )),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_repeated_issuance_differs_only_in_timestamps() {
    let first = issue_booking_token(&config(), 6, "test@example.com").unwrap();
    let second = issue_booking_token(&config(), 6, "test@example.com").unwrap();

    let normalize = |mut claims: BookingClaims| {
        claims.iat = 0;
        claims.exp = 0;
        claims
    };
    assert!(second.claims.iat - first.claims.iat <= 1);
    assert_eq!(normalize(first.claims), normalize(second.claims));
}

#[test]
fn test_custom_validity_and_invalid_validity() {
    let issued =
        issue_staff_token_with_validity(&config(), StaffIdentity::default(), Duration::hours(2))
            .unwrap();
    assert_eq!(issued.claims.exp - issued.claims.iat, 2 * 60 * 60);

    let err = issue_booking_token_with_validity(&config(), 6, "a@b.c", Duration::days(-1))
        .unwrap_err();
    assert!(matches!(err, TokenError::InvalidValidity(_)));
}
