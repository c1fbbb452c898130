pub mod auth;
pub mod claims;
pub mod config;
pub mod error;
pub mod report;

pub use auth::{
    booking_management_url, decode_unverified, issue_booking_token, issue_hotel_admin_token,
    issue_staff_token, issue_token, verify_booking_token, verify_token, IssuedToken,
};
pub use claims::{BookingClaims, StaffClaims, StaffIdentity};
pub use config::SigningConfig;
pub use error::{Result, TokenError};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stderr so stdout only carries token output. `RUST_LOG` overrides
/// the default `warn` level.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
