use hotel_jwt::claims::{DEFAULT_GUEST_EMAIL, DEFAULT_RESERVATION_ID};
use hotel_jwt::report::booking_report;
use hotel_jwt::{init_logging, issue_booking_token, SigningConfig};

fn main() {
    init_logging();

    let result = SigningConfig::resolve(None).and_then(|config| {
        issue_booking_token(&config, DEFAULT_RESERVATION_ID, DEFAULT_GUEST_EMAIL)
    });

    match result {
        Ok(issued) => println!("{}", booking_report(&issued)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
