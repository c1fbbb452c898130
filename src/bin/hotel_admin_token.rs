use hotel_jwt::claims::StaffIdentity;
use hotel_jwt::report::hotel_admin_report;
use hotel_jwt::{init_logging, issue_hotel_admin_token, SigningConfig};

fn main() {
    init_logging();

    let result = SigningConfig::resolve(None)
        .and_then(|config| issue_hotel_admin_token(&config, StaffIdentity::default()));

    match result {
        Ok(issued) => println!("{}", hotel_admin_report(&issued)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
