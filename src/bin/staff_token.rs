use hotel_jwt::claims::StaffIdentity;
use hotel_jwt::report::staff_report;
use hotel_jwt::{init_logging, issue_staff_token, SigningConfig};

fn main() {
    init_logging();

    let result = SigningConfig::resolve(None)
        .and_then(|config| issue_staff_token(&config, StaffIdentity::default()));

    match result {
        Ok(issued) => println!("{}", staff_report(&issued)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
