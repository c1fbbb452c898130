use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use hotel_jwt::auth::{
    booking_management_url, decode_unverified, issue_booking_token,
    issue_booking_token_with_validity, issue_staff_token_with_validity, verify_booking_token,
    verify_token,
};
use hotel_jwt::claims::{
    validity_days, validity_hours, StaffClaims, StaffIdentity, DEFAULT_GUEST_EMAIL,
    DEFAULT_RESERVATION_ID, HOTEL_ADMIN_ROLE,
};
use hotel_jwt::config::{load_env_file, SigningConfig, SECRET_ENV};
use hotel_jwt::report::{booking_report, format_timestamp, hotel_admin_report, staff_report};
use hotel_jwt::{init_logging, Result};

#[derive(Parser)]
#[command(name = "hotel-jwt")]
#[command(about = "Mint and inspect HS512 tokens for the hotel booking backend", long_about = None)]
#[command(version)]
struct Cli {
    /// Shared signing secret
    #[arg(long, global = true, env = SECRET_ENV, hide_env_values = true)]
    secret: Option<String>,

    /// Extra env file to load before resolving the secret
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hotel admin token (30 days by default)
    Admin {
        #[command(flatten)]
        identity: IdentityArgs,
        /// Validity in days
        #[arg(long, default_value = "30")]
        days: i64,
    },
    /// Staff user token (24 hours by default)
    User {
        #[command(flatten)]
        identity: IdentityArgs,
        /// Validity in hours
        #[arg(long, default_value = "24")]
        hours: i64,
    },
    /// Booking management token for an anonymous guest (365 days by default)
    Booking {
        #[command(flatten)]
        booking: BookingArgs,
        /// Validity in days
        #[arg(long, default_value = "365")]
        days: i64,
    },
    /// Guest booking management link
    BookingUrl {
        #[command(flatten)]
        booking: BookingArgs,
        /// Frontend base URL
        #[arg(long, default_value = "http://localhost:5173")]
        base_url: String,
    },
    /// Decode and display a token (without verification)
    Decode {
        /// JWT token
        token: String,
    },
    /// Verify a token against the signing secret
    Verify {
        /// JWT token
        token: String,
        /// Expect a booking management token
        #[arg(long)]
        booking: bool,
    },
}

#[derive(Args)]
struct IdentityArgs {
    #[arg(long, default_value = "118")]
    user_id: i64,
    #[arg(long, default_value = "hotel.admin@sheraton-addis.et")]
    email: String,
    #[arg(long, default_value = "Hawaryat")]
    first_name: String,
    #[arg(long, default_value = "Bekele")]
    last_name: String,
    /// Role, repeatable
    #[arg(long = "role", default_value = HOTEL_ADMIN_ROLE)]
    roles: Vec<String>,
    /// Ignored with --system-wide
    #[arg(long, default_value = "14")]
    hotel_id: Option<i64>,
    #[arg(long, default_value = "ethiopian-heritage")]
    tenant_id: Option<String>,
    #[arg(long)]
    hotel_name: Option<String>,
    /// Issue a system-wide token with null hotel and tenant
    #[arg(long, conflicts_with_all = ["hotel_id", "tenant_id", "hotel_name"])]
    system_wide: bool,
}

impl From<IdentityArgs> for StaffIdentity {
    /// `--system-wide` clears hotel and tenant so both serialize as null.
    fn from(args: IdentityArgs) -> Self {
        let (hotel_id, tenant_id) = if args.system_wide {
            (None, None)
        } else {
            (args.hotel_id, args.tenant_id)
        };
        Self {
            user_id: args.user_id,
            email: args.email,
            first_name: args.first_name,
            last_name: args.last_name,
            roles: args.roles,
            hotel_id,
            tenant_id,
            hotel_name: args.hotel_name,
        }
    }
}

#[derive(Args)]
struct BookingArgs {
    #[arg(long, default_value_t = DEFAULT_RESERVATION_ID)]
    reservation_id: i64,
    #[arg(long, default_value = DEFAULT_GUEST_EMAIL)]
    guest_email: String,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let secret = cli.secret;
    let env_file = cli.env_file;
    let signing = || signing_config(secret.clone(), env_file.as_deref());

    match cli.command {
        Commands::Admin { identity, days } => {
            let issued = issue_staff_token_with_validity(
                &signing()?,
                identity.into(),
                validity_days(days)?,
            )?;
            println!("{}", hotel_admin_report(&issued));
        }
        Commands::User { identity, hours } => {
            let issued = issue_staff_token_with_validity(
                &signing()?,
                identity.into(),
                validity_hours(hours)?,
            )?;
            println!("{}", staff_report(&issued));
        }
        Commands::Booking { booking, days } => {
            let issued = issue_booking_token_with_validity(
                &signing()?,
                booking.reservation_id,
                &booking.guest_email,
                validity_days(days)?,
            )?;
            println!("{}", booking_report(&issued));
        }
        Commands::BookingUrl { booking, base_url } => {
            println!("{}", booking_url(&signing()?, &booking, &base_url)?);
        }
        Commands::Decode { token } => cmd_decode(&token)?,
        Commands::Verify { token, booking } => cmd_verify(&signing()?, &token, booking)?,
    }
    Ok(())
}

/// `--secret` (or `JWT_SECRET` captured at parse time) wins, then whatever
/// `--env-file` and `.env` put into the environment.
fn signing_config(secret: Option<String>, env_file: Option<&Path>) -> Result<SigningConfig> {
    if let Some(path) = env_file {
        load_env_file(path)?;
    }
    SigningConfig::resolve(secret)
}

fn booking_url(config: &SigningConfig, booking: &BookingArgs, base_url: &str) -> Result<String> {
    let issued = issue_booking_token(config, booking.reservation_id, &booking.guest_email)?;
    Ok(booking_management_url(base_url, &issued.token))
}

fn cmd_decode(token: &str) -> Result<()> {
    let decoded = decode_unverified(token)?;

    println!("Header:");
    println!("{}", pretty(&decoded.header)?);
    println!("Payload:");
    println!("{}", pretty(&decoded.payload)?);

    if let Some(exp) = decoded.expires_at() {
        let when = format_timestamp(exp.timestamp());
        if exp < Utc::now() {
            println!("\nToken expired at {}", when);
        } else {
            println!("\nExpires at {}", when);
        }
    }
    Ok(())
}

fn cmd_verify(config: &SigningConfig, token: &str, booking: bool) -> Result<()> {
    let claims = if booking {
        serde_json::to_value(verify_booking_token(config, token)?)?
    } else {
        serde_json::to_value(verify_token::<StaffClaims>(config, token)?)?
    };

    println!("valid");
    println!("{}", pretty(&claims)?);
    Ok(())
}

fn pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
