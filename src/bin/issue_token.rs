//! Mints a bearer token accepted by the running service.
//!
//! Reads the same `JWT_SECRET` / `JWT_ISSUER` / `JWT_AUDIENCE` settings as the
//! server (including `.env`) and prints the token on stdout.

use chrono::Duration;
use clap::Parser;
use point_of_sale::auth::jwt::JwtKeys;
use point_of_sale::config::JwtConfig;

#[derive(Debug, Parser)]
#[command(name = "issue-token", about = "Issue a development bearer token")]
struct Args {
    /// Subject (`sub` claim) of the token
    #[arg(long, default_value = "developer")]
    subject: String,

    /// Lifetime of the token in hours
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(i64).range(1..))]
    ttl_hours: i64,
}

fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = match JwtConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    match JwtKeys::new(&config).sign(&args.subject, Duration::hours(args.ttl_hours)) {
        Ok(token) => println!("{token}"),
        Err(e) => {
            eprintln!("error: {e:?}");
            std::process::exit(1);
        }
    }
}
