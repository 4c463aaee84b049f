//! Prints a bearer token for a user ID, for calling the API locally
//!
//! Usage: `issue_token <user-uuid>`

use chrono::Duration;
use uuid::Uuid;

use teams_api::auth::jwt::create_token;
use teams_api::config::Config;

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let user_id = match std::env::args().nth(1).map(|arg| Uuid::parse_str(&arg)) {
        Some(Ok(id)) => id,
        Some(Err(e)) => {
            eprintln!("Not a user ID: {}", e);
            std::process::exit(2);
        }
        None => {
            eprintln!("Usage: issue_token <user-uuid>");
            std::process::exit(2);
        }
    };

    match create_token(user_id, &config.jwt_secret, Duration::hours(config.token_ttl_hours)) {
        Ok(token) => println!("{}", token),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
