use std::env;
use tracing::{error, info};

use marquee::secure_config::SecureConfig;
use marquee::session::SessionStore;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let args: Vec<String> = env::args().collect();
    let program = program_name(&args);

    if args.len() < 2 {
        print_usage(program);
        std::process::exit(1);
    }

    let store = SessionStore::new();

    match args[1].as_str() {
        "set" => {
            let Some(token) = args.get(2) else {
                error!("set requires an access token");
                print_usage(program);
                std::process::exit(1);
            };
            if let Err(e) = store.store_access_token(token) {
                error!("Failed to store access token: {}", e);
                std::process::exit(1);
            }
        }
        "clear" => {
            if let Err(e) = store.clear() {
                error!("Failed to clear access token: {}", e);
                std::process::exit(1);
            }
        }
        "status" => match store.access_token() {
            Ok(Some(_)) => println!("logged in"),
            Ok(None) => println!("logged out"),
            Err(e) => {
                error!("Failed to read access token: {}", e);
                std::process::exit(1);
            }
        },
        "set-tmdb-token" => {
            let Some(token) = args.get(2).filter(|t| !t.trim().is_empty()) else {
                error!("set-tmdb-token requires a TMDB read access token");
                print_usage(program);
                std::process::exit(1);
            };
            if let Err(e) = SecureConfig::store_tmdb_read_token(token.trim()) {
                error!("Failed to store TMDB read token: {}", e);
                std::process::exit(1);
            }
            info!("TMDB searches will use the stored token");
        }
        other => {
            error!("Unknown command: {}", other);
            print_usage(program);
            std::process::exit(1);
        }
    }
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("marquee-session", String::as_str)
}

fn print_usage(program_name: &str) {
    eprintln!("Usage:");
    eprintln!("  {} set <access_token>", program_name);
    eprintln!("  {} clear", program_name);
    eprintln!("  {} status", program_name);
    eprintln!("  {} set-tmdb-token <read_token>", program_name);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_name_without_argv() {
        assert_eq!(program_name(&[]), "marquee-session");
        assert_eq!(
            program_name(&["/usr/bin/marquee-session".to_string()]),
            "/usr/bin/marquee-session"
        );
    }
}
