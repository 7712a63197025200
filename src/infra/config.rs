//! Centralized configuration (environment variables + defaults).

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Loads `.env` from the working directory, if present.
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}

/// Listening port. Missing or unparsable values fall back to [`DEFAULT_PORT`].
pub fn port() -> u16 {
    parse_port(std::env::var("PORT").ok().as_deref())
}

/// Listening interface.
pub fn host() -> String {
    std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
}

pub fn bind_address() -> String {
    format!("{}:{}", host(), port())
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|v| v.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}
