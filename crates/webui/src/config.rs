//! Resolves the backend API base URL once at startup.
//!
//! Resolution order:
//! 1. `WRITER_API_URL` captured at compile time, when set and non-blank.
//! 2. Debug builds target the local development server, release builds the
//!    hosted deployment.

const PRODUCTION_API_URL: &str = "https://writer-reports-api.onrender.com/api";
const LOCAL_API_URL: &str = "http://localhost:5000/api";

/// Base URL prepended to every API path. Always usable, possibly unreachable.
pub fn api_base_url() -> &'static str {
    resolve(option_env!("WRITER_API_URL"), cfg!(debug_assertions))
}

fn resolve(override_url: Option<&'static str>, debug_build: bool) -> &'static str {
    match override_url {
        Some(url) if !url.trim().is_empty() => url,
        _ if debug_build => LOCAL_API_URL,
        _ => PRODUCTION_API_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::{LOCAL_API_URL, PRODUCTION_API_URL, resolve};

    #[test]
    fn override_wins_when_set() {
        assert_eq!(resolve(Some("https://staging.example.com/api"), true), "https://staging.example.com/api");
        assert_eq!(resolve(Some("https://staging.example.com/api"), false), "https://staging.example.com/api");
    }

    #[test]
    fn blank_override_is_ignored() {
        assert_eq!(resolve(Some(""), true), LOCAL_API_URL);
        assert_eq!(resolve(Some("   "), false), PRODUCTION_API_URL);
    }

    #[test]
    fn build_mode_picks_fallback() {
        assert_eq!(resolve(None, true), LOCAL_API_URL);
        assert_eq!(resolve(None, false), PRODUCTION_API_URL);
    }
}
