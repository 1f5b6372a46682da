#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    match option_env!("NYAAY_BACKEND_URL") {
        Some(url) => url,
        None => "http://localhost:8001",  // Development URL when running locally
    }
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    match option_env!("NYAAY_BACKEND_URL") {
        Some(url) => url,
        None => "",  // Same origin in production
    }
}

/// Full URL for an endpoint under the backend's `/api` prefix.
pub fn api_url(path: &str) -> String {
    format!("{}/api{}", get_backend_url().trim_end_matches('/'), path)
}

pub const LAWYERS_PER_PAGE: usize = 20;
pub const FIRMS_PER_PAGE: usize = 12;

pub const LAWYER_COUNT: usize = 500;
pub const FIRM_COUNT: usize = 100;

// Simulated gateway delay before the signup request goes out
pub const PAYMENT_DELAY_MS: u32 = 3_000;
pub const FINDER_REPLY_DELAY_MS: u32 = 1_000;
pub const TOAST_DURATION_MS: u32 = 4_000;

pub const FIRM_REGISTRATION_FEE: u32 = 999;
pub const GST_PERCENT: u32 = 18;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_under_api_prefix() {
        let url = api_url("/waitlist");
        assert!(url.ends_with("/api/waitlist"));
        assert!(!url.contains("//api"));
    }
}
