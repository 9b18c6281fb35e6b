/// Origin of the NOVA API server. Override at build time with `BACKEND_URL`.
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("http://localhost:8080")
}

/// Every endpoint lives under this prefix on the backend.
pub const API_PREFIX: &str = "/api";

/// Upper bound on any single request before it counts as failed.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

pub fn api_url(path: &str) -> String {
    format!("{}{}{}", get_backend_url(), API_PREFIX, path)
}
