use crate::error::FetchError;
use reqwest::Url;

/// Trims the input and prefixes `https://` when no http(s) scheme is given.
pub fn normalize_target_url(input: &str) -> String {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Accepts only absolute `http`/`https` urls with a host.
pub fn validate_target_url(input: &str) -> Result<Url, FetchError> {
    let url = Url::parse(input).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", input, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme {:?} in {}",
                other, input
            )))
        }
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl(format!("{} has no host", input)));
    }

    Ok(url)
}
