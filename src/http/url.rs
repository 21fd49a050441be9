use crate::error::ClientError;

const HTTPS_PREFIX: &str = "https://";
const HTTP_PREFIX: &str = "http://";

/// Returns the scheme prefix implied by the security flag.
pub fn scheme_prefix(use_https: bool) -> &'static str {
    if use_https {
        HTTPS_PREFIX
    } else {
        HTTP_PREFIX
    }
}

/// Normalizes a candidate URL: strips the expected scheme prefix, collapses
/// runs of consecutive slashes in the remainder and re-applies the scheme.
///
/// The expected prefix depends on `use_https`. A URL without that prefix is
/// a configuration error. Normalizing an already-normalized URL returns the
/// identical string.
pub fn normalize_url(url: &str, use_https: bool) -> Result<String, ClientError> {
    let scheme = scheme_prefix(use_https);
    let remainder = match url.split_once(scheme) {
        Some((_, remainder)) => remainder,
        None => {
            return Err(ClientError::InvalidBaseUrl(
                url.to_string(),
                scheme.to_string(),
            ))
        }
    };

    let mut normalized = String::with_capacity(url.len());
    normalized.push_str(scheme);
    let mut previous_slash = false;
    for character in remainder.chars() {
        if character == '/' {
            if previous_slash {
                continue;
            }
            previous_slash = true;
        } else {
            previous_slash = false;
        }
        normalized.push(character);
    }

    Ok(normalized)
}
