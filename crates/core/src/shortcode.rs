//! Short code generation and short URL formatting

use rand::Rng;
use rand::distributions::Uniform;

/// Characters a generated code is drawn from
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub const SHORT_CODE_LEN: usize = 6;

/// Path segment short links are served under
pub const SHORT_PATH_PREFIX: &str = "/wee/";

/// Random code of [`SHORT_CODE_LEN`] alphanumeric characters.
/// Uniqueness is enforced upstream.
pub fn generate_short_code() -> String {
    generate_with(&mut rand::thread_rng(), SHORT_CODE_LEN)
}

pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let index = Uniform::from(0..ALPHABET.len());
    (0..len)
        .map(|_| char::from(ALPHABET[rng.sample(index)]))
        .collect()
}

/// `<origin>/wee/<code>`
pub fn short_url(origin: &str, code: &str) -> String {
    format!(
        "{}{SHORT_PATH_PREFIX}{code}",
        origin.trim_end_matches('/')
    )
}

/// Last path segment of a short URL
pub fn code_from_short_url(short_url: &str) -> &str {
    let trimmed = short_url.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
