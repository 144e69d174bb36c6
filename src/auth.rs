use chrono::{NaiveDate, Utc};
use md5::{Digest, Md5};

/// Compute the `X-Auth` token for the current UTC day.
///
/// The catalog API expects the lowercase hex MD5 digest of
/// `"<secret>_<YYYYMMDD>"`. The token changes at UTC midnight, so it is
/// recomputed per request rather than cached.
pub fn auth_token(secret: &str) -> String {
    auth_token_for_date(secret, Utc::now().date_naive())
}

/// Token derivation for an explicit calendar date.
pub fn auth_token_for_date(secret: &str, date: NaiveDate) -> String {
    let stamp = date.format("%Y%m%d");
    let mut hasher = Md5::new();
    hasher.update(format!("{secret}_{stamp}").as_bytes());
    hex::encode(hasher.finalize())
}
