//! Domain extraction from email addresses.
//!
//! Which `@` separates local part from domain is ambiguous when the local
//! part is quoted and contains `@` itself; the last one is taken.

/// The domain of an email address (`tim@canddi.com` -> `canddi.com`).
///
/// Domain literals lose their brackets (`tim@[10.0.3.19]` -> `10.0.3.19`).
/// Never fails: an address without `@` is returned whole.
pub fn from_email(address: &str) -> String {
    let domain = address.rsplit('@').next().unwrap_or(address);

    domain
        .strip_prefix('[')
        .and_then(|d| d.strip_suffix(']'))
        .unwrap_or(domain)
        .to_string()
}
