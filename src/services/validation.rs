//! Argument checks shared by the services.
//!
//! Every check runs before a request is built, so a failure here never
//! reaches the transport.

use crate::errors::{BunnyError, BunnyResult};

/// Largest page number the API accepts.
pub const MAX_PAGE: u32 = 2_147_483_647;

/// Smallest page size for bounded listings.
pub const MIN_PER_PAGE: u32 = 5;

/// Largest page size for bounded listings.
pub const MAX_PER_PAGE: u32 = 1000;

/// Requires a non-zero numeric identifier.
pub fn require_id(param: &str, id: u64) -> BunnyResult<()> {
    if id == 0 {
        return Err(BunnyError::invalid_argument(
            param,
            "ID is required and must be a positive number",
        ));
    }
    Ok(())
}

/// Requires `1 <= page <= 2147483647`.
pub fn validate_page(page: u32) -> BunnyResult<()> {
    if !(1..=MAX_PAGE).contains(&page) {
        return Err(BunnyError::invalid_argument(
            "page",
            format!("page must be between 1 and {}", MAX_PAGE),
        ));
    }
    Ok(())
}

/// Requires `min <= value <= max` for a page size parameter.
pub fn validate_page_size(param: &str, value: u32, min: u32, max: u32) -> BunnyResult<()> {
    if !(min..=max).contains(&value) {
        return Err(BunnyError::invalid_argument(
            param,
            format!("{} must be between {} and {}", param, min, max),
        ));
    }
    Ok(())
}

/// Requires a non-blank string and returns it trimmed.
pub fn require_str<'a>(param: &str, value: &'a str) -> BunnyResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BunnyError::invalid_argument(
            param,
            format!("{} is required and must be a non-empty string", param),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, false)]
    #[test_case(1, true)]
    #[test_case(MAX_PAGE, true)]
    #[test_case(MAX_PAGE + 1, false)]
    #[test_case(u32::MAX, false)]
    fn test_validate_page(page: u32, ok: bool) {
        assert_eq!(validate_page(page).is_ok(), ok);
    }

    #[test_case(4, false)]
    #[test_case(5, true)]
    #[test_case(1000, true)]
    #[test_case(1001, false)]
    fn test_validate_page_size(value: u32, ok: bool) {
        assert_eq!(
            validate_page_size("perPage", value, MIN_PER_PAGE, MAX_PER_PAGE).is_ok(),
            ok
        );
    }

    #[test]
    fn test_require_id() {
        assert!(require_id("id", 0).is_err());
        assert!(require_id("id", 17).is_ok());
    }

    #[test]
    fn test_require_str_trims() {
        assert_eq!(require_str("hostname", "  example.com ").unwrap(), "example.com");
        let err = require_str("hostname", "   ").unwrap_err();
        assert!(matches!(err, BunnyError::InvalidArgument { ref param, .. } if param == "hostname"));
    }
}
