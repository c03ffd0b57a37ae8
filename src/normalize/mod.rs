//! Response normalization.
//!
//! Successful payloads pass through [`normalize`] before reaching the
//! caller. Two independent passes exist, each gated by a flag in
//! [`ClientOptions`]:
//!
//! - date materialization turns [`DateValue::Raw`](crate::types::DateValue)
//!   timestamps into parsed UTC instants, including those nested in lists;
//! - field population attaches labels to enumerated numeric codes.
//!
//! Both passes are idempotent. Records without timestamps or codes rely on
//! the default no-op implementations.

use crate::config::ClientOptions;
use crate::errors::BunnyResult;

/// A response payload that can be normalized.
pub trait Normalize {
    /// Parses every timestamp field in place.
    fn materialize_dates(&mut self) -> BunnyResult<()> {
        Ok(())
    }

    /// Computes every derived label field in place.
    fn populate_fields(&mut self) -> BunnyResult<()> {
        Ok(())
    }
}

/// Applies the passes enabled in `options` to `value`.
pub fn normalize<T: Normalize>(value: &mut T, options: &ClientOptions) -> BunnyResult<()> {
    if options.parse_dates {
        value.materialize_dates()?;
    }
    if options.populate_fields {
        value.populate_fields()?;
    }
    Ok(())
}

impl<T: Normalize> Normalize for Vec<T> {
    fn materialize_dates(&mut self) -> BunnyResult<()> {
        self.iter_mut().try_for_each(Normalize::materialize_dates)
    }

    fn populate_fields(&mut self) -> BunnyResult<()> {
        self.iter_mut().try_for_each(Normalize::populate_fields)
    }
}

impl<T: Normalize> Normalize for Option<T> {
    fn materialize_dates(&mut self) -> BunnyResult<()> {
        self.as_mut().map_or(Ok(()), Normalize::materialize_dates)
    }

    fn populate_fields(&mut self) -> BunnyResult<()> {
        self.as_mut().map_or(Ok(()), Normalize::populate_fields)
    }
}
