//! Cache Info Reader - read-only view of the service's TLD cache

pub mod reader;

pub use reader::{format_local_timestamp, interpret_cache_info, CacheInfoReader};
