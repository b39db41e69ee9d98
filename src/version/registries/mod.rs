//! Registry implementations and decorators for fetching release times

pub mod cached;
pub mod npm;
pub mod rate_limited;

pub use cached::CachingRegistry;
pub use npm::NpmRegistry;
pub use rate_limited::RateLimitedRegistry;
