//! Test utilities for Tether.
//!
//! With the `mock` feature this crate provides [`MockPlatform`], an in-memory
//! platform that implements the render and audio platform traits, hands out
//! heap-allocated mock resources and records every call made through them.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use tether_handle::Managed;
//! use tether_test_utils::{MockPlatform, MockTexture};
//!
//! let platform = MockPlatform::new();
//! let texture: Managed<MockTexture> = unsafe { Managed::from_raw(platform.texture(64, 205)) };
//! drop(texture);
//!
//! assert_eq!(platform.count_releases("texture"), 1);
//! # }
//! ```
//!
//! Mock resources log into the platform's call list even after the platform
//! itself is dropped, so release order never matters.

#[cfg(feature = "mock")]
mod mock_platform;

#[cfg(feature = "mock")]
pub use mock_platform::*;
