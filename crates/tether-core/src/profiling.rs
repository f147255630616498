//! Profiling hooks based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the scope macros expand to nothing,
//! so call sites never need their own `cfg`.

#[cfg(feature = "profiling")]
use std::sync::OnceLock;

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __tether_profile_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::__tether_profile_noop as profile_function;
#[cfg(not(feature = "profiling"))]
pub use crate::__tether_profile_noop as profile_scope;

/// Address the puffin HTTP server binds to.
pub const PUFFIN_ADDR: &str = "0.0.0.0:8585";

#[cfg(feature = "profiling")]
static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Enable scope collection and start the puffin HTTP server.
///
/// # Example
/// ```no_run
/// tether_core::profiling::init_profiling();
/// ```
#[cfg(feature = "profiling")]
pub fn init_profiling() {
    puffin::set_scopes_on(true);

    match puffin_http::Server::new(PUFFIN_ADDR) {
        Ok(server) => {
            tracing::info!("Puffin profiler server started on http://{}", PUFFIN_ADDR);
            let _ = PROFILING_SERVER.set(server);
        }
        Err(e) => {
            tracing::error!("Failed to start puffin server: {}", e);
        }
    }
}

#[cfg(not(feature = "profiling"))]
pub fn init_profiling() {
    tracing::warn!("Profiling requested but the `profiling` feature is disabled");
}

/// Mark a frame boundary for the profiler. Call once per frame.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scoped_work() -> u32 {
        profile_function!();
        profile_scope!("inner");
        7
    }

    // Runs both with and without the `profiling` feature.
    #[test]
    fn test_scopes_expand_in_either_build() {
        assert_eq!(scoped_work(), 7);
        new_frame();
    }
}
