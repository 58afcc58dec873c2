//! Generation tokens for superseded computations.
//!
//! When a new computation or prediction request supersedes one still
//! in flight (the user changes selection before the prior call
//! returns), the stale result must be discarded, never merged into
//! observable state. Callers tag each request with a token and check
//! it is still current before applying the result.

use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque tag identifying one computation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationToken(u64);

/// Monotonic token issuer. Issuing a new token invalidates every
/// earlier one.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    current: AtomicU64,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating all previously issued
    /// tokens.
    pub fn next(&self) -> GenerationToken {
        GenerationToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// The token most recently issued.
    pub fn current(&self) -> GenerationToken {
        GenerationToken(self.current.load(Ordering::SeqCst))
    }

    /// Whether a result tagged with `token` may still be applied.
    pub fn is_current(&self, token: GenerationToken) -> bool {
        token == self.current()
    }
}
