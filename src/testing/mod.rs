//! Testing utilities for crumbtrail
//!
//! - [`fixtures`] - Pre-built settings, session managers and sessions
//! - [`constants`] - Shared test values

pub mod fixtures;

pub use fixtures::TestFixtures;

/// Common test constants
pub mod constants {
    /// Test session secret, exactly 32 bytes so it is used as the AES key directly
    pub const TEST_SESSION_KEY: &[u8; 32] = b"test_key_32_bytes_long_for_test_";
}
