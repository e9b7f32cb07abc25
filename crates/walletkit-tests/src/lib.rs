//! Adversarial and end-to-end test suite for walletkit.
//!
//! The keyring, ABI decoder and RPC parser all consume untrusted bytes.
//! The integration tests in this crate feed them randomized and hostile
//! inputs and check the documented invariants hold.

pub mod helpers;
