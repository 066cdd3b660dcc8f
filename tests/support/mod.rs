// tests/support/mod.rs
// Shared fixtures for the integration test binaries. Every binary compiles
// its own copy of this module, so symbols one binary leaves unused are
// expected; the allows keep those warnings quiet.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use mocks::*;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use builders::*;
