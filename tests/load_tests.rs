//! Load Test Runner
//!
//! This file makes the load tests discoverable by cargo test.
//!
//! To run load tests:
//! ```bash
//! cargo test --test load_tests -- --ignored --test-threads=1
//! ```
//!
//! Load tests are marked as #[ignore] so they stay out of normal CI runs.

mod load;
