//! End-to-End Tests for the seqc binary
//!
//! These tests run the compiled `seqc` binary against the fixtures in
//! `tests/e2e/fixtures/` and check its output streams and exit status.

mod cli_tests;
mod output_tests;
