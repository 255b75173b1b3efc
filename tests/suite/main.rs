//! Integration test suite.

mod einsum_tests;
mod parser_tests;
