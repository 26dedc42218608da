//! Format module tests.
