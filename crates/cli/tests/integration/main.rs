//! Integration tests for oledcfg.

mod common;
mod emit_tests;
