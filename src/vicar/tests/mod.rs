//! Unit tests for the VICAR module

mod label_tests;
