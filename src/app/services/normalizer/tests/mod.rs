//! Tests for catalog normalization

mod field_parser_tests;
