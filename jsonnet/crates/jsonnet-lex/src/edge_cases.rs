//! Edge case tests for jsonnet-lex
