//! Edge case and property tests for seqc-lex
