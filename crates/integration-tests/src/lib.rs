//! Cross-crate integration tests for corebind (see `tests/`)
