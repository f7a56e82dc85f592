//! Schema contract tests live under `tests/`.
