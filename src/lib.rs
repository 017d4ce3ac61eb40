//! Workspace-level integration tests for fibkit live under `tests/`.
