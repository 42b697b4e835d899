//! Integration test package for the logscan workspace.
