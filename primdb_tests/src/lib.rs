//! Integration tests for primdb_core, organized by subsystem.
