//! Property-based tests for delta merge guarantees

mod merge_properties;
