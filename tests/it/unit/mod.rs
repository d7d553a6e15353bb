//! Unit tests for dragger.

mod surface_tests;
