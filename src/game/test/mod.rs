//! Tests for the Scotland Yard rules engine, one submodule per concern.

#![cfg(test)]
#![allow(clippy::bool_assert_comparison)]

pub mod rotation;
