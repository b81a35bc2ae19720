//! Washing/testing report forms
pub mod ui;
