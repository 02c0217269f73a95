// ABOUTME: Library crate for intern-form exposing the stepper, storage and UI for testing and the binary

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod models;
pub mod storage;
