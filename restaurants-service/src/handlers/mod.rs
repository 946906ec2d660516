//! HTTP handlers

pub mod restaurants;
