//! Wellness Chat - Offline wellness assistant.
//!
//! This crate serves a single-page chat form that answers health questions
//! from a fixed keyword table and hands out randomized daily tips.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
