//! Detect the languages in an uploaded text file and chart their shares.
//!
//! Flow: text → [`detector`] → [`filter`] → [`catalog`] labels →
//! [`chart`] segments → [`render`].

pub mod catalog;
pub mod chart;
pub mod config;
pub mod detector;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod render;
pub mod web;
