//! Core domain concepts shared across all subdomains.
//!
//! - [`platform::Platform`] — the operating system the tools run on
//! - [`string`] — UTF-8 safe truncation for captured output

pub mod platform;
pub mod string;
