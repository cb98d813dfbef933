//! Security header names.
//!
//! These are the labels reported in `security.headers`, in the order in which the
//! report builder checks them.

/// HTTP Strict Transport Security (reported under its short name)
pub const HEADER_HSTS: &str = "HSTS";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "X-Frame-Options";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
