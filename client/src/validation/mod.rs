//! Per-form validation schemas.
//!
//! Pure and synchronous: each module exposes a `validate` entry point that
//! returns either `Ok(())` or field-path scoped `ValidationErrors`. No
//! network access, no side effects; controllers call these before any
//! mutation runs.

pub mod comment;
pub mod feedback;
pub mod playlist;
pub mod profile;
pub mod reset_password;
pub mod signin;
pub mod signup;
pub mod video_upload;
