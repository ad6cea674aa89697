//! Declaration generation for target languages.

pub mod typescript;
