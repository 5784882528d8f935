//! Payload types handed to the presentation layer, one module per report.

pub mod landing;
pub mod matrix;
