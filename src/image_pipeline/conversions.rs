//! Pipeline conversions module
//!
//! This module contains orchestration logic for image format conversions.

mod image_to_icon;

#[cfg(test)]
mod tests;

pub use image_to_icon::ImageConverter;
