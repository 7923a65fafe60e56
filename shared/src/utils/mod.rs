//! Common utility functions

pub mod identifier;

pub use identifier::{
    is_valid_email, is_valid_phone, mask_email, mask_identifier, mask_phone_number,
    normalize_phone_number,
};
