//! Passcode generation

use rand::{rngs::OsRng, Rng};

/// Number of digits in every generated code
pub const CODE_LENGTH: usize = 6;

const CODE_MIN: u32 = 100_000;
const CODE_MAX: u32 = 999_999;

/// Source of fresh passcodes
pub trait CodeGenerator: Send + Sync {
    /// Produce a new code of exactly [`CODE_LENGTH`] decimal digits
    fn generate(&self) -> String;
}

/// Generator backed by the operating system's CSPRNG
///
/// Codes are uniform over `100000..=999999`, so the first digit is never zero
/// and no padding is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureCodeGenerator;

impl CodeGenerator for SecureCodeGenerator {
    fn generate(&self) -> String {
        OsRng.gen_range(CODE_MIN..=CODE_MAX).to_string()
    }
}
