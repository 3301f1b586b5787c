//! Encoder options.

/// Options for one encode pass.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Claim frequency code carried in CLM05-3: `1` original, `7`
    /// corrected, `8` void.
    pub frequency_code: String,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            frequency_code: "1".to_string(),
        }
    }
}

impl EncodeOptions {
    pub fn with_frequency(frequency_code: impl Into<String>) -> Self {
        Self {
            frequency_code: frequency_code.into(),
        }
    }
}
