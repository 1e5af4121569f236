/// Short-lived bearer credential for the custom provider.
///
/// Acquired at most once per batch and dropped with it; never persisted
/// or shared between batches.
#[derive(Debug, Clone)]
pub struct AccessToken {
    value: String,
}

impl AccessToken {
    pub fn new(value: String) -> Self {
        Self { value }
    }

    /// The raw value, as sent in the `Authorization` header.
    pub fn header_value(&self) -> &str {
        &self.value
    }
}
