use async_trait::async_trait;
use base64::engine::general_purpose;
use base64::Engine;

use crate::modules::upload::application::ports::outgoing::{ImageStore, ImageStoreError};

/// Stand-in for the Spaces adapter: persists images as self-contained
/// `data:` URIs instead of bucket objects. The rest of the system only ever
/// sees an opaque path string, so swapping this out is a wiring change.
#[derive(Clone, Default)]
pub struct DataUriStore;

impl DataUriStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageStore for DataUriStore {
    async fn put(&self, bytes: Vec<u8>, content_type: &str) -> Result<String, ImageStoreError> {
        if bytes.is_empty() {
            return Err(ImageStoreError::Rejected("empty payload".to_string()));
        }

        let encoded = general_purpose::STANDARD.encode(&bytes);
        Ok(format!("data:{};base64,{}", content_type, encoded))
    }
}
