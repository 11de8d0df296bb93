use uuid::Uuid;

use crate::errors::ServiceError;

/// Decode a wire identifier into the store key.
pub fn parse_record_id(raw: &str) -> Result<Uuid, ServiceError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidArgument("missing id".into()));
    }
    Uuid::parse_str(trimmed).map_err(|e| ServiceError::InvalidArgument(format!("invalid id {:?}: {}", raw, e)))
}
