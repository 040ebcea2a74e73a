use uuid::Uuid;

/// Generate a fresh opaque block id
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
