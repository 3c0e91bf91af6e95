use studio_types::ImageId;

/// An image resource owned by a UI project.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub uid: ImageId,
    pub id: String,
    /// Base64-encoded binary content. `None` until the user picks a file.
    pub content: Option<String>,
}

impl Image {
    /// Creates an empty image with a generated persisted id.
    pub fn new() -> Self {
        let uid = ImageId::new();
        Self {
            uid,
            id: format!("image_{uid}"),
            content: None,
        }
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::new()
    }
}
