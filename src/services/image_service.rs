use url::Url;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=No+Image";

pub struct ImageService;

impl ImageService {
    /// Turns whatever the backend put in an image field into a usable URL:
    /// absolute URLs pass through, storage paths get the API base
    /// prepended, anything missing becomes the placeholder.
    pub fn resolve(api_base: &str, image_path: Option<&str>) -> String {
        let path = match image_path {
            Some(path) if !path.trim().is_empty() => path.trim(),
            _ => return PLACEHOLDER_IMAGE.to_string(),
        };

        if let Ok(parsed) = Url::parse(path) {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                return path.to_string();
            }
        }

        if path.starts_with('/') {
            format!("{}{}", api_base.trim_end_matches('/'), path)
        } else {
            format!("{}/{}", api_base.trim_end_matches('/'), path)
        }
    }
}
