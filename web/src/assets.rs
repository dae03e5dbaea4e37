use std::{fs, io, path::Path};

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// The page background, pre-encoded as a `data:` URI for the stylesheet.
#[derive(Debug, Clone)]
pub struct Background {
    data_uri: String,
}

impl Background {
    /// Reads the image at `path`. A missing image is fatal for the page, the
    /// caller is expected to abort startup on error.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            io::Error::new(e.kind(), format!("background image {}: {e}", path.display()))
        })?;
        log::info!("loaded background image {} ({} bytes)", path.display(), bytes.len());
        Ok(Self::from_bytes(mime_for(path), &bytes))
    }

    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self {
            data_uri: format!("data:{mime};base64,{}", STANDARD.encode(bytes)),
        }
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_as_data_uri() {
        let bg = Background::from_bytes("image/png", b"abc");
        assert_eq!(bg.data_uri(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn mime_follows_extension() {
        assert_eq!(mime_for(Path::new("background1.JPG")), "image/jpeg");
        assert_eq!(mime_for(Path::new("bg.webp")), "image/webp");
        assert_eq!(mime_for(Path::new("bg")), "image/png");
    }

    #[test]
    fn missing_image_fails() {
        let err = Background::load("no/such/background.png").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn shipped_background_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../assets/background.png");
        let bg = Background::load(path).unwrap();
        assert!(bg.data_uri().starts_with("data:image/png;base64,iVBOR"));
    }
}
