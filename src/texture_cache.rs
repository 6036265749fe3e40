use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

/// Keeps the rasterized canvas on the GPU, re-uploading only when the
/// history version it was generated from changes.
#[derive(Default)]
pub struct CanvasTexture {
    name: String,
    handle: Option<TextureHandle>,
    version: Option<u64>,
    uploads: usize,
}

// TextureHandle's Debug output is noisy; show what matters for caching
impl std::fmt::Debug for CanvasTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasTexture")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("uploads", &self.uploads)
            .finish()
    }
}

impl CanvasTexture {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Gets the texture for `version`, running `generator` only on a cache miss
    pub fn get_or_update<F>(&mut self, ctx: &Context, version: u64, generator: F) -> TextureId
    where
        F: FnOnce() -> ColorImage,
    {
        if self.version == Some(version) {
            if let Some(handle) = &self.handle {
                return handle.id();
            }
        }

        let image = generator();
        self.uploads += 1;
        self.version = Some(version);

        match &mut self.handle {
            Some(handle) => {
                handle.set(image, TextureOptions::LINEAR);
                handle.id()
            }
            None => {
                let handle = ctx.load_texture(&self.name, image, TextureOptions::LINEAR);
                let id = handle.id();
                self.handle = Some(handle);
                id
            }
        }
    }

    /// Force the next `get_or_update` to regenerate
    pub fn invalidate(&mut self) {
        self.version = None;
    }

    /// Drop the GPU texture. The next `get_or_update` uploads a fresh one.
    pub fn release(&mut self) {
        self.handle = None;
        self.version = None;
    }

    pub fn is_resident(&self) -> bool {
        self.handle.is_some()
    }

    pub fn cached_version(&self) -> Option<u64> {
        self.version
    }

    /// How many times the texture has been (re)generated
    pub fn uploads(&self) -> usize {
        self.uploads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_texture_generator() -> ColorImage {
        ColorImage::new([10, 10], egui::Color32::WHITE)
    }

    #[test]
    fn test_cache_hit() {
        let ctx = Context::default();
        let mut texture = CanvasTexture::new("canvas");

        let first = texture.get_or_update(&ctx, 1, mock_texture_generator);
        let second = texture.get_or_update(&ctx, 1, || panic!("cache miss on same version"));

        assert_eq!(first, second);
        assert_eq!(texture.uploads(), 1);
    }

    #[test]
    fn test_new_version_regenerates_in_place() {
        let ctx = Context::default();
        let mut texture = CanvasTexture::new("canvas");

        let first = texture.get_or_update(&ctx, 1, mock_texture_generator);
        let second = texture.get_or_update(&ctx, 2, mock_texture_generator);

        // The same handle is reused for the new contents
        assert_eq!(first, second);
        assert_eq!(texture.uploads(), 2);
        assert_eq!(texture.cached_version(), Some(2));
    }

    #[test]
    fn test_release_drops_handle() {
        let ctx = Context::default();
        let mut texture = CanvasTexture::new("canvas");
        texture.get_or_update(&ctx, 1, mock_texture_generator);
        assert!(texture.is_resident());

        texture.release();
        assert!(!texture.is_resident());
        assert_eq!(texture.cached_version(), None);

        texture.get_or_update(&ctx, 1, mock_texture_generator);
        assert!(texture.is_resident());
        assert_eq!(texture.uploads(), 2);
    }

    #[test]
    fn test_invalidation() {
        let ctx = Context::default();
        let mut texture = CanvasTexture::new("canvas");

        texture.get_or_update(&ctx, 7, mock_texture_generator);
        texture.invalidate();
        assert_eq!(texture.cached_version(), None);

        texture.get_or_update(&ctx, 7, mock_texture_generator);
        assert_eq!(texture.uploads(), 2);
    }
}
