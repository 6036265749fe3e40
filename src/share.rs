//! Export and sharing of finished drawings.
//!
//! The drawing core never waits on these calls: the canvas page hands a PNG
//! to a [`ShareHost`] and only logs the outcome.

use image::RgbaImage;
use uuid::Uuid;

use crate::error::ShareError;
use crate::router::CanvasId;
use crate::surface;
use crate::util::time;

/// A PNG export of the render surface
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub id: Uuid,
    pub canvas: Option<CanvasId>,
    pub png: Vec<u8>,
    pub saved_at: u64,
}

impl Artifact {
    /// Encode `image` as a new artifact
    pub fn from_surface(image: &RgbaImage, canvas: Option<CanvasId>) -> Result<Self, ShareError> {
        let png = surface::encode_png(image)?;
        Ok(Self {
            id: Uuid::new_v4(),
            canvas,
            png,
            saved_at: time::timestamp_secs(),
        })
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.id.simple())
    }
}

/// Host side of the "Share Art" / "Share Previous Art" buttons
pub trait ShareHost {
    /// Export and share the current drawing
    fn save_file(&mut self, artifact: Artifact) -> Result<(), ShareError>;

    /// Share the most recently saved artifact again, returning its id
    fn share_prev(&mut self) -> Result<Uuid, ShareError>;

    /// Number of artifacts saved through this host
    fn saved_count(&self) -> usize;

    fn has_previous(&self) -> bool {
        self.saved_count() > 0
    }
}

/// Keeps artifacts in memory. Works on every target.
#[derive(Debug, Default)]
pub struct MemoryShareHost {
    saved: Vec<Artifact>,
    /// Ids in the order they were shared, including re-shares
    shared: Vec<Uuid>,
}

impl MemoryShareHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> &[Artifact] {
        &self.saved
    }

    pub fn shared(&self) -> &[Uuid] {
        &self.shared
    }
}

impl ShareHost for MemoryShareHost {
    fn save_file(&mut self, artifact: Artifact) -> Result<(), ShareError> {
        if artifact.png.is_empty() {
            return Err(ShareError::EmptyArtifact);
        }
        log::info!("saved artifact {} ({} bytes)", artifact.id, artifact.png.len());
        self.shared.push(artifact.id);
        self.saved.push(artifact);
        Ok(())
    }

    fn share_prev(&mut self) -> Result<Uuid, ShareError> {
        let id = self.saved.last().ok_or(ShareError::NothingToShare)?.id;
        log::info!("re-sharing artifact {id}");
        self.shared.push(id);
        Ok(id)
    }

    fn saved_count(&self) -> usize {
        self.saved.len()
    }
}

/// Writes artifacts as PNG files into a directory
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct DiskShareHost {
    dir: std::path::PathBuf,
    saved: Vec<(Uuid, std::path::PathBuf)>,
}

#[cfg(not(target_arch = "wasm32"))]
impl DiskShareHost {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            saved: Vec::new(),
        }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn last_path(&self) -> Option<&std::path::Path> {
        self.saved.last().map(|(_, path)| path.as_path())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ShareHost for DiskShareHost {
    fn save_file(&mut self, artifact: Artifact) -> Result<(), ShareError> {
        if artifact.png.is_empty() {
            return Err(ShareError::EmptyArtifact);
        }

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(artifact.file_name());
        std::fs::write(&path, &artifact.png)?;

        log::info!("saved artifact to {}", path.display());
        self.saved.push((artifact.id, path));
        Ok(())
    }

    fn share_prev(&mut self) -> Result<Uuid, ShareError> {
        let (id, path) = self.saved.last().ok_or(ShareError::NothingToShare)?;
        if !path.exists() {
            return Err(ShareError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} was removed", path.display()),
            )));
        }
        log::info!("re-sharing {}", path.display());
        Ok(*id)
    }

    fn saved_count(&self) -> usize {
        self.saved.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RenderSurface;

    fn artifact() -> Artifact {
        let image = RenderSurface::new(4, 4).paint(None, &[]);
        Artifact::from_surface(&image, CanvasId::new("abc")).unwrap()
    }

    #[test]
    fn test_share_prev_without_save_fails() {
        let mut host = MemoryShareHost::new();
        assert!(!host.has_previous());
        assert!(matches!(host.share_prev(), Err(ShareError::NothingToShare)));
    }

    #[test]
    fn test_share_prev_reshares_latest() {
        let mut host = MemoryShareHost::new();
        let first = artifact();
        let second = artifact();
        let second_id = second.id;

        host.save_file(first).unwrap();
        host.save_file(second).unwrap();
        assert_eq!(host.share_prev().unwrap(), second_id);

        assert_eq!(host.saved_count(), 2);
        assert_eq!(host.shared().len(), 3);
        assert_eq!(host.shared().last(), Some(&second_id));
    }

    #[test]
    fn test_empty_artifact_rejected() {
        let mut host = MemoryShareHost::new();
        let mut empty = artifact();
        empty.png.clear();
        assert!(matches!(host.save_file(empty), Err(ShareError::EmptyArtifact)));
        assert_eq!(host.saved_count(), 0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_disk_host_writes_png() {
        let dir = std::env::temp_dir().join(format!("scribble-test-{}", Uuid::new_v4().simple()));
        let mut host = DiskShareHost::new(&dir);
        let artifact = artifact();
        let id = artifact.id;

        host.save_file(artifact).unwrap();
        let path = host.last_path().unwrap().to_path_buf();
        assert!(path.starts_with(host.dir()));
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
        assert_eq!(host.share_prev().unwrap(), id);

        std::fs::remove_dir_all(&dir).unwrap();
        assert!(host.share_prev().is_err());
    }
}
