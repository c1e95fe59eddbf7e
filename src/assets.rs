//! Asset manifest and startup loading
//!
//! Every image and sound is loaded once before the first frame. Any failure
//! aborts startup; nothing is loaded lazily.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::audio::{MusicTrack, SoundEffect};
use crate::renderer::{Backdrop, SpriteKind};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("asset is empty: {}", .0.display())]
    Empty(PathBuf),
    #[error("cannot read asset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Opaque handle to a loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// Opaque handle to a loaded sound or music clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u32);

/// Asset backend
pub trait AssetLoader {
    fn load_image(&mut self, path: &Path) -> Result<ImageHandle, AssetError>;
    fn load_sound(&mut self, path: &Path) -> Result<SoundHandle, AssetError>;
}

/// File names relative to the asset directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub asteroid: PathBuf,
    pub junk: PathBuf,
    pub ship_idle: PathBuf,
    pub ship_thrust: PathBuf,
    pub starfield: PathBuf,
    pub start_screen: PathBuf,
    pub win_screen: PathBuf,
    pub lose_screen: PathBuf,
    pub laser: PathBuf,
    pub theme: PathBuf,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            asteroid: "aster4.png".into(),
            junk: "junk3.png".into(),
            ship_idle: "ship2Move.png".into(),
            ship_thrust: "ship2.png".into(),
            starfield: "starynight.png".into(),
            start_screen: "startem.png".into(),
            win_screen: "winwin.png".into(),
            lose_screen: "endend.png".into(),
            laser: "laser5.ogg".into(),
            theme: "bensound-scifi.ogg".into(),
        }
    }
}

/// Handles for everything the game draws or plays
#[derive(Debug, Clone, Default)]
pub struct Assets {
    sprites: HashMap<SpriteKind, ImageHandle>,
    backdrops: HashMap<Backdrop, ImageHandle>,
    sounds: HashMap<SoundEffect, SoundHandle>,
    music: HashMap<MusicTrack, SoundHandle>,
}

impl Assets {
    /// Load every entry of `manifest` from `dir`, stopping at the first error
    pub fn load<L: AssetLoader + ?Sized>(
        loader: &mut L,
        manifest: &AssetManifest,
        dir: &Path,
    ) -> Result<Self, AssetError> {
        let mut assets = Self::default();

        let sprites = [
            (SpriteKind::Asteroid, &manifest.asteroid),
            (SpriteKind::Junk, &manifest.junk),
            (SpriteKind::ShipIdle, &manifest.ship_idle),
            (SpriteKind::ShipThrust, &manifest.ship_thrust),
        ];
        for (kind, file) in sprites {
            let handle = loader.load_image(&dir.join(file))?;
            assets.sprites.insert(kind, handle);
        }

        let backdrops = [
            (Backdrop::Starfield, &manifest.starfield),
            (Backdrop::StartScreen, &manifest.start_screen),
            (Backdrop::WinScreen, &manifest.win_screen),
            (Backdrop::LoseScreen, &manifest.lose_screen),
        ];
        for (backdrop, file) in backdrops {
            let handle = loader.load_image(&dir.join(file))?;
            assets.backdrops.insert(backdrop, handle);
        }

        let handle = loader.load_sound(&dir.join(&manifest.laser))?;
        assets.sounds.insert(SoundEffect::Laser, handle);
        let handle = loader.load_sound(&dir.join(&manifest.theme))?;
        assets.music.insert(MusicTrack::Theme, handle);

        log::info!(
            "Loaded {} images and {} sounds from {}",
            assets.sprites.len() + assets.backdrops.len(),
            assets.sounds.len() + assets.music.len(),
            dir.display()
        );
        Ok(assets)
    }

    /// Image for a sprite; shapes have none
    pub fn sprite(&self, kind: SpriteKind) -> Option<ImageHandle> {
        self.sprites.get(&kind).copied()
    }

    pub fn backdrop(&self, backdrop: Backdrop) -> Option<ImageHandle> {
        self.backdrops.get(&backdrop).copied()
    }

    pub fn sound(&self, effect: SoundEffect) -> Option<SoundHandle> {
        self.sounds.get(&effect).copied()
    }

    pub fn music(&self, track: MusicTrack) -> Option<SoundHandle> {
        self.music.get(&track).copied()
    }
}

/// Loader that checks files on disk and hands out sequential handles.
/// Decoding is left to the drawing/mixing backend.
#[derive(Debug, Default)]
pub struct FsAssetLoader {
    next: u32,
    pub loaded: Vec<PathBuf>,
}

impl FsAssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&mut self, path: &Path) -> Result<u32, AssetError> {
        let meta = std::fs::metadata(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                AssetError::Missing(path.to_path_buf())
            } else {
                AssetError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        if meta.len() == 0 {
            return Err(AssetError::Empty(path.to_path_buf()));
        }
        log::debug!("Loaded {}", path.display());
        self.loaded.push(path.to_path_buf());
        self.next += 1;
        Ok(self.next)
    }
}

impl AssetLoader for FsAssetLoader {
    fn load_image(&mut self, path: &Path) -> Result<ImageHandle, AssetError> {
        self.check(path).map(ImageHandle)
    }

    fn load_sound(&mut self, path: &Path) -> Result<SoundHandle, AssetError> {
        self.check(path).map(SoundHandle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("junk-blaster-assets-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn populate(dir: &Path, manifest: &AssetManifest) {
        for file in [
            &manifest.asteroid,
            &manifest.junk,
            &manifest.ship_idle,
            &manifest.ship_thrust,
            &manifest.starfield,
            &manifest.start_screen,
            &manifest.win_screen,
            &manifest.lose_screen,
            &manifest.laser,
            &manifest.theme,
        ] {
            std::fs::write(dir.join(file), b"data").unwrap();
        }
    }

    #[test]
    fn test_load_full_manifest() {
        let dir = temp_dir("full");
        let manifest = AssetManifest::default();
        populate(&dir, &manifest);

        let mut loader = FsAssetLoader::new();
        let assets = Assets::load(&mut loader, &manifest, &dir).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(loader.loaded.len(), 10);
        assert!(assets.sprite(SpriteKind::Asteroid).is_some());
        assert!(assets.sprite(SpriteKind::Bullet).is_none());
        assert!(assets.backdrop(Backdrop::LoseScreen).is_some());
        assert!(assets.sound(SoundEffect::Laser).is_some());
        assert_ne!(
            assets.sprite(SpriteKind::ShipIdle),
            assets.sprite(SpriteKind::ShipThrust)
        );
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = temp_dir("missing");
        let manifest = AssetManifest::default();
        populate(&dir, &manifest);
        std::fs::remove_file(dir.join(&manifest.theme)).unwrap();

        let result = Assets::load(&mut FsAssetLoader::new(), &manifest, &dir);
        std::fs::remove_dir_all(&dir).ok();
        match result {
            Err(AssetError::Missing(path)) => assert!(path.ends_with("bensound-scifi.ogg")),
            other => panic!("expected missing asset, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_rejected() {
        let dir = temp_dir("empty");
        let path = dir.join("blank.png");
        std::fs::write(&path, b"").unwrap();
        let result = FsAssetLoader::new().load_image(&path);
        std::fs::remove_dir_all(&dir).ok();
        assert!(matches!(result, Err(AssetError::Empty(_))));
    }
}
