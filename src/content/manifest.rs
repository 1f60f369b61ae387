/// Portfolio manifest loading
///
/// The content store is read from a JSON manifest instead of being
/// hard-coded, so the same binary can show any portfolio. A default
/// manifest is compiled into the binary; a user override at
/// `<config_dir>/atelier/portfolio.json` replaces it when present
/// and valid.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use super::data::{ArtistRecord, ArtworkRecord, ContentStore};
use crate::config::ViewOptions;

/// The manifest compiled into the binary.
const EMBEDDED_MANIFEST: &str = include_str!("../../assets/portfolio.json");

/// Errors from reading or validating a manifest.
///
/// Error payloads are plain strings so the variants stay `Clone` and can
/// travel inside application messages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Read(String),
    #[error("failed to parse manifest: {0}")]
    Parse(String),
    #[error("manifest contains no artworks")]
    Empty,
    #[error("duplicate artwork id {0} in manifest")]
    DuplicateId(u32),
}

/// On-disk shape of the manifest file.
#[derive(Deserialize, Debug)]
struct Manifest {
    artist: ArtistRecord,
    #[serde(default)]
    social_url: String,
    artworks: Vec<ArtworkRecord>,
    #[serde(default)]
    options: ViewOptions,
}

/// Parse and validate manifest JSON.
pub fn parse(json: &str) -> Result<(ContentStore, ViewOptions), ManifestError> {
    let manifest: Manifest =
        serde_json::from_str(json).map_err(|e| ManifestError::Parse(e.to_string()))?;

    if manifest.artworks.is_empty() {
        return Err(ManifestError::Empty);
    }

    let mut seen = HashSet::new();
    for artwork in &manifest.artworks {
        if !seen.insert(artwork.id) {
            return Err(ManifestError::DuplicateId(artwork.id));
        }
    }

    let store = ContentStore::new(manifest.artist, manifest.artworks, manifest.social_url);
    Ok((store, manifest.options))
}

/// The compiled-in default portfolio.
///
/// The embedded manifest is validated by the test suite; if it cannot be
/// parsed the binary cannot show anything, so this panics rather than
/// returning a Result.
pub fn embedded() -> (ContentStore, ViewOptions) {
    parse(EMBEDDED_MANIFEST).expect("embedded portfolio manifest is invalid")
}

/// Where a user-supplied manifest override lives, if the platform has a
/// config directory at all.
///
/// - Linux: ~/.config/atelier/portfolio.json
/// - macOS: ~/Library/Application Support/atelier/portfolio.json
/// - Windows: %APPDATA%\atelier\portfolio.json
pub fn override_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("atelier");
    path.push("portfolio.json");
    Some(path)
}

/// Load the user manifest override, if one exists.
///
/// Returns `None` when there is no override file; a present-but-broken
/// override surfaces its error so the caller can log it and keep the
/// embedded content.
pub async fn load_override() -> Option<Result<(ContentStore, ViewOptions), ManifestError>> {
    let path = override_path()?;
    if !path.exists() {
        return None;
    }

    let json = match tokio::fs::read_to_string(&path).await {
        Ok(json) => json,
        Err(e) => return Some(Err(ManifestError::Read(e.to_string()))),
    };

    Some(parse(&json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IntroItems, ZoomMode};

    #[test]
    fn test_embedded_manifest_parses() {
        let (store, options) = embedded();

        assert_eq!(store.len(), 21);
        assert_eq!(store.artist().name, "Katya Krasnaya");
        assert_eq!(store.social_url(), "https://www.instagram.com/katyakrasnaya");

        // No options block in the default manifest, so defaults apply
        assert_eq!(options, ViewOptions::default());
    }

    #[test]
    fn test_embedded_ids_are_unique_and_ordered() {
        let (store, _) = embedded();
        let ids: Vec<u32> = store.artworks().iter().map(|a| a.id).collect();
        assert_eq!(ids, (1..=21).collect::<Vec<u32>>());
    }

    #[test]
    fn test_empty_manifest_rejected() {
        let json = r#"{
            "artist": { "name": "A", "photo": "p", "bio": "b", "email": "e", "phone": "t" },
            "artworks": []
        }"#;
        assert_eq!(parse(json).unwrap_err(), ManifestError::Empty);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"{
            "artist": { "name": "A", "photo": "p", "bio": "b", "email": "e", "phone": "t" },
            "artworks": [
                { "id": 3, "image": "a.jpg", "title": "a", "description": "d", "price": "SOLD" },
                { "id": 3, "image": "b.jpg", "title": "b", "description": "d", "price": "€100" }
            ]
        }"#;
        assert_eq!(parse(json).unwrap_err(), ManifestError::DuplicateId(3));
    }

    #[test]
    fn test_options_block_is_honored() {
        let json = r#"{
            "artist": { "name": "A", "photo": "p", "bio": "b", "email": "e", "phone": "t" },
            "artworks": [
                { "id": 1, "image": "a.jpg", "title": "a", "description": "d", "price": "SOLD" }
            ],
            "options": { "zoom_mode": "stepped", "intro_items": "all" }
        }"#;
        let (_, options) = parse(json).unwrap();
        assert_eq!(options.zoom_mode, ZoomMode::Stepped);
        assert_eq!(options.intro_items, IntroItems::All);
        assert!(options.modal_desktop_only);
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        assert!(matches!(parse("not json"), Err(ManifestError::Parse(_))));
    }
}
