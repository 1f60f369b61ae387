/// Shared data structures for the portfolio content
///
/// These structs represent the immutable data model that flows from
/// the manifest into the UI layer. Nothing here is mutated after load.

use serde::{Deserialize, Serialize};

/// A single artwork in the portfolio
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArtworkRecord {
    /// Unique, stable identifier
    pub id: u32,
    /// Path to the artwork image, relative to the working directory
    pub image: String,
    /// Display title
    pub title: String,
    /// Medium, dimensions, year, place
    pub description: String,
    /// Either a currency-formatted amount or the literal "SOLD" marker
    pub price: String,
}

impl ArtworkRecord {
    /// Whether the price field carries the sold marker rather than an amount.
    pub fn is_sold(&self) -> bool {
        self.price.eq_ignore_ascii_case("sold")
    }
}

/// The artist shown in the hero header and contact footer
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArtistRecord {
    pub name: String,
    /// Path to the artist portrait
    pub photo: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
}

/// The complete, ordered portfolio content.
///
/// The artwork order is display order; the grid renders it as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore {
    artist: ArtistRecord,
    artworks: Vec<ArtworkRecord>,
    social_url: String,
}

impl ContentStore {
    pub(crate) fn new(
        artist: ArtistRecord,
        artworks: Vec<ArtworkRecord>,
        social_url: String,
    ) -> Self {
        Self {
            artist,
            artworks,
            social_url,
        }
    }

    pub fn artist(&self) -> &ArtistRecord {
        &self.artist
    }

    /// The fixed external link shown in the footer.
    pub fn social_url(&self) -> &str {
        &self.social_url
    }

    /// All artworks in display order.
    pub fn artworks(&self) -> &[ArtworkRecord] {
        &self.artworks
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Look up an artwork by its identifier.
    pub fn artwork(&self, id: u32) -> Option<&ArtworkRecord> {
        self.artworks.iter().find(|artwork| artwork.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, price: &str) -> ArtworkRecord {
        ArtworkRecord {
            id,
            image: format!("assets/images/{id}.jpg"),
            title: format!("Artwork {id}"),
            description: "Oil on canvas".to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_sold_marker_is_case_insensitive() {
        assert!(record(1, "SOLD").is_sold());
        assert!(record(2, "sold").is_sold());
        assert!(!record(3, "€2400").is_sold());
    }

    #[test]
    fn test_lookup_by_id() {
        let artist = ArtistRecord {
            name: "A".into(),
            photo: "p.png".into(),
            bio: "b".into(),
            email: "e".into(),
            phone: "t".into(),
        };
        let store = ContentStore::new(artist, vec![record(1, "SOLD"), record(7, "€100")], String::new());

        assert_eq!(store.len(), 2);
        assert_eq!(store.artwork(7).unwrap().price, "€100");
        assert!(store.artwork(3).is_none());
    }
}
