//! Artist types

use serde::{Deserialize, Serialize};

pub type ArtistId = i64;

/// An artist
///
/// `earnings` and `supporters` only ever grow, one payment at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub image_url: String,
    pub genre: String,
    pub bio: Option<String>,
    pub followers: u64,
    pub monthly_listeners: u64,
    /// Whether the artist accepts wallet payments
    pub blockchain: bool,
    pub wallet_address: Option<String>,
    /// Cumulative earnings in ETH
    pub earnings: f64,
    pub supporters: u64,
}

impl Artist {
    /// Apply one payment: earnings grow by `amount`, supporters by one
    pub fn record_support(&mut self, amount: f64) {
        self.earnings += amount;
        self.supporters += 1;
    }

    /// Case-insensitive match against name and genre
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.genre.to_lowercase().contains(needle_lower)
    }
}

/// Data for creating a new artist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtist {
    pub name: String,
    pub image_url: String,
    pub genre: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub monthly_listeners: u64,
    #[serde(default)]
    pub blockchain: bool,
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub earnings: f64,
    #[serde(default)]
    pub supporters: u64,
}

impl CreateArtist {
    /// Build the stored record once an id has been assigned
    pub fn into_artist(self, id: ArtistId) -> Artist {
        Artist {
            id,
            name: self.name,
            image_url: self.image_url,
            genre: self.genre,
            bio: self.bio,
            followers: self.followers,
            monthly_listeners: self.monthly_listeners,
            blockchain: self.blockchain,
            wallet_address: self.wallet_address,
            earnings: self.earnings,
            supporters: self.supporters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist() -> Artist {
        CreateArtist {
            name: "Crypto Keys".to_string(),
            image_url: "https://img.example/keys.jpg".to_string(),
            genre: "Piano • Jazz".to_string(),
            bio: None,
            followers: 10,
            monthly_listeners: 100,
            blockchain: true,
            wallet_address: None,
            earnings: 1.5,
            supporters: 3,
        }
        .into_artist(2)
    }

    #[test]
    fn record_support_adds_amount_and_one_supporter() {
        let mut artist = artist();
        artist.record_support(0.25);

        assert!((artist.earnings - 1.75).abs() < f64::EPSILON);
        assert_eq!(artist.supporters, 4);
    }

    #[test]
    fn matches_name_and_genre_case_insensitively() {
        let artist = artist();
        assert!(artist.matches("crypto"));
        assert!(artist.matches("jazz"));
        assert!(!artist.matches("rock"));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(artist()).unwrap();
        assert_eq!(json["imageUrl"], "https://img.example/keys.jpg");
        assert_eq!(json["monthlyListeners"], 100);
    }
}
