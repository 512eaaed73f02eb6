//! Demo catalog
//!
//! Six artists, nine tracks, eleven playlists (the last three saved by the
//! default user) and three past payments. Every track is linked into the
//! first playlist. The past payments go through the regular recording path,
//! so artist earnings already include them.

use crate::{artists, playlists, tracks, transactions, Catalog};
use chainstream_core::{error::Result, types::*};
use chrono::{DateTime, TimeZone, Utc};

/// User that owns the library playlists and made the past payments
pub const SAMPLE_USER_ID: UserId = 1;

const UNSPLASH: &str = "https://images.unsplash.com/";
const SIZE_300: &str = "?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&h=300";
const FREESOUND: &str = "https://cdn.freesound.org/previews/";
const SUPPORTER_ADDRESS: &str = "0x7890123456789012345678901234567890123456";

struct SampleArtist {
    name: &'static str,
    photo: &'static str,
    genre: &'static str,
    bio: &'static str,
    followers: u64,
    monthly_listeners: u64,
    wallet: &'static str,
    earnings: f64,
    supporters: u64,
}

const ARTISTS: [SampleArtist; 6] = [
    SampleArtist {
        name: "The Blockchain Beats",
        photo: "photo-1507680434567-5739c80be1ac",
        genre: "Electronic • Blockchain",
        bio: "The Blockchain Beats are pioneers in electronic music who have embraced blockchain technology to directly connect with their fans.",
        followers: 145_029,
        monthly_listeners: 2_450_672,
        wallet: "0x1234567890123456789012345678901234567890",
        earnings: 5.432,
        supporters: 1245,
    },
    SampleArtist {
        name: "Crypto Keys",
        photo: "photo-1501386761578-eac5c94b800a",
        genre: "Piano • Jazz",
        bio: "Crypto Keys blends classical piano with jazz influences, creating a unique sound that has garnered a loyal following on the blockchain.",
        followers: 95_483,
        monthly_listeners: 1_243_892,
        wallet: "0x2345678901234567890123456789012345678901",
        earnings: 3.782,
        supporters: 894,
    },
    SampleArtist {
        name: "Decentralized Sound",
        photo: "photo-1511367461989-f85a21fda167",
        genre: "Alternative • Rock",
        bio: "Decentralized Sound is an alternative rock band that has embraced Web3 technologies to distribute their music and connect with fans.",
        followers: 78_651,
        monthly_listeners: 987_432,
        wallet: "0x3456789012345678901234567890123456789012",
        earnings: 2.531,
        supporters: 671,
    },
    SampleArtist {
        name: "Ethereum Echoes",
        photo: "photo-1516223725307-6f76b9ec8742",
        genre: "Electronic • Ambient",
        bio: "Ethereum Echoes creates ambient electronic music inspired by the decentralized future promised by blockchain technology.",
        followers: 67_329,
        monthly_listeners: 856_421,
        wallet: "0x4567890123456789012345678901234567890123",
        earnings: 4.128,
        supporters: 942,
    },
    SampleArtist {
        name: "Token Tunes",
        photo: "photo-1577450845899-5f0abc67c01e",
        genre: "Hip Hop • Rap",
        bio: "Token Tunes is a hip hop collective that writes lyrics about crypto, blockchain, and the future of digital ownership.",
        followers: 154_832,
        monthly_listeners: 2_142_567,
        wallet: "0x5678901234567890123456789012345678901234",
        earnings: 7.219,
        supporters: 1853,
    },
    SampleArtist {
        name: "NFT Symphony",
        photo: "photo-1513829596324-4bb2800c5efb",
        genre: "Classical • Instrumental",
        bio: "NFT Symphony creates orchestral arrangements that are released as limited NFTs, allowing collectors to own a piece of musical history.",
        followers: 48_652,
        monthly_listeners: 529_874,
        wallet: "0x6789012345678901234567890123456789012345",
        earnings: 1.862,
        supporters: 412,
    },
];

// (title, artist id, album, duration, cover photo, audio preview, earnings, plays)
type SampleTrack = (&'static str, ArtistId, &'static str, &'static str, &'static str, &'static str, f64, u64);

const TRACKS: [SampleTrack; 9] = [
    ("Crypto Symphony", 1, "Digital Assets", "3:45", "photo-1493225457124-a3eb161ffa5f", "563/563087_12593596-lq.mp3", 0.002, 254_689),
    ("Smart Contract", 2, "Decentralized", "4:20", "photo-1511671782779-c97d3d27a1d4", "649/649408_5674468-lq.mp3", 0.001, 187_532),
    ("Blockchain Ballad", 3, "Web3 Anthology", "3:17", "photo-1470225620780-dba8ba36b745", "648/648347_13898517-lq.mp3", 0.003, 145_698),
    ("Distributed Ledger", 4, "Tech Beats", "2:54", "photo-1504898770365-14faca6a7320", "612/612797_5674468-lq.mp3", 0.002, 130_456),
    ("Tokenized Love", 6, "Digital Assets", "3:30", "photo-1446057032654-9d8885db76c6", "636/636726_13167901-lq.mp3", 0.005, 110_235),
    ("DeFi Dreams", 1, "Digital Assets", "4:12", "photo-1493225457124-a3eb161ffa5f", "466/466484_9383800-lq.mp3", 0.003, 198_752),
    ("Wallet", 1, "Digital Assets", "3:28", "photo-1493225457124-a3eb161ffa5f", "467/467018_9383800-lq.mp3", 0.001, 167_432),
    ("Mining", 1, "Digital Assets", "5:01", "photo-1493225457124-a3eb161ffa5f", "396/396096_4024596-lq.mp3", 0.002, 142_567),
    ("Proof of Work", 1, "Digital Assets", "3:55", "photo-1493225457124-a3eb161ffa5f", "411/411089_5121236-lq.mp3", 0.004, 132_456),
];

// (name, description, cover photo, creator, track count, duration, blockchain artists, owner)
type SamplePlaylist = (&'static str, &'static str, &'static str, &'static str, u32, &'static str, u32, Option<UserId>);

const PLAYLISTS: [SamplePlaylist; 11] = [
    ("Daily Mix 1", "The Blockchain Beats, Crypto Keys and more", "photo-1494232410401-ad00d5433cfa", "BlockBeats", 15, "52 min", 5, None),
    ("Discover Weekly", "Your weekly mix of fresh music based on your listening", "photo-1505740420928-5e560c06d30e", "BlockBeats", 30, "1 hr 45 min", 8, None),
    ("Blockchain Hits", "Top tracks from blockchain-supporting artists", "photo-1514525253161-7a46d19cd819", "BlockBeats", 20, "1 hr 12 min", 12, None),
    ("Web3 Artists", "Emerging talent in the blockchain music space", "photo-1511379938547-c1f69419868d", "BlockBeats", 25, "1 hr 28 min", 15, None),
    ("Release Radar", "Catch all the latest releases from artists you follow", "photo-1526327760257-75f515c74478", "BlockBeats", 35, "2 hr 10 min", 7, None),
    ("Digital Assets", "The debut album from The Blockchain Beats", "photo-1493225457124-a3eb161ffa5f", "The Blockchain Beats", 12, "42 min", 1, None),
    ("Decentralized Remix", "Remixes of our most popular tracks", "photo-1496293455970-f8581aae0e3b", "The Blockchain Beats", 8, "34 min", 1, None),
    ("Live on the Chain", "Recordings from our live blockchain tour", "photo-1501386761578-eac5c94b800a", "The Blockchain Beats", 10, "50 min", 1, None),
    ("My Favorites", "A collection of my favorite tracks", "photo-1516450360452-9312f5e86fc7", "You", 37, "2 hr 15 min", 12, Some(SAMPLE_USER_ID)),
    ("Workout Mix", "Energetic tracks for your workout", "photo-1517836357463-d25dfeac3438", "You", 25, "1 hr 32 min", 5, Some(SAMPLE_USER_ID)),
    ("Blockchain Discovery", "New artists using blockchain technology", "photo-1622979135225-d2ba269cf1ac", "You", 18, "1 hr 05 min", 18, Some(SAMPLE_USER_ID)),
];

// (artist id, amount, (year, month, day), hash)
const PAYMENTS: [(ArtistId, f64, (i32, u32, u32), &str); 3] = [
    (1, 0.01, (2023, 6, 15), "0x1234567890abcdef1234567890abcdef12345678"),
    (2, 0.005, (2023, 6, 12), "0xabcdef1234567890abcdef1234567890abcdef12"),
    (3, 0.008, (2023, 6, 5), "0x7890abcdef1234567890abcdef1234567890abcd"),
];

/// Build the demo catalog
pub fn sample_catalog() -> Result<Catalog> {
    let mut catalog = Catalog::new();
    seed(&mut catalog)?;
    Ok(catalog)
}

/// Load the demo records into `catalog`
///
/// Ids are assigned by the catalog, so seeding an empty one yields artists
/// 1 to 6, tracks 1 to 9 and playlists 1 to 11.
pub fn seed(catalog: &mut Catalog) -> Result<()> {
    for sample in &ARTISTS {
        artists::create(
            catalog,
            CreateArtist {
                name: sample.name.to_string(),
                image_url: unsplash(sample.photo),
                genre: sample.genre.to_string(),
                bio: Some(sample.bio.to_string()),
                followers: sample.followers,
                monthly_listeners: sample.monthly_listeners,
                blockchain: true,
                wallet_address: Some(sample.wallet.to_string()),
                earnings: sample.earnings,
                supporters: sample.supporters,
            },
        )?;
    }

    let mut track_ids = Vec::with_capacity(TRACKS.len());
    for (title, artist_id, album, duration, cover, preview, earnings, play_count) in TRACKS {
        let artist = artists::get_by_id(catalog, artist_id)?
            .map(|artist| artist.name)
            .unwrap_or_default();

        let track = tracks::create(
            catalog,
            CreateTrack {
                title: title.to_string(),
                artist,
                artist_id,
                album: album.to_string(),
                duration: duration.to_string(),
                album_cover: unsplash(cover),
                audio_url: format!("{FREESOUND}{preview}"),
                earnings,
                play_count,
            },
        )?;
        track_ids.push(track.id);
    }

    let mut first_playlist = None;
    for (name, description, cover, creator, track_count, duration, blockchain_artists, user_id) in
        PLAYLISTS
    {
        let playlist = playlists::create(
            catalog,
            CreatePlaylist {
                name: name.to_string(),
                description: Some(description.to_string()),
                cover_url: unsplash(cover),
                creator: creator.to_string(),
                track_count,
                duration: duration.to_string(),
                blockchain_artists,
                user_id,
            },
        )?;
        first_playlist.get_or_insert(playlist.id);
    }

    if let Some(playlist_id) = first_playlist {
        for (position, track_id) in (1..).zip(track_ids) {
            playlists::add_track(
                catalog,
                PlaylistTrack {
                    playlist_id,
                    track_id,
                    position,
                },
            )?;
        }
    }

    for (artist_id, amount, (year, month, day), hash) in PAYMENTS {
        let payment = NewPayment::validated(
            artist_id,
            amount,
            SUPPORTER_ADDRESS,
            Some(SAMPLE_USER_ID),
            hash,
        )?;
        transactions::record(catalog, &payment, day_start(year, month, day))?;
    }

    tracing::debug!(
        artists = catalog.artists.len(),
        tracks = catalog.tracks.len(),
        playlists = catalog.playlists.len(),
        "Sample catalog seeded"
    );

    Ok(())
}

fn unsplash(photo: &str) -> String {
    format!("{UNSPLASH}{photo}{SIZE_300}")
}

fn day_start(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}
