mod artist;
mod playlist;
mod search;
mod track;
mod transaction;
mod user;

pub use artist::{Artist, ArtistId, CreateArtist};
pub use playlist::{CreatePlaylist, Playlist, PlaylistId, PlaylistTrack};
pub use search::SearchResults;
pub use track::{CreateTrack, Track, TrackId};
pub use transaction::{NewPayment, Transaction, TransactionId, STATUS_COMPLETED};
pub use user::{CreateUser, User, UserId};
