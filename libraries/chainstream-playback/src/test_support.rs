use chainstream_core::{Track, TrackId};

pub(crate) fn track(id: TrackId) -> Track {
    Track {
        id,
        title: format!("Track {id}"),
        artist: "Test Artist".to_string(),
        artist_id: 1,
        album: "Test Album".to_string(),
        duration: "3:00".to_string(),
        album_cover: String::new(),
        audio_url: format!("https://cdn.example/{id}.mp3"),
        earnings: 0.0,
        play_count: 0,
    }
}

pub(crate) fn tracks(ids: &[TrackId]) -> Vec<Track> {
    ids.iter().copied().map(track).collect()
}
