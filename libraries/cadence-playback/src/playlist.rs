//! Playlist and album scope
//!
//! The playlist is the catalog ordering plus a current-position pointer.
//! The album scope is an optional secondary ordering used on album pages:
//!
//! ```text
//! Playlist:     [1] [2] [3] [4] [5] [6]      current = 3 (track 4)
//!                            ^
//! Album "Blue":         [3] [4] [6]          position derived by id (1)
//! ```

use crate::shuffle::shuffle_tracks;
use crate::types::{Track, TrackId};

/// Ordered tracks with a current-position pointer
///
/// `current` is either `None` or a valid index; it is never left pointing
/// past the end.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    current: Option<usize>,
}

impl Playlist {
    /// Create new empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from catalog order; nothing selected yet
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            current: None,
        }
    }

    /// Replace all tracks, clearing the selection
    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.current = None;
    }

    /// Append a track, returning its index
    pub fn push(&mut self, track: Track) -> usize {
        self.tracks.push(track);
        self.tracks.len() - 1
    }

    /// Select the track at `index`
    ///
    /// Out-of-range indices are rejected; the selection is left untouched.
    pub fn select(&mut self, index: usize) -> Option<&Track> {
        if index >= self.tracks.len() {
            return None;
        }
        self.current = Some(index);
        self.tracks.get(index)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&Track> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Index of the track with `id`
    pub fn position_of(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    pub fn find(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Shuffle with the current track pinned to the front
    ///
    /// All other tracks are uniformly permuted behind it and the selection
    /// moves to index 0. With nothing selected the whole list is permuted.
    pub fn shuffle_pinned(&mut self) {
        if self.tracks.is_empty() {
            return;
        }

        match self.current {
            Some(index) => {
                let current = self.tracks.remove(index);
                shuffle_tracks(&mut self.tracks);
                self.tracks.insert(0, current);
            }
            None => shuffle_tracks(&mut self.tracks),
        }
        self.current = Some(0);
    }
}

/// Album-restricted ordering
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumScope {
    name: String,
    tracks: Vec<Track>,
}

impl AlbumScope {
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            name: name.into(),
            tracks,
        }
    }

    /// Collect the tracks of `album` from a playlist, keeping its order
    pub fn from_playlist(playlist: &Playlist, album: &str) -> Self {
        let tracks = playlist
            .tracks()
            .iter()
            .filter(|t| t.album == album)
            .cloned()
            .collect();
        Self::new(album, tracks)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, position: usize) -> Option<&Track> {
        self.tracks.get(position)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Position of `id` inside the album
    pub fn position_of(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.position_of(id).is_some()
    }

    /// Permute the album order, moving `front` (if present) to the start
    pub fn shuffle_with_front(&mut self, front: Option<TrackId>) {
        shuffle_tracks(&mut self.tracks);

        if let Some(pos) = front.and_then(|id| self.position_of(id)) {
            let track = self.tracks.remove(pos);
            self.tracks.insert(0, track);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn create_test_track(id: u32, title: &str, album: &str) -> Track {
        Track {
            id: TrackId(id),
            title: title.to_string(),
            artists: vec!["Test Artist".to_string()],
            album: album.to_string(),
            genre: "Rock".to_string(),
            file: format!("/songs/{}.mp3", id),
            cover: format!("/covers/{}.jpg", id),
            duration: "3:00".to_string(),
        }
    }

    fn catalog(n: u32) -> Vec<Track> {
        (1..=n)
            .map(|i| create_test_track(i, &format!("Track {}", i), "Album"))
            .collect()
    }

    #[test]
    fn new_playlist_has_no_selection() {
        let playlist = Playlist::from_tracks(catalog(3));
        assert_eq!(playlist.len(), 3);
        assert_eq!(playlist.current_index(), None);
        assert!(playlist.current().is_none());
    }

    #[test]
    fn select_valid_index() {
        let mut playlist = Playlist::from_tracks(catalog(3));
        let track = playlist.select(2).unwrap();
        assert_eq!(track.id, TrackId(3));
        assert_eq!(playlist.current_index(), Some(2));
    }

    #[test]
    fn select_out_of_range_keeps_selection() {
        let mut playlist = Playlist::from_tracks(catalog(3));
        playlist.select(1);

        assert!(playlist.select(3).is_none());
        assert_eq!(playlist.current_index(), Some(1));
    }

    #[test]
    fn select_on_empty_playlist_is_rejected() {
        let mut playlist = Playlist::new();
        assert!(playlist.select(0).is_none());
        assert_eq!(playlist.current_index(), None);
    }

    #[test]
    fn push_appends_at_end() {
        let mut playlist = Playlist::from_tracks(catalog(2));
        let index = playlist.push(create_test_track(9, "Extra", "Other"));
        assert_eq!(index, 2);
        assert_eq!(playlist.position_of(TrackId(9)), Some(2));
    }

    #[test]
    fn shuffle_pinned_keeps_current_first() {
        let mut playlist = Playlist::from_tracks(catalog(20));
        playlist.select(7);

        playlist.shuffle_pinned();

        assert_eq!(playlist.current_index(), Some(0));
        assert_eq!(playlist.current().unwrap().id, TrackId(8));
        assert_eq!(playlist.len(), 20);

        let ids: HashSet<TrackId> = playlist.tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn shuffle_pinned_empty_playlist() {
        let mut playlist = Playlist::new();
        playlist.shuffle_pinned();
        assert!(playlist.is_empty());
        assert_eq!(playlist.current_index(), None);
    }

    #[test]
    fn album_scope_from_playlist_keeps_order() {
        let tracks = vec![
            create_test_track(1, "A", "Red"),
            create_test_track(2, "B", "Blue"),
            create_test_track(3, "C", "Red"),
            create_test_track(4, "D", "Blue"),
        ];
        let playlist = Playlist::from_tracks(tracks);

        let album = AlbumScope::from_playlist(&playlist, "Blue");
        assert_eq!(album.name(), "Blue");
        let ids: Vec<TrackId> = album.tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TrackId(2), TrackId(4)]);
        assert_eq!(album.position_of(TrackId(4)), Some(1));
        assert!(!album.contains(TrackId(1)));
    }

    #[test]
    fn album_shuffle_moves_front_track() {
        let mut album = AlbumScope::new("Album", catalog(10));

        album.shuffle_with_front(Some(TrackId(6)));

        assert_eq!(album.get(0).unwrap().id, TrackId(6));
        assert_eq!(album.len(), 10);
    }

    #[test]
    fn album_shuffle_ignores_foreign_front() {
        let mut album = AlbumScope::new("Album", catalog(4));
        album.shuffle_with_front(Some(TrackId(99)));

        let ids: HashSet<TrackId> = album.tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 4);
    }
}
