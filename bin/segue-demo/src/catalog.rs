//! In-memory track catalog - the demo's data source.
//!
//! Stands in for whatever query layer would produce the node array in a
//! real deployment. Tracks are stored sorted ascending by id.

use std::borrow::Borrow;

use chrono::{DateTime, TimeZone, Utc};

use segue_cursors::document::DocumentId;

/// A music track.
#[derive(Debug, Clone)]
pub struct Track {
    /// Document id; also the pagination key.
    pub id: DocumentId,
    pub title: String,
    pub artist: String,
    pub duration_secs: u32,
    pub released_at: DateTime<Utc>,
}

impl Borrow<DocumentId> for Track {
    fn borrow(&self) -> &DocumentId {
        &self.id
    }
}

/// Build a seeded catalog, sorted ascending by id.
pub fn seed() -> Vec<Track> {
    let mut tracks: Vec<Track> = SEED
        .iter()
        .map(|(id, title, artist, duration_secs, year, month, day)| Track {
            id: DocumentId::from_hex(id).expect("seed ids are valid hex"),
            title: (*title).to_string(),
            artist: (*artist).to_string(),
            duration_secs: *duration_secs,
            released_at: Utc
                .with_ymd_and_hms(*year, *month, *day, 0, 0, 0)
                .single()
                .expect("seed dates are valid"),
        })
        .collect();

    tracks.sort_by(|a, b| a.id.cmp(&b.id));
    tracks
}

// Id prefixes are timestamp-shaped so insertion order == id order.
const SEED: &[(&str, &str, &str, u32, i32, u32, u32)] = &[
    (
        "65a001000000000000000001",
        "Ouverture",
        "Les Harmoniques",
        214,
        2024,
        1,
        12,
    ),
    (
        "65a002000000000000000002",
        "Interlude en si",
        "Les Harmoniques",
        187,
        2024,
        1,
        12,
    ),
    (
        "65b003000000000000000003",
        "Night Drive",
        "Velvet Circuit",
        243,
        2024,
        2,
        2,
    ),
    (
        "65c004000000000000000004",
        "Pont des Arts",
        "Camille Verne",
        201,
        2024,
        3,
        21,
    ),
    (
        "65d005000000000000000005",
        "Static Bloom",
        "Velvet Circuit",
        176,
        2024,
        4,
        9,
    ),
    (
        "65e006000000000000000006",
        "Dernier métro",
        "Camille Verne",
        229,
        2024,
        5,
        30,
    ),
    (
        "65f007000000000000000007",
        "Glasshouse",
        "Northern Lights Trio",
        312,
        2024,
        6,
        17,
    ),
    (
        "660008000000000000000008",
        "Coda",
        "Les Harmoniques",
        158,
        2024,
        7,
        4,
    ),
];
