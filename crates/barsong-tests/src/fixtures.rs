//! Scan texts with known SHA-256-derived parameters.

/// A scan text and the parameter tuple its digest yields.
#[derive(Debug, Clone, Copy)]
pub struct ScanFixture {
    pub text: &'static str,
    pub scale: &'static str,
    pub bpm: u16,
    pub base_pitch: u8,
    pub unit_beats: f64,
    pub instrument: u8,
    pub chord_duration_beats: f64,
}

/// Golden derivations.
pub const SCAN_FIXTURES: &[ScanFixture] = &[
    ScanFixture {
        text: "ABC",
        scale: "minor",
        bpm: 161,
        base_pitch: 40,
        unit_beats: 0.125,
        instrument: 84,
        chord_duration_beats: 4.0,
    },
    ScanFixture {
        text: "",
        scale: "pentatonic",
        bpm: 125,
        base_pitch: 57,
        unit_beats: 0.375,
        instrument: 104,
        chord_duration_beats: 3.0,
    },
    ScanFixture {
        text: "XXXXJ102800309",
        scale: "major",
        bpm: 176,
        base_pitch: 38,
        unit_beats: 0.25,
        instrument: 84,
        chord_duration_beats: 4.5,
    },
    ScanFixture {
        text: "||||    XX",
        scale: "minor",
        bpm: 168,
        base_pitch: 52,
        unit_beats: 0.5,
        instrument: 81,
        chord_duration_beats: 4.5,
    },
    ScanFixture {
        text: "Test Barcode",
        scale: "minor",
        bpm: 137,
        base_pitch: 54,
        unit_beats: 0.375,
        instrument: 81,
        chord_duration_beats: 3.0,
    },
];

/// Texts that exercise the marked set, long runs and non-ASCII input.
pub const EDGE_TEXTS: &[&str] = &[
    "|",
    "||||||||||||||||||||||||||||||||",
    "\u{2588}\u{2588} \u{2588} \u{2588}\u{2588}\u{2588}",
    "MЗE ODB0A010 00",
    "##xx11  00",
    "\t\t tab",
];
