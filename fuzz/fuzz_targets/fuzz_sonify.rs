//! Raw scan bytes through the whole pipeline, both strategies.

#![no_main]

use barsong_backend_midi::{read_smf, sonify};
use barsong_spec::{decode_scan_bytes, EmissionStrategy, SonifyConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = decode_scan_bytes(data);
    for strategy in [EmissionStrategy::Sequential, EmissionStrategy::Chord] {
        let config = SonifyConfig {
            strategy,
            ..SonifyConfig::default()
        };
        if let Ok(result) = sonify(&text, &config) {
            let parsed = read_smf(&result.data).expect("own output must parse");
            assert_eq!(parsed.events.len(), result.events.events.len());
        }
    }
});
