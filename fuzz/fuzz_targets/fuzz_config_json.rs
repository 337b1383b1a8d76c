//! Arbitrary JSON configs: loading, validation and sonifying a fixed scan
//! must never panic. Validated configs may still fail at the SMF wire
//! limits, but whatever bytes come out must read back.

#![no_main]

use barsong_backend_midi::{read_smf, sonify};
use barsong_spec::{validate_config, SonifyConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = SonifyConfig::from_json(json) else {
        return;
    };
    if validate_config(&config).is_ok() {
        if let Ok(result) = sonify("XXXXJ102800309", &config) {
            assert!(read_smf(&result.data).is_ok());
        }
    }
});
