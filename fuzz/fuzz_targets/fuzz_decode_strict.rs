#![no_main]
use libfuzzer_sys::fuzz_target;
use toon_codec::{DecodeOptions, decode};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = decode(s, &DecodeOptions::default());
    }
});
