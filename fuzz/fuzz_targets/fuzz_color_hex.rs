//! Fuzz target for color hex parsing.
//!
//! Parsing must never panic, and anything that parses must print back to a
//! string that parses to the same color.

#![no_main]

use feathers::color::Rgba;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Some(color) = Rgba::from_hex(data) {
        assert_eq!(Rgba::from_hex(&color.to_string()), Some(color));
    }

    if !data.starts_with('#') {
        let _ = Rgba::from_hex(&format!("#{data}"));
    }

    // Substrings, cut on char boundaries only.
    for (i, _) in data.char_indices().take(10) {
        let _ = Rgba::from_hex(&data[i..]);
        let _ = Rgba::from_hex(&data[..i]);
    }
});
