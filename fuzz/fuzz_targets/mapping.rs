#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Parsing must never panic; malformed lines surface as errors. A
        // table that parses must also survive inversion both ways.
        if let Ok(table) = mixremap::mapping::parse(text, "fuzz") {
            let _ = table.invert().invert();
        }
        let _ = mixremap::mapping::parse_inverted(text, "fuzz");
    }
});
