#![no_main]

use libfuzzer_sys::fuzz_target;
use mixremap::{descriptor, mapping};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let table = mapping::parse(
            "com.old.Foo com.new.Foo\ncom.old.Foo bar baz\ncom.old.Foo run() execute()\n",
            "fuzz",
        )
        .unwrap();
        // Arbitrary input must never panic, and input an empty table cannot
        // touch must come back byte-identical.
        let _ = descriptor::remap_member_reference(&table, text);
        let _ = descriptor::remap_target(&table, text);
        let empty = mapping::MappingTable::new();
        assert_eq!(descriptor::remap_member_reference(&empty, text), text);
    }
});
