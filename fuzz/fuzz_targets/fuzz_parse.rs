#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for record in csv2sql::parse(s) {
            // the parser never emits a record without fields
            assert!(record.is_non_blank());
            for i in 0..=record.len() {
                let _ = record.as_string(i);
                let _ = record.as_integer(i);
                let _ = record.as_dollar(i);
                let _ = record.as_percent(i);
            }
        }
    }
});
