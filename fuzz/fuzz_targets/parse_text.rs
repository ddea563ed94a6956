#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate apnum;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = apnum::Number::from_text(s, 200, 10);
    }
});
