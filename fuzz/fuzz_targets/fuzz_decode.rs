#![no_main]
use libfuzzer_sys::fuzz_target;
use tgwire::Options;
use tgwire::types::Update;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = tgwire::from_str::<Update>(s, &Options::default());
        let _ = tgwire::from_str::<Update>(s, &Options::lenient());
    }
});
