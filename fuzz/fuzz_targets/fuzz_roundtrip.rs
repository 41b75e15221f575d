#![no_main]
use libfuzzer_sys::fuzz_target;
use tgwire::Options;
use tgwire::types::Update;

// Whatever decodes must normalize, and the normalized form must decode back to the same record.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else { return };
    let opts = Options::lenient();
    let Ok(update) = tgwire::from_str::<Update>(s, &opts) else { return };
    let wire = tgwire::normalize_with(&update, &opts).expect("decoded update must normalize");
    assert!(wire.values().all(|v| !v.is_null()), "null leaked into {:?}", wire);

    let again: Update = tgwire::from_value(serde_json::Value::Object(wire.clone()), &Options::default())
        .expect("normalized update must decode strictly");
    assert_eq!(again, update);
    assert_eq!(tgwire::normalize_with(&again, &opts).expect("second normalize"), wire);
});
