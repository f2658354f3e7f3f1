#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = mediamark::to_events(s);

        let options = mediamark::ParseOptions {
            definitions: vec!["a".into(), "foo".into()],
            ..mediamark::ParseOptions::default()
        };
        let _ = mediamark::to_events_with_options(s, &options);
    }
});
