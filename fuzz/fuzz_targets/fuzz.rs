#![no_main]
use daytime::Time;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut input = data;
    if let Ok(time) = Time::read_from(&mut input) {
        // Whatever decoded must survive a canonical re-encode.
        let bytes = time.encode();
        assert_eq!(Time::decode(&bytes), Ok(time));
        // Canonical encodings never use a longer form than necessary.
        let expected_len = match (time.minute(), time.second(), time.nano()) {
            (0, 0, 0) => 1,
            (_, 0, 0) => 2,
            (_, _, 0) => 3,
            _ => 7,
        };
        assert_eq!(bytes.len(), expected_len);
    }
});
