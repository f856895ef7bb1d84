#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let line = String::from_utf8_lossy(data);
    // Decoding must be fail-soft on any input, and anything it accepts
    // must re-encode without panicking.
    if let Ok(msg) = codec::decode(&line) {
        let _ = msg.encode();
        let _ = msg.type_code();
    }
});
