#![no_main]

use libfuzzer_sys::fuzz_target;
use wire::Fields;

fuzz_target!(|data: &[u8]| {
    let body = String::from_utf8_lossy(data);
    let mut f = Fields::new(&body);
    while f.has_more() {
        let _ = f.next_str();
    }
    let mut f = Fields::new(&body);
    let _ = f.next_i32();
    let _ = f.next_i32_hex();
    let _ = f.next_bool_word();
    let _ = f.rest();
    let _ = Fields::new(&body).tail_i32();
});
