#![no_main]

use codesim::codesim_bytes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split the input into two sources; any byte sequence must yield a
    // score in range or an error, never a panic
    let mid = data.len() / 2;
    let (first, second) = data.split_at(mid);
    if let Ok(score) = codesim_bytes(first, second) {
        assert!((0.0..=100.0).contains(&score));
    }
});
