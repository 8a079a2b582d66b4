#![no_main]

use control_wire::build_error_cause;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz error cause decoding - test for panics and out-of-bounds slicing
    let _ = build_error_cause(data);
});
