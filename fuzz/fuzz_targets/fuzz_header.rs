#![no_main]

use control_wire::{Header, Marshal};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any decoded header must re-encode to the same first four octets
    if let Ok(header) = Header::from_bytes(data) {
        let raw = header.marshal().expect("decoded header is always in range");
        assert_eq!(&raw[..], &data[..4]);
    }
});
