#![no_main]

use codec::ParseOptions;
use layout::checksum;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let options = ParseOptions::for_testing().with_strict_checksum(false);
    let Ok(character) = codec::parse_with(data, &options) else {
        return;
    };
    let bytes = codec::encode(&character).expect("decoded save re-encodes");

    // Only the size and checksum words may change.
    let mut expected = data.to_vec();
    checksum::patch(&mut expected).expect("decoded save has a full header");
    assert_eq!(bytes, expected);
});
