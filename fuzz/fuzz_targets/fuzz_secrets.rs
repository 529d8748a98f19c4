#![no_main]

use libfuzzer_sys::fuzz_target;
use tempokey_core::{accounts, otp};

fuzz_target!(|data: &str| {
    // Both parsing surfaces may reject arbitrary input, but must not panic.
    let _ = otp::decode_secret(data);
    let _ = accounts::parse_secrets(data);
});
