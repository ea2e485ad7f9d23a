#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz: feed arbitrary UTF-8 through the full splice.
    let Ok(s) = std::str::from_utf8(data) else { return };
    let _ = dbfix_patch::patch_source(s);
});
