#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    let Some((selector, rest)) = data.split_first() else {
        return;
    };

    let suffix = match selector % 5 {
        0 => ".yaml",
        1 => ".toml",
        2 => ".json",
        3 => ".txt",
        _ => "",
    };

    let payload = if rest.len() > 1_000_000 {
        &rest[..1_000_000]
    } else {
        rest
    };

    let Ok(mut file) = tempfile::Builder::new().suffix(suffix).tempfile() else {
        return;
    };

    if file.write_all(payload).is_err() {
        return;
    }

    let path = file.path().to_path_buf();
    let result = synthpost::fuzzing::load_config_file_input(&path);
    if result.is_ok() {
        debug_assert!(suffix == ".yaml" || suffix == ".toml" || suffix == ".json");
    }
});
