#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((seed_byte, rest)) = data.split_first() else {
        return;
    };
    let Ok(input) = std::str::from_utf8(rest) else {
        return;
    };
    if let Ok((schema, payload)) =
        synthpost::fuzzing::schema_payload_input(input, u64::from(*seed_byte))
    {
        debug_assert_eq!(schema.len(), payload.len());
    }
});
