#![no_main]

use libfuzzer_sys::fuzz_target;
use strand_rt_core::{output_bool, output_i64, output_u64};

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let raw = u64::from_le_bytes(data[1..9].try_into().unwrap());

    let mut out: Vec<u8> = Vec::new();
    match data[0] % 3 {
        0 => {
            let value = raw as i64;
            output_i64(&mut out, value);
            let text = std::str::from_utf8(&out).unwrap();
            assert_eq!(text.parse::<i64>().unwrap(), value);
        }
        1 => {
            output_u64(&mut out, raw);
            let text = std::str::from_utf8(&out).unwrap();
            assert_eq!(text.parse::<u64>().unwrap(), raw);
        }
        _ => {
            let value = raw & 1 == 1;
            output_bool(&mut out, value);
            assert_eq!(out == b"true", value);
        }
    }
});
