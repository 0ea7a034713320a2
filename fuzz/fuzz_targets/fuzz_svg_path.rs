#![no_main]

use fourier_epicycles::svg::{parse_path_data, parse_svg};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Fehler sind erlaubt, Panics nicht
    if let Ok(path) = parse_path_data(text) {
        for t in [0.0, 0.25, 0.5, 1.0] {
            let _ = path.evaluate(t);
        }
    }
    let _ = parse_svg(text);
});
