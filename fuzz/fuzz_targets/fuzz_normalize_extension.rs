#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(normalized) = conveyor_engines::normalize_extension(data) {
        assert!(normalized.starts_with('.'));
        // Normalization must be idempotent over its own output.
        let again = conveyor_engines::normalize_extension(&normalized)
            .expect("normalized extension failed to re-normalize");
        assert_eq!(normalized, again);
    }
});
