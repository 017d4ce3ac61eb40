#![no_main]

use libfuzzer_sys::fuzz_target;

use fibkit_core::{fibonacci, Dispatcher, Thresholds};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    // Arbitrary input must either be rejected or produce a dispatcher that
    // computes the same values as the defaults.
    let Ok(thresholds) = Thresholds::from_json(json) else {
        return;
    };
    let dispatcher = Dispatcher::with_thresholds(thresholds).expect("from_json validates");
    for n in [0, 1, 91, 92, 93, 176, 177, 300] {
        assert_eq!(dispatcher.compute(n), fibonacci(n), "threshold-dependent result at n={n}");
    }
});
