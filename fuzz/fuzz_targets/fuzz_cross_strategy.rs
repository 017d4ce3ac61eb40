#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibkit_core::{
    fibonacci, fibonacci_iterative_big, fibonacci_iterative_fixed, fibonacci_matrix_big,
    fibonacci_matrix_fixed, MAX_FIB_U64,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Use first 4 bytes as n, capped at 10000 for speed (IterativeBig is linear)
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 10_000;

    let expected = fibonacci_matrix_big(n);
    assert_eq!(fibonacci(n), expected, "Fib != MatrixBig at n={n}");
    assert_eq!(fibonacci_iterative_big(n), expected, "IterativeBig != MatrixBig at n={n}");

    // Fixed-width strategies agree with each other everywhere and are exact in range.
    let fixed = fibonacci_matrix_fixed(n);
    assert_eq!(fibonacci_iterative_fixed(n), fixed, "IterativeFixed != MatrixFixed at n={n}");
    if n <= MAX_FIB_U64 {
        assert_eq!(BigUint::from(fixed), expected, "MatrixFixed inexact at n={n}");
    }
});
