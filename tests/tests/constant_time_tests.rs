// tests/constant_time_tests.rs
//
// Timing smoke test: decapsulation cost must not depend on the hint bits.

use frodokexp_kem::frodokexp::{
    decapsulate, generate_keypair_a, generate_keypair_b, generate_parameters, Ciphertext, Seed,
};
use frodokexp_tests::constant_time::{tester::summarize, TestConfig, TimingTester};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use std::hint::black_box;

#[test]
fn test_decapsulation_timing_independent_of_hints() {
    let params = generate_parameters(&Seed::new([0x11; 32]));
    let mut rng = ChaChaRng::seed_from_u64(5);
    let alice = generate_keypair_a(&params, &mut rng).unwrap();
    let bob = generate_keypair_b(&params, &mut rng).unwrap();

    let zeros = Ciphertext::new(0);
    let ones = Ciphertext::new(u64::MAX);

    let tester = TimingTester::new(TestConfig::for_decapsulation());
    let (times_a, times_b) = tester.measure_pair(
        || {
            black_box(decapsulate(
                bob.public_key(),
                alice.secret_key(),
                alice.confirmation(),
                black_box(&zeros),
            ));
        },
        || {
            black_box(decapsulate(
                bob.public_key(),
                alice.secret_key(),
                alice.confirmation(),
                black_box(&ones),
            ));
        },
    );

    let analysis = tester.analyze(&times_a, &times_b).unwrap();
    println!("{}", summarize(&analysis, "decapsulate"));
    assert!(analysis.is_constant_time, "{:#?}", analysis);
}
