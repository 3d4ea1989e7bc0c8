use super::*;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_concrete_cases() {
    assert_eq!(0b1011_u8.count_set_bits(), 3);
    assert_eq!(0b1000_u8.first_set_bit(), 4);
    assert_eq!(1_u32.fast_log2(), 0);
    assert_eq!(0xFFFF_FFFF_u32.fast_log2(), 31);

    let one = Rotation::<u8>::constant::<1>();
    assert_eq!(0b0000_0001_u8.rotate_left_bits(one), 0b0000_0010);
    assert_eq!(0b1000_0000_u8.rotate_left_bits(one), 0b0000_0001);
}

#[test]
fn test_zero_and_full_width() {
    assert_eq!(0u8.count_set_bits(), 0);
    assert_eq!(0u64.count_set_bits(), 0);
    assert_eq!(u8::MAX.count_set_bits(), 8);
    assert_eq!(u16::MAX.count_set_bits(), 16);
    assert_eq!(u32::MAX.count_set_bits(), 32);
    assert_eq!(u64::MAX.count_set_bits(), 64);
    assert_eq!(usize::MAX.count_set_bits(), usize::BITS);

    assert_eq!(0u8.first_set_bit(), 0);
    assert_eq!(0u16.first_set_bit(), 0);
    assert_eq!(0u32.first_set_bit(), 0);
    assert_eq!(0u64.first_set_bit(), 0);

    assert_eq!(0x80u8.first_set_bit(), 8);
    assert_eq!(0x8000u16.first_set_bit(), 16);
    assert_eq!((1u64 << 63).first_set_bit(), 64);
}

#[test]
fn test_narrow_leading_zeros() {
    assert_eq!(1u8.leading_zero_bits(), 7);
    assert_eq!(0x80u8.leading_zero_bits(), 0);
    assert_eq!(1u16.leading_zero_bits(), 15);
    assert_eq!(0x0100u16.leading_zero_bits(), 7);
    assert_eq!(1u32.leading_zero_bits(), 31);
    assert_eq!(1u64.leading_zero_bits(), 63);
}

#[test]
fn test_properties_exhaustive_u16() {
    for x in 0..=u16::MAX {
        assert_eq!(x.count_set_bits(), x.reverse_bits().count_set_bits());
        assert_eq!(x.parity_bits(), x.count_set_bits() % 2);

        if x == 0 {
            continue;
        }

        let ffs = x.first_set_bit();
        assert!((1..=16).contains(&ffs));
        assert_ne!(x & (1 << (ffs - 1)), 0);
        assert_eq!(x & ((1 << (ffs - 1)) - 1), 0);

        let log = x.fast_log2();
        assert!(1u32 << log <= x as u32 && (x as u32) < 1u32 << (log + 1));
        assert_eq!(x.leading_zero_bits() + log, 15);
        assert_eq!(x.trailing_zero_bits(), ffs - 1);
    }
}

#[test]
fn test_properties_random_u64() {
    let mut rng = StdRng::seed_from_u64(0x00C0_FFEE);
    let shifts = Uniform::new(0, 64u32);

    for _ in 0..100_000 {
        let x = rng.gen::<u64>() >> shifts.sample(&mut rng);

        assert_eq!(x.count_set_bits(), x.reverse_bits().count_set_bits());
        assert_eq!(x.parity_bits(), x.count_set_bits() % 2);

        let low = x as u32;
        assert_eq!(low.parity_bits(), low.count_set_bits() % 2);

        if x == 0 {
            assert_eq!(x.first_set_bit(), 0);
            continue;
        }

        let ffs = x.first_set_bit();
        assert!((1..=64).contains(&ffs));
        assert_ne!(x & (1 << (ffs - 1)), 0);
        assert_eq!(x & ((1 << (ffs - 1)) - 1), 0);

        let log = x.fast_log2();
        assert!(1u64 << log <= x);
        assert!(log == 63 || x < 1u64 << (log + 1));
        assert_eq!(x.leading_zero_bits() + log, 63);
        assert_eq!(x.trailing_zero_bits(), ffs - 1);
    }
}

#[test]
fn test_rotation_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1_000 {
        let x: u64 = rng.gen();
        for k in 1..64 {
            let k = Rotation::new(k).unwrap();
            assert_eq!(x.rotate_left_bits(k).rotate_right_bits(k), x);
            assert_eq!(x.rotate_left_bits(k), x.rotate_left(k.get()));
        }

        let x = x as u32;
        for k in 1..32 {
            let k = Rotation::new(k).unwrap();
            assert_eq!(x.rotate_left_bits(k).rotate_right_bits(k), x);
            assert_eq!(x.rotate_right_bits(k), x.rotate_right(k.get()));
        }
    }

    for x in 0..=u16::MAX {
        for k in 1..16 {
            let k = Rotation::new(k).unwrap();
            assert_eq!(x.rotate_left_bits(k).rotate_right_bits(k), x);
            assert_eq!(x.rotate_left_bits(k), x.rotate_left(k.get()));
        }

        let b = x as u8;
        for k in 1..8 {
            let k = Rotation::new(k).unwrap();
            assert_eq!(b.rotate_left_bits(k).rotate_right_bits(k), b);
            assert_eq!(b.rotate_right_bits(k), b.rotate_right(k.get()));
        }
    }
}

#[test]
fn test_usize_matches_fixed_width() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let x: usize = rng.gen::<usize>() | 1;
        #[cfg(target_pointer_width = "64")]
        let wide = x as u64;
        #[cfg(target_pointer_width = "32")]
        let wide = x as u32;

        assert_eq!(x.count_set_bits(), wide.count_set_bits());
        assert_eq!(x.first_set_bit(), wide.first_set_bit());
        assert_eq!(x.fast_log2(), wide.fast_log2());
        assert_eq!(x.leading_zero_bits(), wide.leading_zero_bits());
    }
}

#[test]
#[cfg(debug_assertions)]
fn test_zero_precondition_checked_in_debug() {
    assert!(std::panic::catch_unwind(|| 0u32.fast_log2()).is_err());
    assert!(std::panic::catch_unwind(|| 0u8.leading_zero_bits()).is_err());
    assert!(std::panic::catch_unwind(|| 0u64.trailing_zero_bits()).is_err());
}
