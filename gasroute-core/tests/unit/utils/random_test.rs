use super::*;

#[test]
fn can_return_uniform_real_in_bounds() {
    let random = DefaultRandom::default();

    (0..100).for_each(|_| {
        let value = random.uniform_real(0.9, 1.1);
        assert!((0.9..1.1).contains(&value));
    });
}

#[test]
fn can_return_min_for_collapsed_range() {
    let random = DefaultRandom::default();

    assert_eq!(random.uniform_real(0.5, 0.5), 0.5);
    assert_eq!(random.uniform_int(7, 7), 7);
}

#[test]
fn can_return_uniform_int_in_bounds() {
    let random = DefaultRandom::default();

    (0..100).for_each(|_| {
        let value = random.uniform_int(1, 3);
        assert!((1..=3).contains(&value));
    });
}
