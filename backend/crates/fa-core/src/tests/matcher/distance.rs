use crate::euclidean_distance;

#[test]
fn test_distance_to_self_is_zero() {
    let a = [0.25, -0.5, 1.0, 3.0];

    assert_eq!(euclidean_distance(&a, &a), 0.0);
}

#[test]
fn test_distance_three_four_five() {
    assert_eq!(euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
}

#[test]
fn test_distance_is_symmetric() {
    let a = [1.0, 2.0, 3.0];
    let b = [-4.0, 0.5, 9.0];

    assert_eq!(euclidean_distance(&a, &b), euclidean_distance(&b, &a));
}

#[test]
fn test_length_mismatch_is_infinitely_far() {
    assert_eq!(euclidean_distance(&[0.0, 0.0], &[0.0, 0.0, 0.0]), f64::INFINITY);
    assert_eq!(euclidean_distance(&[], &[1.0]), f64::INFINITY);
}

#[test]
fn test_empty_descriptors_are_zero_apart() {
    assert_eq!(euclidean_distance(&[], &[]), 0.0);
}
