use ndarray::{arr1, Array2};
use svd_image_compression::*;

fn frobenius(mat: &Array2<f64>) -> f64 {
    mat.iter().map(|item| item * item).sum::<f64>().sqrt()
}

#[test]
fn test_known_spectrum_rank_two_error() {
    let mut rng = rand::thread_rng();
    let mat = f64::random_matrix_with_singular_values((4, 4), &[4.0, 3.0, 2.0, 1.0], &mut rng).unwrap();

    let svd = SVD::<f64>::compute_from(mat.view()).unwrap();
    for (&actual, &expected) in svd.s.iter().zip([4.0, 3.0, 2.0, 1.0].iter()) {
        assert!((actual - expected).abs() < 1E-12);
    }

    let full = svd.truncated_reconstruct(4).unwrap();
    let rank_two = svd.truncated_reconstruct(2).unwrap();

    // The discarded singular values are 2 and 1.
    let expected = 5.0_f64.sqrt();
    assert!((frobenius(&(&full - &rank_two)) - expected).abs() < 1E-12);
    assert!((frobenius(&(&mat - &rank_two)) - expected).abs() < 1E-12);
    assert!((svd.truncation_error(2).unwrap() - expected).abs() < 1E-12);

    assert!(f64::rel_diff_fro(full.view(), mat.view()) < 1E-12);
}

#[test]
fn test_every_rank_keeps_shape_and_error_decreases() {
    let mut rng = rand::thread_rng();
    let mat = from_pixels::<f64>(random_pixels((12, 7), &mut rng).view());
    let svd = SVD::<f64>::compute_from(mat.view()).unwrap();

    let errors = (1..=7)
        .map(|k| {
            let approx = svd.truncated_reconstruct(k).unwrap();
            assert_eq!(approx.dim(), (12, 7));
            frobenius(&(&mat - &approx))
        })
        .collect::<Vec<f64>>();

    let norm = frobenius(&mat);
    for pair in errors.windows(2) {
        assert!(pair[1] <= pair[0] + 1E-9 * norm);
    }
    assert!(errors[6] < 1E-9 * norm);
}

#[test]
fn test_boundary_ranks_are_rejected() {
    let mut rng = rand::thread_rng();
    let mat = f32::random_gaussian((5, 9), &mut rng);
    let svd = SVD::<f32>::compute_from(mat.view()).unwrap();

    assert!(svd.truncated_reconstruct(5).is_ok());
    for &k in &[0, 6] {
        assert!(matches!(
            svd.truncated_reconstruct(k),
            Err(SvdCompressionError::InvalidDimension(_))
        ));
    }
}

#[test]
fn test_diagonal_embedding() {
    let sigma = embed_diagonal::<f64>(arr1(&[3.0, 5.0]).view(), (4, 2)).unwrap();

    let mut expected = Array2::<f64>::zeros((4, 2));
    expected[[0, 0]] = 3.0;
    expected[[1, 1]] = 5.0;
    assert_eq!(sigma, expected);
}

#[test]
fn test_compression_ratio_arithmetic() {
    assert!((compression_ratio(100, 100, 10) - 0.201).abs() < 1E-15);
    assert_eq!(stored_entries(100, 100, 10), 2010);
}
