pub(crate) use super::*;

fn matrix(rows: usize, cols: usize, data: Vec<f64>) -> Matrix<f64> {
    let dim = Dimension::new(rows, cols).expect("positive sides");
    Matrix::from_vec(dim, data).expect("data fills the shape")
}

#[test]
fn test_transpose_main() {
    let a = matrix(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let t = a.transpose_main();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
}

#[test]
fn test_transpose_secondary() {
    // [1 2]      [4 2]
    // [3 4]  ->  [3 1]
    let a = matrix(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    let t = a.transpose_secondary();
    assert_eq!(t.as_slice(), &[4.0, 2.0, 3.0, 1.0]);
}

#[test]
fn test_transpose_secondary_rectangular() {
    let a = matrix(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let t = a.transpose_secondary();
    assert_eq!(t.shape(), (3, 2));
    // result(r,c) = A(rows-c-1, cols-r-1)
    assert_eq!(t.as_slice(), &[6.0, 3.0, 5.0, 2.0, 4.0, 1.0]);
}

#[test]
fn test_transpose_vertical() {
    let a = matrix(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let t = a.transpose_vertical();
    assert_eq!(t.shape(), (2, 3));
    assert_eq!(t.as_slice(), &[3.0, 2.0, 1.0, 6.0, 5.0, 4.0]);
}

#[test]
fn test_transpose_horizontal() {
    let a = matrix(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let t = a.transpose_horizontal();
    assert_eq!(t.shape(), (2, 3));
    assert_eq!(t.as_slice(), &[4.0, 5.0, 6.0, 1.0, 2.0, 3.0]);
}

#[test]
fn test_transposes_leave_input_unmodified() {
    let a = matrix(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    let _ = a.transpose_main();
    let _ = a.transpose_secondary();
    let _ = a.transpose_vertical();
    let _ = a.transpose_horizontal();
    assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_minor() {
    let a = matrix(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]);
    // delete row 0, col 0 -> [[5,6],[8,10]] -> 50 - 48 = 2
    assert_eq!(a.minor(0, 0).expect("3x3 minor"), 2.0);
    // delete row 1, col 2 -> [[1,2],[7,8]] -> 8 - 14 = -6
    assert_eq!(a.minor(1, 2).expect("3x3 minor"), -6.0);
}

#[test]
fn test_minor_of_1x1_is_undefined() {
    let a = matrix(1, 1, vec![5.0]);
    assert!(matches!(
        a.minor(0, 0),
        Err(MatrizError::Undefined { rows: 1, cols: 1 })
    ));
}

#[test]
fn test_cofactor_sign() {
    let a = matrix(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]);
    let minor = a.minor(0, 1).expect("3x3 minor");
    let cofactor = a.cofactor(0, 1).expect("3x3 cofactor");
    assert_eq!(cofactor, -minor);
    assert_eq!(a.cofactor(1, 1).expect("3x3 cofactor"), a.minor(1, 1).expect("3x3 minor"));
}

#[test]
fn test_determinant_1x1() {
    assert_eq!(matrix(1, 1, vec![42.0]).determinant().expect("square"), 42.0);
}

#[test]
fn test_determinant_2x2() {
    // [[1,2],[3,4]] -> 1*4 - 2*3 = -2
    assert_eq!(matrix(2, 2, vec![1.0, 2.0, 3.0, 4.0]).determinant().expect("square"), -2.0);
}

#[test]
fn test_determinant_3x3() {
    // det = 1*(5*10-6*8) - 2*(4*10-6*7) + 3*(4*8-5*7) = 2 + 4 - 9 = -3
    let a = matrix(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]);
    assert_eq!(a.determinant().expect("square"), -3.0);
}

#[test]
fn test_determinant_4x4_identity() {
    let eye = Matrix::identity(4).expect("positive size");
    assert_eq!(eye.determinant().expect("square"), 1.0);
}

#[test]
fn test_determinant_not_square() {
    let a = matrix(2, 3, vec![1.0; 6]);
    assert!(matches!(
        a.determinant(),
        Err(MatrizError::NotSquare { rows: 2, cols: 3 })
    ));
}

#[test]
fn test_adjoint_2x2() {
    // adj [[a,b],[c,d]] = [[d,-b],[-c,a]]
    let a = matrix(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    let adj = a.adjoint().expect("square");
    assert_eq!(adj.as_slice(), &[4.0, -2.0, -3.0, 1.0]);
}

#[test]
fn test_adjoint_not_square_fails_at_entry() {
    let a = matrix(3, 2, vec![1.0; 6]);
    assert!(matches!(
        a.adjoint(),
        Err(MatrizError::NotSquare { rows: 3, cols: 2 })
    ));
}

#[test]
fn test_inverse_2x2() {
    // inv [[4,7],[2,6]] = [[0.6,-0.7],[-0.2,0.4]]
    let a = matrix(2, 2, vec![4.0, 7.0, 2.0, 6.0]);
    let inv = a.inverse().expect("det = 10");
    let expected = [0.6, -0.7, -0.2, 0.4];
    for (got, want) in inv.as_slice().iter().zip(expected) {
        assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
    }
}

#[test]
fn test_inverse_times_original_is_identity() {
    let a = matrix(3, 3, vec![2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0]);
    let inv = a.inverse().expect("det = 4");
    let product = inv.matmul(&a).expect("3x3 * 3x3");
    let eye = Matrix::identity(3).expect("positive size");
    for row in 0..3 {
        for col in 0..3 {
            assert!(
                (product.get(row, col) - eye.get(row, col)).abs() < 1e-9,
                "inverse(A)*A differs from I at ({row}, {col})"
            );
        }
    }
}

#[test]
fn test_inverse_singular() {
    // second row is twice the first
    let a = matrix(2, 2, vec![1.0, 2.0, 2.0, 4.0]);
    assert!(matches!(
        a.inverse(),
        Err(MatrizError::SingularMatrix { det }) if det == 0.0
    ));
}

#[test]
fn test_inverse_not_square() {
    let a = matrix(2, 3, vec![1.0; 6]);
    assert!(matches!(a.inverse(), Err(MatrizError::NotSquare { .. })));
}

#[test]
fn test_inverse_1x1_reports_undefined() {
    // the 1x1 adjoint needs a 0x0 minor, which Dimension cannot represent
    let a = matrix(1, 1, vec![2.0]);
    assert!(matches!(a.inverse(), Err(MatrizError::Undefined { .. })));
}
