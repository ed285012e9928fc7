use logic_matrix::{logical_dot, LogicMatrix, LogicMatrixError};

// All sixteen 2x2 matrices.
fn all_two_by_two() -> Vec<LogicMatrix> {
    (0..16_u8)
        .map(|bits| {
            let cells = (0..4).map(|i| bits & (1 << i) != 0).collect::<Vec<_>>();
            LogicMatrix::from_rows(vec![cells[0..2].to_vec(), cells[2..4].to_vec()]).unwrap()
        })
        .collect()
}

fn bit_vectors(len: usize) -> Vec<Vec<bool>> {
    (0..(1_u32 << len))
        .map(|bits| (0..len).map(|i| bits & (1 << i) != 0).collect())
        .collect()
}

#[test]
fn dot_product_truth() {
    for a in bit_vectors(3) {
        for b in bit_vectors(3) {
            let shared = a.iter().zip(&b).any(|(&x, &y)| x && y);
            assert_eq!(logical_dot(&a, &b).unwrap(), shared);
            assert_eq!(logical_dot(&a, &b).unwrap(), logical_dot(&b, &a).unwrap());
        }
    }
}

#[test]
fn dot_product_length_mismatch() {
    let r = logical_dot(&[true], &[true, true]);
    assert!(matches!(r, Err(LogicMatrixError::LengthMismatch { .. })));
}

#[test]
fn identity_law() {
    for m in all_two_by_two() {
        let identity = m.power(0).unwrap();
        assert!(identity.is_identity());
        assert_eq!(identity.multiply(&m).unwrap(), m);
        assert_eq!(m.multiply(&identity).unwrap(), m);
    }
}

#[test]
fn identity_of_size_three() {
    let mut m = LogicMatrix::new(3).unwrap();
    m.set(1, 2, true).unwrap();
    m.set(3, 1, true).unwrap();
    let p = m.power(0).unwrap();
    assert_eq!(p, LogicMatrix::identity(3).unwrap());
    assert_eq!(format!("{p}"), "100\n010\n001");
}

#[test]
fn power_consistency() {
    for m in all_two_by_two() {
        for k in 1..5_u32 {
            let expected = m.power(k - 1).unwrap().multiply(&m).unwrap();
            assert_eq!(m.power(k).unwrap(), expected);
        }
        assert_eq!(m.square(), m.power(2).unwrap());
        assert_eq!(m.cube(), m.power(3).unwrap());
    }
}

#[test]
fn addition_identity_and_commutativity() {
    let zero = LogicMatrix::new(2).unwrap();
    for a in all_two_by_two() {
        assert_eq!(a.logical_plus(&zero).unwrap(), a);
        for b in all_two_by_two() {
            assert_eq!(a.logical_plus(&b).unwrap(), b.logical_plus(&a).unwrap());
        }
    }
}

#[test]
fn multiplication_is_associative() {
    let matrices = all_two_by_two();
    for a in &matrices {
        for b in &matrices {
            for c in matrices.iter().step_by(3) {
                let left = a.multiply(b).unwrap().multiply(c).unwrap();
                let right = a.multiply(&b.multiply(c).unwrap()).unwrap();
                assert_eq!(left, right);
            }
        }
    }
}

#[test]
fn operands_are_not_modified() {
    let a: LogicMatrix = "110;011;000".parse().unwrap();
    let b: LogicMatrix = "001;100;010".parse().unwrap();
    let (a0, b0) = (a.clone(), b.clone());
    let _ = a.multiply(&b).unwrap();
    let _ = a.logical_plus(&b).unwrap();
    let _ = a.power(4).unwrap();
    let _ = a.transitive_closure();
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

#[test]
fn copy_independence() {
    let m: LogicMatrix = "10;01".parse().unwrap();
    let mut copy = m.clone();
    copy.set(1, 2, true).unwrap();
    copy.set(1, 1, false).unwrap();
    assert!(!m.get(1, 2).unwrap());
    assert!(m.get(1, 1).unwrap());
    assert_ne!(m, copy);
}

#[test]
fn square_of_two_by_two_example() {
    let mut m = LogicMatrix::new(2).unwrap();
    m.set(1, 1, true).unwrap();
    m.set(1, 2, true).unwrap();
    m.set(2, 1, false).unwrap();
    m.set(2, 2, false).unwrap();
    let sq = m.square();
    assert_eq!(
        sq.rows().map(|r| r.to_vec()).collect::<Vec<_>>(),
        vec![vec![true, true], vec![false, false]]
    );
}

#[test]
fn closure_of_path_graph() {
    let n = 5;
    let mut path = LogicMatrix::new(n).unwrap();
    for i in 1..n {
        path.set(i, i + 1, true).unwrap();
    }
    let closure = path.transitive_closure();
    for r in 1..=n {
        for c in 1..=n {
            assert_eq!(closure.get(r, c).unwrap(), c > r);
        }
    }
    let reflexive = path.reflexive_transitive_closure();
    for r in 1..=n {
        for c in 1..=n {
            assert_eq!(reflexive.get(r, c).unwrap(), c >= r);
        }
    }
}

#[test]
fn closure_matches_sum_of_powers() {
    let m: LogicMatrix = "0100;0000;1001;0010".parse().unwrap();
    let mut expected = m.clone();
    for k in 2..=4 {
        expected = expected.logical_plus(&m.power(k).unwrap()).unwrap();
    }
    assert_eq!(m.transitive_closure(), expected);
}

#[test]
fn invalid_inputs() {
    assert!(matches!(
        LogicMatrix::new(0),
        Err(LogicMatrixError::InvalidSize(0))
    ));
    let m = LogicMatrix::new(2).unwrap();
    assert!(matches!(
        m.power(-1_i64),
        Err(LogicMatrixError::InvalidExponent(-1))
    ));
    assert!(matches!(
        m.multiply(&LogicMatrix::new(1).unwrap()),
        Err(LogicMatrixError::DimensionMismatch { left: 2, right: 1 })
    ));
    assert!(matches!(
        m.get(3, 1),
        Err(LogicMatrixError::IndexOutOfBounds { index: 3, size: 2 })
    ));
}
