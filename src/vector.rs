use crate::error::LogicMatrixError;

/// The dot product of two boolean vectors over the boolean semiring.
///
/// The result is `true` if and only if there is an
/// index `i` where both `a[i]` and `b[i]` are `true`.
///
/// # Errors
///
/// [`LogicMatrixError::LengthMismatch`] if the vectors differ in length.
///
/// # Examples
///
/// ```
/// use logic_matrix::logical_dot;
///
/// let a = [true, false, false, false];
/// let b = [true, false, true, false];
/// let c = [false, false, true, false];
/// assert!(logical_dot(&a, &b).unwrap());
/// assert!(!logical_dot(&a, &c).unwrap());
/// ```
pub fn logical_dot(a: &[bool], b: &[bool]) -> Result<bool, LogicMatrixError> {
    if a.len() != b.len() {
        return Err(LogicMatrixError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(semiring_dot(a, b))
}

// Callers guarantee equal lengths.
pub(crate) fn semiring_dot(a: &[bool], b: &[bool]) -> bool {
    a.iter().zip(b).any(|(&x, &y)| x && y)
}
