use crate::error::LogicMatrixError;

/// The exponent passed to [`LogicMatrix::power`](crate::LogicMatrix::power).
///
/// This is a newtype wrapper for [`u32`](std::primitive::u32).
///
/// # Examples
///
/// ```
/// let e = logic_matrix::Exponent::from(3_u32);
/// assert_eq!(u32::from(e), 3);
///
/// assert!(logic_matrix::Exponent::try_from(-1_i64).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Exponent(u32);

impl From<u32> for Exponent {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Exponent> for u32 {
    fn from(value: Exponent) -> Self {
        value.0
    }
}

impl TryFrom<i64> for Exponent {
    type Error = LogicMatrixError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| LogicMatrixError::InvalidExponent(value))
    }
}

impl TryFrom<i32> for Exponent {
    type Error = LogicMatrixError;
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<usize> for Exponent {
    type Error = LogicMatrixError;
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| LogicMatrixError::InvalidExponent(i64::try_from(value).unwrap_or(i64::MAX)))
    }
}

impl std::fmt::Display for Exponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
