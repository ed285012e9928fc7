#![macro_use]

// Operator forms of the semiring operations.
// Both operands must have the same size, so the output is a `Result`.
macro_rules! impl_semiring_operator {
    ($op: ident, $fn: ident, $method: ident) => {
        impl std::ops::$op<&LogicMatrix> for &LogicMatrix {
            type Output = Result<LogicMatrix, LogicMatrixError>;
            fn $fn(self, rhs: &LogicMatrix) -> Self::Output {
                self.$method(rhs)
            }
        }

        impl std::ops::$op<LogicMatrix> for LogicMatrix {
            type Output = Result<LogicMatrix, LogicMatrixError>;
            fn $fn(self, rhs: LogicMatrix) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl std::ops::$op<&LogicMatrix> for LogicMatrix {
            type Output = Result<LogicMatrix, LogicMatrixError>;
            fn $fn(self, rhs: &LogicMatrix) -> Self::Output {
                self.$method(rhs)
            }
        }
    };
}
