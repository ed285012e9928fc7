use serde::{Deserialize, Serialize};

use crate::error::LogicMatrixError;
use crate::matrix::LogicMatrix;

// Cells may be written as booleans or as 0/1.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum CellTrampoline {
    Bool(bool),
    Integer(u64),
}

impl TryFrom<CellTrampoline> for bool {
    type Error = LogicMatrixError;
    fn try_from(value: CellTrampoline) -> Result<Self, Self::Error> {
        match value {
            CellTrampoline::Bool(b) => Ok(b),
            CellTrampoline::Integer(0) => Ok(false),
            CellTrampoline::Integer(1) => Ok(true),
            CellTrampoline::Integer(x) => Err(LogicMatrixError::Parse(format!(
                "cell values must be 0, 1, true, or false, got: {x}"
            ))),
        }
    }
}

/// Unvalidated rows of a [`LogicMatrix`], as read from text input.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct InputLogicMatrix {
    rows: Vec<Vec<CellTrampoline>>,
}

impl TryFrom<InputLogicMatrix> for LogicMatrix {
    type Error = LogicMatrixError;

    fn try_from(value: InputLogicMatrix) -> Result<Self, Self::Error> {
        let rows = value
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(bool::try_from)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl From<LogicMatrix> for InputLogicMatrix {
    fn from(value: LogicMatrix) -> Self {
        let rows = value
            .rows()
            .map(|row| row.iter().map(|&c| CellTrampoline::Bool(c)).collect())
            .collect();
        Self { rows }
    }
}

/// One line per row, `1` for `true` and `0` for `false`.
impl std::fmt::Display for LogicMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &c in row {
                write!(f, "{}", if c { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}

/// Parse the compact text form of a matrix.
///
/// Rows are separated by newlines or `;`.
/// Whitespace is ignored, as are blank rows.
///
/// # Examples
///
/// ```
/// use logic_matrix::LogicMatrix;
///
/// let m: LogicMatrix = "
///     1 1
///     0 0
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(m, "11;00".parse::<LogicMatrix>().unwrap());
/// assert_eq!(format!("{m}"), "11\n00");
///
/// assert!("1x;00".parse::<LogicMatrix>().is_err());
/// ```
impl std::str::FromStr for LogicMatrix {
    type Err = LogicMatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let row_pattern = match regex::Regex::new(r"^[01]+$") {
            Ok(p) => p,
            Err(_) => {
                return Err(LogicMatrixError::Parse(
                    "failed to build row regex".to_string(),
                ))
            }
        };
        let mut rows: Vec<Vec<bool>> = vec![];
        for line in s.split(&['\n', ';'][..]) {
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>();
            if row.is_empty() {
                continue;
            }
            if !row_pattern.is_match(&row) {
                return Err(LogicMatrixError::Parse(format!(
                    "invalid row {}: {row}",
                    rows.len() + 1
                )));
            }
            rows.push(row.chars().map(|c| c == '1').collect());
        }
        Self::from_rows(rows)
    }
}
