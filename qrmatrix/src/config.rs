use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::matrix::Matrix;

/// TOML form of a matrix.
///
/// ```toml
/// width = 3
/// height = 2
/// data = """
/// 210
/// 005
/// """
/// ```
///
/// `data` is the row-major data string accepted by
/// [`Matrix::from_data_string`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixConfig {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub data: String,
}

impl MatrixConfig {
    pub fn from_matrix(m: &Matrix) -> Self {
        Self {
            width: m.width(),
            height: m.height(),
            data: m.to_data_string(),
        }
    }

    /// Build the matrix. An empty `data` means every cell is `Init`.
    pub fn to_matrix(&self) -> Result<Matrix, ParseError> {
        if self.data.trim().is_empty() {
            return Ok(Matrix::try_new(self.width, self.height)?);
        }
        Matrix::from_data_string(self.width, self.height, &self.data)
    }

    pub fn to_toml(&self) -> Result<String, ParseError> {
        toml::to_string(self).map_err(|e| ParseError::Config(e.to_string()))
    }
}

impl Matrix {
    /// Parse a TOML matrix description (see [`MatrixConfig`]).
    pub fn from_toml(toml_str: &str) -> Result<Matrix, ParseError> {
        let config: MatrixConfig =
            toml::from_str(toml_str).map_err(|e| ParseError::Config(e.to_string()))?;
        config.to_matrix()
    }

    pub fn to_toml(&self) -> Result<String, ParseError> {
        MatrixConfig::from_matrix(self).to_toml()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use crate::state::State;

    #[test]
    fn parse_toml() {
        let toml_str = "width = 3\nheight = 2\ndata = \"\"\"\n210\n005\n\"\"\"\n";
        let m = Matrix::from_toml(toml_str).unwrap();
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 2);
        assert_eq!(m.get(0, 0), Ok(State::True));
        assert_eq!(m.get(2, 1), Ok(State::Finder));
    }

    #[test]
    fn missing_data_means_init() {
        let m = Matrix::from_toml("width = 2\nheight = 2\n").unwrap();
        assert_eq!(m, Matrix::new(2, 2));
    }

    #[test]
    fn toml_survives_write_and_read() {
        let mut m = Matrix::new(4, 3);
        m.set(3, 2, State::Version).unwrap();
        m.set(0, 1, State::Format).unwrap();
        let text = m.to_toml().unwrap();
        assert_eq!(Matrix::from_toml(&text).unwrap(), m);
    }

    #[test]
    fn oversized_dimensions_are_an_error() {
        assert_eq!(
            Matrix::from_toml("width = 4294967296\nheight = 4294967296\n"),
            Err(ParseError::Matrix(MatrixError::TooLarge {
                width: 1 << 32,
                height: 1 << 32
            }))
        );
        assert!(matches!(
            Matrix::from_toml("width = 9223372036854775807\nheight = 1\n"),
            Err(ParseError::Matrix(MatrixError::TooLarge { .. }))
        ));
        assert!(matches!(
            Matrix::from_toml("width = 9223372036854775807\nheight = 3\ndata = \"012\""),
            Err(ParseError::Matrix(MatrixError::TooLarge { .. }))
        ));
    }

    #[test]
    fn bad_toml_is_config_error() {
        assert!(matches!(
            Matrix::from_toml("width = \"wide\""),
            Err(ParseError::Config(_))
        ));
    }

    #[test]
    fn bad_data_surfaces_parse_error() {
        assert_eq!(
            Matrix::from_toml("width = 2\nheight = 1\ndata = \"07\""),
            Err(ParseError::InvalidChar('7', 1))
        );
    }

    #[test]
    fn state_serializes_as_code() {
        #[derive(Serialize, Deserialize)]
        struct Wrap {
            s: State,
        }
        let text = toml::to_string(&Wrap { s: State::Format }).unwrap();
        assert_eq!(text.trim(), "s = 4");
        let back: Wrap = toml::from_str("s = 5").unwrap();
        assert_eq!(back.s, State::Finder);
        assert!(toml::from_str::<Wrap>("s = 9").is_err());
    }
}
