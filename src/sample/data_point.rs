use std::fmt;
use std::str::FromStr;
use std::collections::HashMap;

use crate::{Error, Result};


/// A value of a binary feature or of the binary class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Binary {
    /// The value `0`. Rows with this value go to the left child.
    Zero,
    /// The value `1`. Rows with this value go to the right child.
    One,
}


impl Binary {
    /// Convert an integer cell into `Binary`.
    /// `column` and `row` are used for the error message only.
    pub(crate) fn from_cell(value: i64, column: &str, row: usize)
        -> Result<Self>
    {
        match value {
            0 => Ok(Binary::Zero),
            1 => Ok(Binary::One),
            _ => Err(Error::NonBinary {
                column: column.to_string(),
                row,
                value: value.to_string(),
            }),
        }
    }
}


impl From<bool> for Binary {
    #[inline]
    fn from(bit: bool) -> Self {
        if bit { Binary::One } else { Binary::Zero }
    }
}


impl FromStr for Binary {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "0" => Ok(Binary::Zero),
            "1" => Ok(Binary::One),
            other => Err(Error::NonBinary {
                column: String::new(),
                row: 0,
                value: other.to_string(),
            }),
        }
    }
}


impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = match self {
            Binary::Zero => "0",
            Binary::One => "1",
        };
        write!(f, "{bit}")
    }
}


/// A single example: binary features keyed by name, and a binary class.
/// `DataPoint` is immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    feature_map: HashMap<String, Binary>,
    class_name: Binary,
}


impl DataPoint {
    /// Construct a new instance of [`DataPoint`].
    pub fn new(feature_map: HashMap<String, Binary>, class_name: Binary)
        -> Self
    {
        Self { feature_map, class_name }
    }


    /// Returns the value of the feature named `name`.
    ///
    /// Panics if the feature does not exist.
    /// [`Sample`](crate::Sample) guarantees that all of its points
    /// share the same feature names.
    #[inline]
    pub fn feature(&self, name: &str) -> Binary {
        match self.feature_map.get(name) {
            Some(value) => *value,
            None => panic!("The feature named `{name}` does not exist"),
        }
    }


    /// Returns the class label.
    #[inline]
    pub fn class_name(&self) -> Binary {
        self.class_name
    }


    /// Returns the feature map.
    #[inline]
    pub fn feature_map(&self) -> &HashMap<String, Binary> {
        &self.feature_map
    }
}
