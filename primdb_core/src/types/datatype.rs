use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
    Str,
    Bool,
}

impl DataType {
    /// Lowercase name used in column specs, the catalog file, and `info`.
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Str => "str",
            DataType::Bool => "bool",
        }
    }
}

pub fn parse_datatype(s: &str) -> Result<DataType, Error> {
    match s.to_lowercase().as_str() {
        "int" => Ok(DataType::Int),
        "str" => Ok(DataType::Str),
        "bool" => Ok(DataType::Bool),
        other => Err(Error::InvalidColumnSpec(other.to_string())),
    }
}
