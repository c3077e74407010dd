pub mod datatype;
pub mod value;

use value::Value;

/// A row is a vector of values, one per schema column, in schema order.
pub type Row = Vec<Value>;
