use std::fmt::Display;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Value {
    Integer(i64),
    Real(f64),
}

impl Value {
    pub fn as_real(&self) -> f64 {
        match *self {
            Value::Integer(value) => value as f64,
            Value::Real(value) => value,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            // {:?} keeps the decimal point on whole reals, so 11.0 does not
            // print the same as the integer 11
            Value::Real(value) => write!(f, "{:?}", value),
        }
    }
}
