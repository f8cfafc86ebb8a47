use crate::domain::model::{Number, Operation, Value};
use crate::utils::error::{CalcError, Result};
use tracing::debug;

/// Four-function calculator with strict operand type checks.
///
/// The `Value` methods reject anything that is not an integer or a float
/// (booleans count as 0 and 1) before doing any arithmetic. [`Calculator::compute`] takes already typed
/// `Number`s and skips the check.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: &Value, b: &Value) -> Result<Number> {
        self.apply(Operation::Add, a, b)
    }

    pub fn subtract(&self, a: &Value, b: &Value) -> Result<Number> {
        self.apply(Operation::Subtract, a, b)
    }

    pub fn multiply(&self, a: &Value, b: &Value) -> Result<Number> {
        self.apply(Operation::Multiply, a, b)
    }

    /// True division: the result is always a float.
    pub fn divide(&self, a: &Value, b: &Value) -> Result<Number> {
        self.apply(Operation::Divide, a, b)
    }

    pub fn apply(&self, op: Operation, a: &Value, b: &Value) -> Result<Number> {
        let lhs = check_input_type(a)?;
        let rhs = check_input_type(b)?;
        self.compute(op, lhs, rhs)
    }

    pub fn compute(&self, op: Operation, a: Number, b: Number) -> Result<Number> {
        let result = match op {
            Operation::Add => int_or_float(op, a, b, i64::checked_add, |x, y| x + y),
            Operation::Subtract => int_or_float(op, a, b, i64::checked_sub, |x, y| x - y),
            Operation::Multiply => int_or_float(op, a, b, i64::checked_mul, |x, y| x * y),
            Operation::Divide => {
                if b.is_zero() {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(Number::Float(a.as_f64() / b.as_f64()))
                }
            }
        }?;

        debug!("{} {} {} = {}", a, op.symbol(), b, result);
        Ok(result)
    }
}

/// Fails with `InvalidType` unless the value is an integer, a float or a boolean.
pub fn check_input_type(value: &Value) -> Result<Number> {
    value.as_number().ok_or_else(|| CalcError::InvalidType {
        value: value.to_string(),
        type_name: value.type_name(),
    })
}

fn int_or_float(
    op: Operation,
    a: Number,
    b: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Number> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => {
            int_op(x, y)
                .map(Number::Int)
                .ok_or_else(|| CalcError::Overflow {
                    operation: op.to_string(),
                })
        }
        _ => Ok(Number::Float(float_op(a.as_f64(), b.as_f64()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_operations_stay_int() {
        let calc = Calculator::new();
        assert_eq!(calc.add(&Value::Int(2), &Value::Int(6)).unwrap(), Number::Int(8));
        assert_eq!(calc.subtract(&Value::Int(2), &Value::Int(6)).unwrap(), Number::Int(-4));
        assert_eq!(calc.multiply(&Value::Int(2), &Value::Int(6)).unwrap(), Number::Int(12));
    }

    #[test]
    fn test_mixed_operands_promote_to_float() {
        let calc = Calculator::new();
        assert_eq!(
            calc.add(&Value::Int(1), &Value::Float(0.5)).unwrap(),
            Number::Float(1.5)
        );
    }

    #[test]
    fn test_divide_is_true_division() {
        let calc = Calculator::new();
        assert_eq!(calc.divide(&Value::Int(1), &Value::Int(2)).unwrap(), Number::Float(0.5));
        assert_eq!(calc.divide(&Value::Int(6), &Value::Int(3)).unwrap(), Number::Float(2.0));
    }

    #[test]
    fn test_divide_by_zero() {
        let calc = Calculator::new();
        assert!(matches!(
            calc.divide(&Value::Int(1), &Value::Int(0)),
            Err(CalcError::DivisionByZero)
        ));
        assert!(matches!(
            calc.divide(&Value::Float(1.0), &Value::Float(-0.0)),
            Err(CalcError::DivisionByZero)
        ));
    }

    #[test]
    fn test_integer_overflow() {
        let calc = Calculator::new();
        let err = calc
            .multiply(&Value::Int(i64::MAX), &Value::Int(2))
            .unwrap_err();
        assert!(matches!(err, CalcError::Overflow { ref operation } if operation == "multiply"));
    }

    #[test]
    fn test_left_operand_checked_first() {
        let calc = Calculator::new();
        let err = calc.add(&Value::from("2"), &Value::from(vec!["6"])).unwrap_err();
        match err {
            CalcError::InvalidType { type_name, .. } => assert_eq!(type_name, "string"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_type_check_runs_before_zero_check() {
        let calc = Calculator::new();
        assert!(matches!(
            calc.divide(&Value::Null, &Value::Int(0)),
            Err(CalcError::InvalidType { .. })
        ));
    }
}
