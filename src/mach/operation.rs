use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: f64, rhs: f64) -> Result<f64> {
        Ok(lhs + rhs)
    }

    pub fn subtract(lhs: f64, rhs: f64) -> Result<f64> {
        Ok(lhs - rhs)
    }

    pub fn multiply(lhs: f64, rhs: f64) -> Result<f64> {
        Ok(lhs * rhs)
    }

    pub fn divide(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(lhs / rhs)
    }

    /// A negative base only takes whole exponents; anything else would be
    /// a complex number.
    pub fn power(lhs: f64, rhs: f64) -> Result<f64> {
        if lhs < 0.0 && rhs != rhs.floor() {
            return Err(error!(ComplexPower));
        }
        Ok(lhs.powf(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_divide() {
        assert_eq!(Operation::divide(1.5, 0.5).unwrap(), 3.0);
        assert!(Operation::divide(1.0, 0.0)
            .unwrap_err()
            .is(ErrorCode::DivisionByZero));
        assert!(Operation::divide(0.0, -0.0).is_err());
    }

    #[test]
    fn test_power() {
        assert_eq!(Operation::power(2.0, 10.0).unwrap(), 1024.0);
        assert_eq!(Operation::power(-8.0, 3.0).unwrap(), -512.0);
        assert_eq!(Operation::power(-2.0, -1.0).unwrap(), -0.5);
        assert!(Operation::power(-8.0, 0.5)
            .unwrap_err()
            .is(ErrorCode::ComplexPower));
        assert!((Operation::power(8.0, 1.0 / 3.0).unwrap() - 2.0).abs() < 1e-12);
    }
}
