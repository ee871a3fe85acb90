use super::Opcode;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub struct Function {}

impl Function {
    /// The unary operation for `opcode`, if it is one.
    pub fn for_opcode(opcode: Opcode) -> Option<fn(f64) -> Result<f64>> {
        use Opcode::*;
        match opcode {
            Neg => Some(Function::neg),
            Exp => Some(Function::exp),
            Log => Some(Function::log),
            Log10 => Some(Function::log10),
            Sqr => Some(Function::sqr),
            Sqrt => Some(Function::sqrt),
            Sin => Some(Function::sin),
            Cos => Some(Function::cos),
            Tan => Some(Function::tan),
            Atn => Some(Function::atn),
            Abs => Some(Function::abs),
            Int => Some(Function::int),
            _ => None,
        }
    }

    pub fn neg(n: f64) -> Result<f64> {
        Ok(-n)
    }
    pub fn exp(n: f64) -> Result<f64> {
        Ok(n.exp())
    }
    pub fn log(n: f64) -> Result<f64> {
        if n <= 0.0 {
            return Err(error!(LogOfNonPositive));
        }
        Ok(n.ln())
    }
    pub fn log10(n: f64) -> Result<f64> {
        if n <= 0.0 {
            return Err(error!(LogOfNonPositive));
        }
        Ok(n.log10())
    }
    pub fn sqr(n: f64) -> Result<f64> {
        Ok(n * n)
    }
    pub fn sqrt(n: f64) -> Result<f64> {
        if n < 0.0 {
            return Err(error!(SqrtOfNegative));
        }
        Ok(n.sqrt())
    }
    pub fn sin(n: f64) -> Result<f64> {
        Ok(n.sin())
    }
    pub fn cos(n: f64) -> Result<f64> {
        Ok(n.cos())
    }
    pub fn tan(n: f64) -> Result<f64> {
        Ok(n.tan())
    }
    pub fn atn(n: f64) -> Result<f64> {
        Ok(n.atan())
    }
    pub fn abs(n: f64) -> Result<f64> {
        Ok(n.abs())
    }
    pub fn int(n: f64) -> Result<f64> {
        Ok(n.floor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_domains() {
        assert!(Function::log(0.0).unwrap_err().is(ErrorCode::LogOfNonPositive));
        assert!(Function::log10(-1.0).is_err());
        assert!((Function::log10(1000.0).unwrap() - 3.0).abs() < 1e-12);
        assert!(Function::sqrt(-0.5).unwrap_err().is(ErrorCode::SqrtOfNegative));
        assert_eq!(Function::sqrt(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_int_floors() {
        assert_eq!(Function::int(-3.7).unwrap(), -4.0);
        assert_eq!(Function::int(3.7).unwrap(), 3.0);
    }

    #[test]
    fn test_for_opcode() {
        assert!(Function::for_opcode(Opcode::Sqr).is_some());
        assert!(Function::for_opcode(Opcode::Add).is_none());
        assert!(Function::for_opcode(Opcode::LoadConst).is_none());
    }
}
