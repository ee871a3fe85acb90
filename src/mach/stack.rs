use crate::error;
use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow: ErrorCode,
    max_len: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            overflow: self.overflow,
            max_len: self.max_len,
            vec: self.vec.clone(),
        }
    }
}

impl<T> Stack<T> {
    pub fn new(max_len: usize, overflow: ErrorCode) -> Stack<T> {
        Stack {
            overflow,
            max_len,
            vec: vec![],
        }
    }
    pub fn from_vec(vec: Vec<T>, overflow: ErrorCode) -> Stack<T> {
        Stack {
            overflow,
            max_len: vec.len(),
            vec,
        }
    }
    fn underflow_error(&self) -> Error {
        error!(InternalError; "STACK UNDERFLOW")
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.max_len
    }
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.vec.get(idx)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::new(self.overflow));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    pub fn last_mut(&mut self) -> Result<&mut T> {
        match self.vec.last_mut() {
            Some(v) => Ok(v),
            None => Err(error!(InternalError; "STACK UNDERFLOW")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_to_capacity() {
        let mut stack: Stack<u16> = Stack::new(2, ErrorCode::ExpressionTooLong);
        assert!(stack.push(1).is_ok());
        assert!(stack.push(2).is_ok());
        assert!(stack.is_full());
        let error = stack.push(3).unwrap_err();
        assert!(error.is(ErrorCode::ExpressionTooLong));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_underflow() {
        let mut stack: Stack<f64> = Stack::new(4, ErrorCode::InternalError);
        stack.push(1.5).unwrap();
        assert!(stack.pop_2().is_err());
        assert!(stack.last_mut().is_err());
        assert!(stack.pop().is_err());
    }

    #[test]
    fn test_pop_2_order() {
        let mut stack: Stack<f64> = Stack::new(4, ErrorCode::InternalError);
        stack.push(8.0).unwrap();
        stack.push(2.0).unwrap();
        assert_eq!(stack.pop_2().unwrap(), (8.0, 2.0));
    }
}
