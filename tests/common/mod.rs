use parseval::lang::parse;

/// Value of `s` in `x` and `y`, or the text of the first error.
pub fn exec(s: &str, x: f64, y: f64) -> String {
    match parse(s, "x", "y").and_then(|program| program.evaluate(x, y)) {
        Ok(value) => value.to_string(),
        Err(error) => error.to_string(),
    }
}

pub fn value(s: &str, x: f64, y: f64) -> f64 {
    match parse(s, "x", "y").and_then(|program| program.evaluate(x, y)) {
        Ok(value) => value,
        Err(error) => panic!("{} : {}", s, error),
    }
}

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}
