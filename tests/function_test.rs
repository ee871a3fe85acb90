mod common;
use common::*;
use std::f64::consts::{E, PI};

#[test]
fn test_fn_exp_log() {
    assert!(close(value("exp(1)", 0.0, 0.0), E));
    assert!(close(value("log(exp(2))", 0.0, 0.0), 2.0));
    assert!(close(value("ln(x)", E, 0.0), 1.0));
    assert!(close(value("log10(1000)", 0.0, 0.0), 3.0));
    assert_eq!(exec("log(0)", 0.0, 0.0), "LOGARITHM OF NON-POSITIVE VALUE");
    assert_eq!(exec("log10(-x)", 1.0, 0.0), "LOGARITHM OF NON-POSITIVE VALUE");
}

#[test]
fn test_fn_sqr_sqrt() {
    assert_eq!(exec("sqr(3)", 0.0, 0.0), "9");
    assert_eq!(exec("sqrt(16)", 0.0, 0.0), "4");
    assert_eq!(exec("sqrt(sqr(x)+sqr(y))", 3.0, 4.0), "5");
    assert_eq!(exec("sqrt(-1)", 0.0, 0.0), "SQUARE ROOT OF NEGATIVE VALUE");
}

#[test]
fn test_fn_trig() {
    assert_eq!(exec("sin(0)", 0.0, 0.0), "0");
    assert_eq!(exec("cos(0)", 0.0, 0.0), "1");
    assert!(close(value("sin(pi/2)", 0.0, 0.0), 1.0));
    assert!(close(value("tan(π/4)", 0.0, 0.0), 1.0));
    assert!(close(value("atn(1)", 0.0, 0.0), PI / 4.0));
    assert!(close(value("atan(1)*4", 0.0, 0.0), PI));
}

#[test]
fn test_fn_abs_int() {
    assert_eq!(exec("abs(-3)", 0.0, 0.0), "3");
    assert_eq!(exec("abs(x)", 2.5, 0.0), "2.5");
    assert_eq!(exec("int(2.7)", 0.0, 0.0), "2");
    assert_eq!(exec("int(-2.5)", 0.0, 0.0), "-3");
}

#[test]
fn test_pi() {
    assert_eq!(value("pi", 0.0, 0.0), PI);
    assert_eq!(value("π", 0.0, 0.0), PI);
    assert_eq!(value("Pi*2", 0.0, 0.0), PI * 2.0);
}

#[test]
fn test_nested_calls() {
    assert!(close(value("sqrt(abs(int(-16.5)))", 0.0, 0.0), 17f64.sqrt()));
    assert!(close(value("exp(log(x)+log(y))", 3.0, 4.0), 12.0));
}
