mod common;
use common::*;

#[test]
fn test_precedence() {
    assert_eq!(exec("config dec\nprint 2 + 3 * 4"), "14\n");
    assert_eq!(exec("config dec\nprint ( 2 + 3 ) * 4"), "20\n");
}

#[test]
fn test_left_assoc() {
    assert_eq!(exec("config dec\nprint 10 - 4 - 3"), "3\n");
    assert_eq!(exec("config dec\nprint 3 / 2 * 4"), "6\n");
    assert_eq!(exec("config dec\nprint 3 / ( 2 * 4 )"), "0.375\n");
}

#[test]
fn test_division_keeps_fraction() {
    assert_eq!(exec("config dec\nprint 10 / 4"), "2.5\n");
    assert_eq!(exec("config hex\nprint 10 / 4"), "2.8\n");
    assert_eq!(exec("config bin\nprint 10 / 4"), "10.1\n");
}

#[test]
fn test_decimal_exponent_form() {
    assert_eq!(exec("config dec\nprint 1 / 10000000"), "1e-7\n");
    assert_eq!(exec("config dec\nprint 1 / 1000000"), "0.000001\n");
    assert_eq!(exec("config dec\nprint 1000000000000000000000"), "1e+21\n");
    assert_eq!(
        exec("config dec\nprint 100000000000000000000"),
        "100000000000000000000\n"
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(exec("config dec\nprint 1 / 0"), "Infinity\n");
    assert_eq!(exec("config dec\nprint -1 / 0"), "-Infinity\n");
    assert_eq!(exec("config hex\nprint 0 / 0"), "NaN\n");
}

#[test]
fn test_negative_literals() {
    assert_eq!(exec("config dec\nprint -5 * -5"), "25\n");
    assert_eq!(exec("config hex\nprint 0 - 255"), "-ff\n");
    assert_eq!(exec("config dec\nprint -0"), "0\n");
}

#[test]
fn test_no_unary_negation() {
    assert_eq!(
        exec("config dec\nprint -( 1 + 2 )"),
        "?SYNTAX ERROR IN 2 (6..8); EXPECTED INTEGER OR LEFT PARENTHESIS\n"
    );
}

#[test]
fn test_sum_times_two() {
    for &(a, b) in &[(1i64, 2i64), (-7, 3), (100, -1), (0, 5), (123456, 654321)] {
        let src = format!("config dec\nprint ( {} + {} ) * 2", a, b);
        assert_eq!(exec(&src), format!("{}\n", (a + b) * 2));
        let src = format!("config hex\nprint ( {} + {} ) * 2", a, b);
        let n = (a + b) * 2;
        let hex = if n < 0 {
            format!("-{:x}", -n)
        } else {
            format!("{:x}", n)
        };
        assert_eq!(exec(&src), format!("{}\n", hex));
    }
}
