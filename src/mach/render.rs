use crate::lang::ast::Radix;

// Binary doubles have at most 1074 fractional bits.
const MAX_FRACTION_DIGITS: usize = 1100;

/// Renders a printed value as text in the given base.
///
/// Non-decimal bases write the sign, the integer digits and, for fractional
/// values, the complete expansion of the fraction. Both bases are powers of
/// two so every step of the conversion is exact.
pub fn render(value: f64, radix: Radix) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    match radix {
        Radix::Decimal => decimal(value),
        Radix::Hexadecimal | Radix::Binary => power_of_two(value, radix.base()),
    }
}

/// Shortest round-trip digits, switching to exponent form outside
/// `1e-7 < |value| < 1e21`.
fn decimal(value: f64) -> String {
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };
    if (-6..21).contains(&exponent) {
        format!("{}", value)
    } else if exponent < 0 {
        format!("{}e{}", mantissa, exponent)
    } else {
        format!("{}e+{}", mantissa, exponent)
    }
}

fn power_of_two(value: f64, base: u32) -> String {
    debug_assert!(base.is_power_of_two());
    let radix = f64::from(base);
    let magnitude = value.abs();
    let mut int = magnitude.trunc();
    let mut frac = magnitude - int;

    let mut digits: Vec<u32> = vec![];
    loop {
        let digit = int % radix;
        digits.push(digit as u32);
        int = (int - digit) / radix;
        if int == 0.0 {
            break;
        }
    }

    let mut s = String::new();
    if value < 0.0 {
        s.push('-');
    }
    s.extend(
        digits
            .iter()
            .rev()
            .filter_map(|d| std::char::from_digit(*d, base)),
    );
    if frac > 0.0 {
        s.push('.');
        let mut count = 0;
        while frac > 0.0 && count < MAX_FRACTION_DIGITS {
            frac *= radix;
            let digit = frac.trunc();
            if let Some(ch) = std::char::from_digit(digit as u32, base) {
                s.push(ch);
            }
            frac -= digit;
            count += 1;
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(render(5.0, Radix::Decimal), "5");
        assert_eq!(render(-42.0, Radix::Decimal), "-42");
        assert_eq!(render(2.5, Radix::Decimal), "2.5");
        assert_eq!(render(-0.0, Radix::Decimal), "0");
        assert_eq!(render(0.000001, Radix::Decimal), "0.000001");
        assert_eq!(render(1e-7, Radix::Decimal), "1e-7");
        assert_eq!(render(-2.5e-8, Radix::Decimal), "-2.5e-8");
        assert_eq!(render(123456789012345680000.0, Radix::Decimal), "123456789012345680000");
        assert_eq!(render(1e21, Radix::Decimal), "1e+21");
        assert_eq!(render(-1.5e300, Radix::Decimal), "-1.5e+300");
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(render(255.0, Radix::Hexadecimal), "ff");
        assert_eq!(render(-255.0, Radix::Hexadecimal), "-ff");
        assert_eq!(render(4096.0, Radix::Hexadecimal), "1000");
        assert_eq!(render(2.5, Radix::Hexadecimal), "2.8");
        assert_eq!(render(0.0, Radix::Hexadecimal), "0");
    }

    #[test]
    fn test_binary() {
        assert_eq!(render(255.0, Radix::Binary), "11111111");
        assert_eq!(render(1.0, Radix::Binary), "1");
        assert_eq!(render(-6.0, Radix::Binary), "-110");
        assert_eq!(render(0.75, Radix::Binary), "0.11");
    }

    #[test]
    fn test_large_integers() {
        assert_eq!(render(2f64.powi(60), Radix::Hexadecimal), "1000000000000000");
        assert_eq!(
            render(2f64.powi(70), Radix::Binary),
            format!("1{}", "0".repeat(70))
        );
    }

    #[test]
    fn test_specials() {
        assert_eq!(render(f64::INFINITY, Radix::Binary), "Infinity");
        assert_eq!(render(f64::NEG_INFINITY, Radix::Decimal), "-Infinity");
        assert_eq!(render(f64::NAN, Radix::Hexadecimal), "NaN");
    }

    #[test]
    fn test_fraction_terminates() {
        let s = render(1.0 / 3.0, Radix::Binary);
        assert!(s.starts_with("0.0101010101"));
        assert!(s.len() < MAX_FRACTION_DIGITS);
    }
}
