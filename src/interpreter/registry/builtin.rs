use crate::{error::EvalError, interpreter::evaluator::EvalResult};

/// Checks that a builtin received exactly `expected` arguments.
///
/// The translator always passes the registered argument count, so this only
/// trips when a custom registry registers a builtin with the wrong arity.
fn check_arity(name: &str, args: &[f64], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        return Ok(());
    }
    Err(EvalError::InvalidArgument { name:    name.to_string(),
                                     details: format!("expected {expected} argument(s), found {}",
                                                      args.len()), })
}

fn invalid(name: &str, details: String) -> EvalError {
    EvalError::InvalidArgument { name: name.to_string(),
                                 details }
}

/// Applies a real function of one argument that is defined everywhere.
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[f64]) -> EvalResult<f64> {
            check_arity(stringify!($fname), args, 1)?;
            Ok(args[0].$real_fn())
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(atan, atan);
real_builtin!(sinh, sinh);
real_builtin!(cosh, cosh);
real_builtin!(tanh, tanh);
real_builtin!(exp, exp);
real_builtin!(abs, abs);
real_builtin!(floor, floor);
real_builtin!(ceil, ceil);
real_builtin!(round, round);
real_builtin!(radians, to_radians);
real_builtin!(degrees, to_degrees);

/// Applies a real function of one argument whose domain is restricted.
///
/// `$valid` is a predicate on the argument and `$domain` describes the domain
/// in the error message.
macro_rules! checked_builtin {
    ($fname:ident, $real_fn:ident, $valid:expr, $domain:literal) => {
        pub fn $fname(args: &[f64]) -> EvalResult<f64> {
            check_arity(stringify!($fname), args, 1)?;
            let x = args[0];
            let valid: fn(f64) -> bool = $valid;
            if !valid(x) {
                return Err(invalid(stringify!($fname), format!("{x} is outside {}", $domain)));
            }
            Ok(x.$real_fn())
        }
    };
}

checked_builtin!(sqrt, sqrt, |x| x >= 0.0, "[0, inf)");
checked_builtin!(ln, ln, |x| x > 0.0, "(0, inf)");
checked_builtin!(log10, log10, |x| x > 0.0, "(0, inf)");
checked_builtin!(asin, asin, |x| (-1.0..=1.0).contains(&x), "[-1, 1]");
checked_builtin!(acos, acos, |x| (-1.0..=1.0).contains(&x), "[-1, 1]");

/// Returns `-1`, `0` or `1` according to the sign of the argument.
///
/// Unlike [`f64::signum`], zero maps to zero.
///
/// # Example
/// ```
/// use shunt::interpreter::registry::builtin::sign;
///
/// assert_eq!(sign(&[-42.0]).unwrap(), -1.0);
/// assert_eq!(sign(&[0.0]).unwrap(), 0.0);
/// ```
pub fn sign(args: &[f64]) -> EvalResult<f64> {
    check_arity("sign", args, 1)?;
    let x = args[0];
    Ok(if x == 0.0 { 0.0 } else { x.signum() })
}

/// Logarithm of `args[0]` in base `args[1]`.
///
/// # Example
/// ```
/// use shunt::interpreter::registry::builtin::log;
///
/// assert!((log(&[8.0, 2.0]).unwrap() - 3.0).abs() < 1e-12);
/// assert!(log(&[8.0, 1.0]).is_err());
/// ```
pub fn log(args: &[f64]) -> EvalResult<f64> {
    check_arity("log", args, 2)?;
    let (x, base) = (args[0], args[1]);
    if x <= 0.0 {
        return Err(invalid("log", format!("{x} is outside (0, inf)")));
    }
    if base <= 0.0 || base == 1.0 {
        return Err(invalid("log", format!("base {base} must be positive and not 1")));
    }
    Ok(x.log(base))
}

/// Four-quadrant arctangent of `y / x`, called as `atan2(y, x)`.
pub fn atan2(args: &[f64]) -> EvalResult<f64> {
    check_arity("atan2", args, 2)?;
    Ok(args[0].atan2(args[1]))
}

/// The smaller of two arguments.
pub fn min(args: &[f64]) -> EvalResult<f64> {
    check_arity("min", args, 2)?;
    Ok(args[0].min(args[1]))
}

/// The larger of two arguments.
pub fn max(args: &[f64]) -> EvalResult<f64> {
    check_arity("max", args, 2)?;
    Ok(args[0].max(args[1]))
}

/// Unary `-`.
pub fn negate(x: f64) -> EvalResult<f64> {
    Ok(-x)
}

/// Unary `+`.
pub fn identity(x: f64) -> EvalResult<f64> {
    Ok(x)
}

/// Binary `+`.
pub fn add(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left + right)
}

/// Binary `-`.
pub fn subtract(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left - right)
}

/// Binary `*`.
pub fn multiply(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left * right)
}

/// Binary `/`. Division by exact zero is an error, never an infinity.
pub fn divide(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(left / right)
}

/// Binary `%`, with the sign of the left operand.
pub fn remainder(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(left % right)
}

/// Binary `^`.
///
/// A negative base with a fractional exponent has no real result and is
/// reported instead of returning NaN.
pub fn power(base: f64, exponent: f64) -> EvalResult<f64> {
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(invalid("^", format!("{base} raised to fractional power {exponent}")));
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(base.powf(exponent))
}
