//! Two-stack evaluation of fully parenthesized arithmetic.

use thiserror::Error;

use crate::ResizingStack;

/// A token sequence that is not a fully parenthesized expression.
#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    /// A token that is neither an operator, a parenthesis, nor a number.
    #[error("unrecognized token {token:?}")]
    InvalidToken { token: String },
    /// An operand or operator was missing where a subexpression closed,
    /// or the expression left no value behind.
    #[error("operand or operator missing")]
    MalformedExpression,
}

#[derive(Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
            Op::Div => a / b,
        }
    }
}

/// Evaluate a fully parenthesized arithmetic expression, one token per
/// slice element.
///
/// Values and operators each get their own [`ResizingStack`]. Numbers
/// and operators are pushed as they arrive, opening parentheses are
/// ignored, and every closing parenthesis pops one operator and two
/// operands and pushes the result; the value left at the end is the
/// answer. No precedence is needed because the parentheses make every
/// grouping explicit.
///
/// # Examples
///
/// ```
/// use algo_collections::evaluate;
///
/// let tokens = ["(", "1", "+", "(", "(", "2", "+", "3", ")",
///               "*", "(", "4", "*", "5", ")", ")", ")"];
/// assert_eq!(evaluate(&tokens), Ok(101.0));
/// ```
pub fn evaluate(tokens: &[&str]) -> Result<f64, EvalError> {
    let mut values: ResizingStack<f64> = ResizingStack::new();
    let mut operators: ResizingStack<Op> = ResizingStack::new();

    for &token in tokens {
        match token {
            "(" => {}
            "+" => operators.push(Op::Add),
            "-" => operators.push(Op::Sub),
            "*" => operators.push(Op::Mul),
            "/" => operators.push(Op::Div),
            ")" => {
                let b = values.pop().ok_or(EvalError::MalformedExpression)?;
                let a = values.pop().ok_or(EvalError::MalformedExpression)?;
                let op = operators.pop().ok_or(EvalError::MalformedExpression)?;
                values.push(op.apply(a, b));
            }
            _ => {
                let value = token.parse::<f64>().map_err(|_| EvalError::InvalidToken {
                    token: token.to_string(),
                })?;
                values.push(value);
            }
        }
    }

    values.pop().ok_or(EvalError::MalformedExpression)
}
