/*!

`FunctionExpression` is the numeric-fluent analogue of `Term`/`Atom`: an arithmetic expression
tree over `GroundFunction` leaves, used by `ActionSchema::cost_expression` and by optimization
metrics. Expressions are interned (see `repository::interner`) like every other PDDL term;
multi-operand sums/products are canonicalized by sorting operand indices before hashing (spec
§4.1), so that `(+ a b)` and `(+ b a)` intern to the same node.

*/

use crate::abstractions::{error::ArithmeticError, HashMap, Index};
use crate::core::function::ground_function::GroundFunctionIndex;

pub type FunctionExpressionIndex = Index;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOperator {
  Add,
  Subtract,
  Multiply,
  Divide,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MultiOperator {
  Sum,
  Product,
}

/// Numeric literals are stored as their IEEE-754 bit pattern so that `FunctionExpression`
/// derives `Eq`/`Hash` (required for interning) without pulling in a total-order float
/// newtype crate the teacher doesn't already depend on.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum FunctionExpression {
  Number(u64),
  BinaryOp { operator: BinaryOperator, lhs: FunctionExpressionIndex, rhs: FunctionExpressionIndex },
  MultiOp { operator: MultiOperator, operands: Vec<FunctionExpressionIndex> },
  Minus(FunctionExpressionIndex),
  FunctionRef(GroundFunctionIndex),
}

impl FunctionExpression {
  pub fn number(value: f64) -> Self {
    FunctionExpression::Number(value.to_bits())
  }
}

/// Evaluates a `FunctionExpression` DAG against a table of `GroundFunction` values (the
/// problem's `NumericFluent` initial assignments, or a later-updated copy of them).
pub fn evaluate(
  root: FunctionExpressionIndex,
  expressions: &[FunctionExpression],
  function_values: &HashMap<GroundFunctionIndex, f64>,
) -> Result<f64, ArithmeticError> {
  match &expressions[root.as_usize()] {
    FunctionExpression::Number(bits) => Ok(f64::from_bits(*bits)),

    FunctionExpression::FunctionRef(function) => function_values
      .get(function)
      .copied()
      .ok_or(ArithmeticError::UndefinedOperator { operator: "undefined ground function".to_string() }),

    FunctionExpression::Minus(operand) => {
      Ok(-evaluate(*operand, expressions, function_values)?)
    }

    FunctionExpression::BinaryOp { operator, lhs, rhs } => {
      let lhs = evaluate(*lhs, expressions, function_values)?;
      let rhs = evaluate(*rhs, expressions, function_values)?;
      match operator {
        BinaryOperator::Add => Ok(lhs + rhs),
        BinaryOperator::Subtract => Ok(lhs - rhs),
        BinaryOperator::Multiply => Ok(lhs * rhs),
        BinaryOperator::Divide => {
          if rhs == 0.0 {
            Err(ArithmeticError::DivisionByZero)
          } else {
            Ok(lhs / rhs)
          }
        }
      }
    }

    FunctionExpression::MultiOp { operator, operands } => {
      let mut values = Vec::with_capacity(operands.len());
      for operand in operands {
        values.push(evaluate(*operand, expressions, function_values)?);
      }
      match operator {
        MultiOperator::Sum => Ok(values.into_iter().sum()),
        MultiOperator::Product => Ok(values.into_iter().product()),
      }
    }
  }
}
