/*!

`FunctionSkeleton`, `Function`, `GroundFunction`, and `FunctionExpression` form the numeric-
fluent hierarchy, analogous to `Predicate`/`Atom`/`GroundAtom`/`Literal` but for PDDL's `:fluents`
(cost expressions, metric expressions). Numeric fluents are not part of the applicability check
— the lifted grounder and state repository only ever touch Static/Fluent/Derived atoms — but
`ActionSchema::cost_expression` and `Problem::optimization_metric` reference this hierarchy.

*/

pub mod function_skeleton;
pub mod function;
pub mod ground_function;
pub mod function_expression;

pub use function_skeleton::{FunctionSkeleton, FunctionSkeletonIndex};
pub use function::{Function, FunctionIndex};
pub use ground_function::{GroundFunction, GroundFunctionIndex, NumericFluent};
pub use function_expression::{evaluate, BinaryOperator, FunctionExpression, FunctionExpressionIndex, MultiOperator};
