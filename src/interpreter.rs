/// The environment module holds the names an expression may refer to.
///
/// Variables, functions and the equality tolerance are supplied by the caller
/// through a builder and are never changed by evaluation.
pub mod environment;
/// The evaluator module computes the value of a token sequence.
///
/// It runs a shunting-yard loop with an operator stack and a value stack,
/// applying each operator as soon as precedence allows instead of building a
/// tree.
///
/// # Responsibilities
/// - Decides between shifting and reducing from the operator table.
/// - Tracks groups, calls and vector literals as frames on the operator stack.
/// - Reports structural and semantic errors such as unbalanced delimiters or
///   wrong argument counts.
pub mod evaluator;
/// The lexer module tokenizes source code for the evaluator.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// carrying its byte offset. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Resolves unary and binary signs from the preceding token.
/// - Reports lexical errors for invalid characters, malformed numbers, unknown
///   names and misplaced tokens.
pub mod lexer;
/// Precedence, associativity and arity of every operator.
pub mod operator;
/// The value module defines the runtime data types for evaluation.
pub mod value;
