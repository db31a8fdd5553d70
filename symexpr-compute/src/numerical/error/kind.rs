use ariadne::Fmt;
use symexpr_attrs::ErrorKind;
use symexpr_error::EXPR;

/// The variable is not bound in the evaluation context.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", self.name),
    labels = ["this variable"],
    help = if self.suggestions.is_empty() {
        let call = format!("ctxt.add_var({:?}, <value>)", self.name);
        format!("to define it, bind it in the context: {}", call.fg(EXPR))
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` variable?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these variables? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,

    /// Similarly named variables that are bound in the context, if any.
    pub suggestions: Vec<String>,
}

/// The divisor of a division evaluated to zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot divide by zero",
    labels = ["this division", "this expression evaluated to zero"],
)]
pub struct DivisionByZero;

/// A function was applied to a value outside of its domain.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot take the square root of a negative number",
    labels = ["this function call".to_string(), format!("this expression evaluated to {}", self.value)],
    help = "the square root is only defined for non-negative numbers",
)]
pub struct InvalidDomain {
    /// The value the operand evaluated to.
    pub value: f64,
}
