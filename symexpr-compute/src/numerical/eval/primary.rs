use crate::numerical::{ctxt::Ctxt, error::{kind::UndefinedVariable, Error}};

/// Looks up the value bound to a variable.
pub(super) fn eval_var(name: &str, ctxt: &Ctxt) -> Result<f64, Error> {
    ctxt.get_var(name).ok_or_else(|| Error::new(vec![0..name.len()], UndefinedVariable {
        name: name.to_string(),
        suggestions: ctxt.get_similar_vars(name)
            .into_iter()
            .map(ToString::to_string)
            .collect(),
    }))
}
