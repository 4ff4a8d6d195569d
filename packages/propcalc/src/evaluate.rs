use std::fmt::Display;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::{
    error::EvaluateError,
    proposition::{Proposition, PropositionalVariable, VariableSet},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TruthValue(pub bool);

impl Display for TruthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", if self.0 { "T" } else { "F" })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpretation(pub IndexMap<PropositionalVariable, TruthValue>);

impl Interpretation {
    pub fn set(&mut self, name: impl AsRef<str>, value: bool) {
        self.0
            .insert(PropositionalVariable::new(name), TruthValue(value));
    }

    pub fn get(&self, variable: &PropositionalVariable) -> Option<TruthValue> {
        self.0.get(variable).copied()
    }

    // Row i maps the n-bit binary form of i onto the variables, first
    // variable on the most significant bit.
    pub fn generate_all(variables: &VariableSet) -> impl Iterator<Item = Interpretation> + '_ {
        let n = variables.0.len();

        (0..1usize << n).map(move |row| {
            let mut interpretation = Interpretation::default();
            for (position, variable) in variables.0.iter().enumerate() {
                let value = row >> (n - 1 - position) & 1 == 1;
                interpretation
                    .0
                    .insert(variable.clone(), TruthValue(value));
            }
            interpretation
        })
    }
}

impl<S: AsRef<str>> FromIterator<(S, bool)> for Interpretation {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Interpretation(
            iter.into_iter()
                .map(|(name, value)| (PropositionalVariable::new(name), TruthValue(value)))
                .collect(),
        )
    }
}

impl Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let assignments = self
            .0
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(variable, value)| {
                let prefix = if value.0 { "" } else { "¬" };
                format!("{prefix}{variable}")
            })
            .join(", ");

        write!(f, "{{{}}}", assignments)
    }
}

pub trait Evaluate {
    fn evaluate(&self, interpretation: &Interpretation) -> Result<TruthValue, EvaluateError>;
}

impl Evaluate for PropositionalVariable {
    fn evaluate(&self, interpretation: &Interpretation) -> Result<TruthValue, EvaluateError> {
        interpretation
            .get(self)
            .ok_or_else(|| EvaluateError::UnboundVariable {
                variable: self.clone(),
            })
    }
}

impl Evaluate for Proposition {
    fn evaluate(&self, interpretation: &Interpretation) -> Result<TruthValue, EvaluateError> {
        let value = match self {
            Proposition::Constant(value) => *value,
            Proposition::Atomic(variable) => variable.evaluate(interpretation)?.0,
            Proposition::Negation(operand) => !operand.evaluate(interpretation)?.0,
            Proposition::Conjunction(left, right) => {
                let left = left.evaluate(interpretation)?.0;
                let right = right.evaluate(interpretation)?.0;
                left && right
            }
            Proposition::Disjunction(left, right) => {
                let left = left.evaluate(interpretation)?.0;
                let right = right.evaluate(interpretation)?.0;
                left || right
            }
            Proposition::Implication(left, right) => {
                let left = left.evaluate(interpretation)?.0;
                let right = right.evaluate(interpretation)?.0;
                !left || right
            }
            Proposition::Equivalence(left, right) => {
                let left = left.evaluate(interpretation)?.0;
                let right = right.evaluate(interpretation)?.0;
                left == right
            }
        };

        Ok(TruthValue(value))
    }
}
