use std::fmt::Display;

use indexmap::IndexSet;
use itertools::Itertools;
use termtree::Tree;

use crate::truth_table::TruthTable;

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PropositionalVariable(String);

impl PropositionalVariable {
    // names are case-insensitive; the lowercase form is the atom's identity
    pub fn new(name: impl AsRef<str>) -> Self {
        PropositionalVariable(name.as_ref().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PropositionalVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct VariableSet(pub IndexSet<PropositionalVariable>);

impl<S: AsRef<str>> FromIterator<S> for VariableSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        VariableSet(iter.into_iter().map(PropositionalVariable::new).collect())
    }
}

impl Display for VariableSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Proposition {
    Constant(bool),
    Atomic(PropositionalVariable),
    Negation(Box<Proposition>),
    Conjunction(Box<Proposition>, Box<Proposition>),
    Disjunction(Box<Proposition>, Box<Proposition>),
    Implication(Box<Proposition>, Box<Proposition>),
    Equivalence(Box<Proposition>, Box<Proposition>),
}

impl From<PropositionalVariable> for Proposition {
    fn from(variable: PropositionalVariable) -> Self {
        Proposition::Atomic(variable)
    }
}

impl Proposition {
    pub fn symbol(&self) -> &str {
        match self {
            Proposition::Constant(true) => "true",
            Proposition::Constant(false) => "false",
            Proposition::Atomic(variable) => variable.as_str(),
            Proposition::Negation(_) => "¬",
            Proposition::Conjunction(_, _) => "∧",
            Proposition::Disjunction(_, _) => "∨",
            Proposition::Implication(_, _) => "→",
            Proposition::Equivalence(_, _) => "↔",
        }
    }

    pub fn variables(&self) -> VariableSet {
        match self {
            Proposition::Constant(_) => VariableSet::default(),
            Proposition::Atomic(variable) => {
                let mut variables = VariableSet::default();
                variables.0.insert(variable.clone());
                variables
            }
            Proposition::Negation(operand) => operand.variables(),
            Proposition::Conjunction(left, right)
            | Proposition::Disjunction(left, right)
            | Proposition::Implication(left, right)
            | Proposition::Equivalence(left, right) => {
                let mut variables = left.variables();
                variables.0.extend(right.variables().0);
                variables
            }
        }
    }

    pub fn get_tree(&self) -> Tree<String> {
        let symbol = self.symbol().to_owned();

        match self {
            Proposition::Constant(_) | Proposition::Atomic(_) => Tree::new(symbol),
            Proposition::Negation(operand) => {
                Tree::new(symbol).with_leaves(vec![operand.get_tree()])
            }
            Proposition::Conjunction(left, right)
            | Proposition::Disjunction(left, right)
            | Proposition::Implication(left, right)
            | Proposition::Equivalence(left, right) => {
                Tree::new(symbol).with_leaves(vec![left.get_tree(), right.get_tree()])
            }
        }
    }

    pub fn truth_table(&self) -> TruthTable {
        let mut truth_table = TruthTable::new(self.variables());
        truth_table
            .add_column(self)
            .expect("a proposition's variables are its own table universe");
        truth_table
    }
}

impl Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Proposition::Constant(value) => write!(f, "{}", value),
            Proposition::Atomic(variable) => write!(f, "{}", variable),
            // A directly nested negation is parenthesized so the canonical
            // form stays parseable (the builder binds ¬ to a single
            // following element).
            Proposition::Negation(operand) => match operand.as_ref() {
                Proposition::Negation(_) => write!(f, "¬({})", operand),
                _ => write!(f, "¬{}", operand),
            },
            Proposition::Conjunction(left, right)
            | Proposition::Disjunction(left, right)
            | Proposition::Implication(left, right)
            | Proposition::Equivalence(left, right) => {
                write!(f, "({} {} {})", left, self.symbol(), right)
            }
        }
    }
}
