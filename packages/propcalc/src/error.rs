use derive_more::derive::{Display, Error};

use crate::proposition::PropositionalVariable;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    #[display("invalid symbol in proposition: {text:?}")]
    InvalidSymbol { text: String },
    #[display("mismatched parentheses in proposition")]
    MismatchedParentheses,
    #[display("malformed proposition")]
    MalformedProposition,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EvaluateError {
    #[display("no value assigned to variable {variable}")]
    UnboundVariable { variable: PropositionalVariable },
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum TableError {
    #[display("proposition references variable {variable} outside the table universe")]
    VariableOutsideUniverse { variable: PropositionalVariable },
    #[display("no column for proposition {proposition}")]
    MissingColumn { proposition: String },
}

impl From<EvaluateError> for TableError {
    fn from(error: EvaluateError) -> Self {
        match error {
            EvaluateError::UnboundVariable { variable } => {
                TableError::VariableOutsideUniverse { variable }
            }
        }
    }
}
