use std::fmt::Display;

use itertools::Itertools;

use crate::{
    proposition::{Proposition, VariableSet},
    truth_table::TruthTable,
};

#[derive(Debug, Clone)]
pub struct Argument {
    premises: Vec<Proposition>,
    conclusion: Proposition,
    truth_table: TruthTable,
}

impl Argument {
    pub fn new(premises: Vec<Proposition>, conclusion: Proposition) -> Self {
        let mut variables = VariableSet::default();
        for premise in &premises {
            variables.0.extend(premise.variables().0);
        }
        variables.0.extend(conclusion.variables().0);

        let mut truth_table = TruthTable::new(variables);
        for premise in &premises {
            truth_table
                .add_column(premise)
                .expect("the argument universe covers its premises");
        }
        truth_table
            .add_column(&conclusion)
            .expect("the argument universe covers its conclusion");

        Argument {
            premises,
            conclusion,
            truth_table,
        }
    }

    pub fn premises(&self) -> &[Proposition] {
        &self.premises
    }

    pub fn conclusion(&self) -> &Proposition {
        &self.conclusion
    }

    pub fn truth_table(&self) -> &TruthTable {
        &self.truth_table
    }

    // Valid when no row makes every premise true and the conclusion
    // false; never jointly satisfiable premises are vacuously valid.
    pub fn is_valid(&self) -> bool {
        let premise_columns = self
            .premises
            .iter()
            .map(|premise| {
                self.truth_table
                    .column(premise)
                    .expect("premise columns are added at construction")
            })
            .collect::<Vec<_>>();

        let conclusion_column = self
            .truth_table
            .column(&self.conclusion)
            .expect("the conclusion column is added at construction");

        'rows: for (i, value) in conclusion_column.iter().enumerate() {
            for premise_column in &premise_columns {
                if !premise_column[i].0 {
                    continue 'rows;
                }
            }

            if !value.0 {
                return false;
            }
        }

        true
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ⊨ {}",
            self.premises.iter().join(", "),
            self.conclusion
        )
    }
}
