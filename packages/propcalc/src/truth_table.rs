use std::fmt::Display;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::{
    error::TableError,
    evaluate::{Evaluate, Interpretation, TruthValue},
    proposition::{Proposition, VariableSet},
};

#[derive(Debug, Clone)]
pub struct TruthTable {
    variables: VariableSet,
    rows: Vec<Interpretation>,
    columns: IndexMap<Proposition, Vec<TruthValue>>,
}

impl TruthTable {
    pub fn new(variables: VariableSet) -> Self {
        let rows = Interpretation::generate_all(&variables).collect();

        TruthTable {
            variables,
            rows,
            columns: IndexMap::new(),
        }
    }

    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    pub fn rows(&self) -> &[Interpretation] {
        &self.rows
    }

    // propositions a column has been added for, in addition order
    pub fn propositions(&self) -> impl Iterator<Item = &Proposition> {
        self.columns.keys()
    }

    pub fn add_column(&mut self, proposition: &Proposition) -> Result<(), TableError> {
        for variable in &proposition.variables().0 {
            if !self.variables.0.contains(variable) {
                return Err(TableError::VariableOutsideUniverse {
                    variable: variable.clone(),
                });
            }
        }

        if self.columns.contains_key(proposition) {
            return Ok(());
        }

        let mut values = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            values.push(proposition.evaluate(row)?);
        }
        self.columns.insert(proposition.clone(), values);

        Ok(())
    }

    pub fn column(&self, proposition: &Proposition) -> Result<&[TruthValue], TableError> {
        self.columns
            .get(proposition)
            .map(Vec::as_slice)
            .ok_or_else(|| TableError::MissingColumn {
                proposition: proposition.to_string(),
            })
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut variables = self.variables.0.iter().collect::<Vec<_>>();
        variables.sort();

        let headers = variables
            .iter()
            .map(|variable| variable.to_string())
            .chain(self.columns.keys().map(|proposition| proposition.to_string()))
            .collect::<Vec<_>>();

        writeln!(f, "{}", headers.iter().join(" "))?;

        for (i, row) in self.rows.iter().enumerate() {
            let values = variables
                .iter()
                .map(|&variable| row.0[variable])
                .chain(self.columns.values().map(|values| values[i]));

            let line = headers
                .iter()
                .zip(values)
                .map(|(header, value)| {
                    format!("{:<width$}", value, width = header.chars().count())
                })
                .join(" ");

            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}
