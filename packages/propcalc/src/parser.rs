use enum_as_inner::EnumAsInner;

use crate::{
    error::ParseError,
    proposition::{Proposition, PropositionalVariable},
    symbol::{tokenize, Symbol, SymbolKind},
};

// Work-list entry: a raw symbol, or a span already reduced to a
// sub-proposition by an earlier pass.
#[derive(Debug, Clone, EnumAsInner)]
enum Element {
    Symbol(Symbol),
    Proposition(Proposition),
}

type BinaryConstructor = fn(Box<Proposition>, Box<Proposition>) -> Proposition;

// binary reduction passes, tightest precedence first
const BINARY_PASSES: [(SymbolKind, BinaryConstructor); 4] = [
    (SymbolKind::Conjunction, Proposition::Conjunction),
    (SymbolKind::Disjunction, Proposition::Disjunction),
    (SymbolKind::Implication, Proposition::Implication),
    (SymbolKind::Equivalence, Proposition::Equivalence),
];

pub fn parse_proposition(input: &str) -> Result<Proposition, ParseError> {
    let symbols = tokenize(input)?;
    build_proposition(symbols.into_iter().map(Element::Symbol).collect())
}

fn build_proposition(mut elements: Vec<Element>) -> Result<Proposition, ParseError> {
    if elements.len() != 1 {
        elements = group_parentheses(elements)?;
        elements = bind_negations(elements)?;
        for (kind, constructor) in BINARY_PASSES {
            elements = combine_binary(elements, kind, constructor)?;
        }
    }

    if elements.len() != 1 {
        return Err(ParseError::MalformedProposition);
    }

    into_proposition(elements.remove(0))
}

fn into_proposition(element: Element) -> Result<Proposition, ParseError> {
    match element {
        Element::Proposition(proposition) => Ok(proposition),
        Element::Symbol(symbol) => match symbol.kind {
            SymbolKind::VariableName => Ok(PropositionalVariable::new(&symbol.text).into()),
            SymbolKind::ConstantTrue => Ok(Proposition::Constant(true)),
            SymbolKind::ConstantFalse => Ok(Proposition::Constant(false)),
            _ => Err(ParseError::MalformedProposition),
        },
    }
}

fn group_parentheses(elements: Vec<Element>) -> Result<Vec<Element>, ParseError> {
    let mut grouped = Vec::new();
    let mut elements = elements.into_iter();

    while let Some(element) = elements.next() {
        match element.as_symbol().map(|symbol| symbol.kind) {
            Some(SymbolKind::OpenParenthesis) => {
                let mut depth = 1usize;
                let mut inner = Vec::new();

                for element in elements.by_ref() {
                    match element.as_symbol().map(|symbol| symbol.kind) {
                        Some(SymbolKind::OpenParenthesis) => depth += 1,
                        Some(SymbolKind::CloseParenthesis) => {
                            depth -= 1;
                            // The matching close parenthesis is consumed,
                            // not kept.
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                    inner.push(element);
                }

                if depth != 0 {
                    return Err(ParseError::MismatchedParentheses);
                }

                grouped.push(Element::Proposition(build_proposition(inner)?));
            }
            Some(SymbolKind::CloseParenthesis) => {
                return Err(ParseError::MismatchedParentheses);
            }
            _ => grouped.push(element),
        }
    }

    Ok(grouped)
}

fn bind_negations(elements: Vec<Element>) -> Result<Vec<Element>, ParseError> {
    let mut bound = Vec::new();
    let mut elements = elements.into_iter();

    while let Some(element) = elements.next() {
        match element.as_symbol().map(|symbol| symbol.kind) {
            Some(SymbolKind::Negation) => {
                let operand = elements.next().ok_or(ParseError::MalformedProposition)?;
                bound.push(Element::Proposition(Proposition::Negation(Box::new(
                    into_proposition(operand)?,
                ))));
            }
            _ => bound.push(element),
        }
    }

    Ok(bound)
}

fn combine_binary(
    elements: Vec<Element>,
    kind: SymbolKind,
    constructor: BinaryConstructor,
) -> Result<Vec<Element>, ParseError> {
    let mut combined = Vec::new();
    let mut elements = elements.into_iter().peekable();

    while let Some(mut current) = elements.next() {
        // The combined node stays current, so a chain of same-level
        // operators reduces left-associatively in a single pass.
        while elements
            .peek()
            .and_then(Element::as_symbol)
            .is_some_and(|symbol| symbol.kind == kind)
        {
            elements.next();
            let operand = elements.next().ok_or(ParseError::MalformedProposition)?;

            current = Element::Proposition(constructor(
                Box::new(into_proposition(current)?),
                Box::new(into_proposition(operand)?),
            ));
        }

        combined.push(current);
    }

    Ok(combined)
}
