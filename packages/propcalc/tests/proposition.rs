use propcalc::{
    error::EvaluateError,
    evaluate::{Evaluate, Interpretation, TruthValue},
    parser::parse_proposition,
    proposition::{Proposition, PropositionalVariable},
};

fn parse(input: &str) -> Proposition {
    parse_proposition(input).expect("well formed proposition")
}

#[test]
fn constants_evaluate_to_their_value() {
    let empty = Interpretation::default();

    assert_eq!(
        Proposition::Constant(true).evaluate(&empty),
        Ok(TruthValue(true))
    );
    assert_eq!(
        Proposition::Constant(false).evaluate(&empty),
        Ok(TruthValue(false))
    );
    assert_eq!(
        parse("true & false").evaluate(&empty),
        Ok(TruthValue(false))
    );
}

#[test]
fn variable_lookup_is_case_insensitive() {
    let x = parse("x");

    assert_eq!(
        x.evaluate(&Interpretation::from_iter([("x", true)])),
        Ok(TruthValue(true))
    );
    assert_eq!(
        x.evaluate(&Interpretation::from_iter([("X", false)])),
        Ok(TruthValue(false))
    );
    assert_eq!(
        x.evaluate(&Interpretation::from_iter([
            ("a", false),
            ("x", true),
            ("y", true),
        ])),
        Ok(TruthValue(true))
    );

    let var = parse("var");
    assert_eq!(
        var.evaluate(&Interpretation::from_iter([("VAR", true)])),
        Ok(TruthValue(true))
    );
}

#[test]
fn evaluating_an_unbound_variable_is_an_error() {
    let y = parse("y");

    assert_eq!(
        y.evaluate(&Interpretation::from_iter([("x", true)])),
        Err(EvaluateError::UnboundVariable {
            variable: PropositionalVariable::new("y"),
        })
    );
}

#[test]
fn negation_flips_its_operand() {
    let x = parse("x");
    let not_x = parse("~x");

    for value in [false, true] {
        let interpretation = Interpretation::from_iter([("x", value)]);

        assert_eq!(
            not_x.evaluate(&interpretation).unwrap().0,
            !x.evaluate(&interpretation).unwrap().0,
            "x = {value}"
        );
    }
}

#[test]
fn binary_connectives_follow_their_truth_functions() {
    let test_cases: [(&str, fn(bool, bool) -> bool); 4] = [
        ("x & y", |left, right| left && right),
        ("x || y", |left, right| left || right),
        ("x -> y", |left, right| !left || right),
        ("x <-> y", |left, right| left == right),
    ];

    for (input, truth_function) in test_cases {
        let proposition = parse(input);

        for left in [false, true] {
            for right in [false, true] {
                let interpretation = Interpretation::from_iter([("x", left), ("y", right)]);

                assert_eq!(
                    proposition.evaluate(&interpretation).unwrap().0,
                    truth_function(left, right),
                    "{input} with x = {left}, y = {right}"
                );
            }
        }
    }
}

#[test]
fn evaluates_compound_propositions() {
    let proposition = parse("(x <-> y) & (!y || (x -> z))");

    let test_cases = [
        ((true, true, true), true),
        ((true, true, false), false),
        ((true, false, true), false),
        ((false, true, true), false),
        ((true, false, false), false),
        ((false, true, false), false),
        ((false, false, true), true),
        ((false, false, false), true),
    ];

    for ((x, y, z), expected) in test_cases {
        let interpretation = Interpretation::from_iter([("x", x), ("y", y), ("z", z)]);

        assert_eq!(
            proposition.evaluate(&interpretation).unwrap().0,
            expected,
            "x = {x}, y = {y}, z = {z}"
        );
    }
}

#[test]
fn collects_free_variables_in_first_occurrence_order() {
    let proposition = parse("q -> (p || ~q)");
    let names = proposition
        .variables()
        .0
        .iter()
        .map(|variable| variable.as_str().to_owned())
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["q", "p"]);
    assert!(parse("true & false").variables().0.is_empty());
}

#[test]
fn renders_canonically() {
    let test_cases = [
        ("cat || dog -> pet", "((cat ∨ dog) → pet)"),
        ("~p", "¬p"),
        ("~(p & q)", "¬(p ∧ q)"),
        ("~(~p)", "¬(¬p)"),
        ("P <-> Q", "(p ↔ q)"),
        ("true & false", "(true ∧ false)"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(parse(input).to_string(), expected, "input: {input}");
    }
}

#[test]
fn renders_a_structure_tree() {
    let tree = parse("p -> q").get_tree().to_string();

    assert!(tree.starts_with('→'), "tree: {tree}");
    assert!(tree.contains("├── p"), "tree: {tree}");
    assert!(tree.contains("└── q"), "tree: {tree}");
}
