//! Key selector parsing/resolution and query configuration.

mod test_data_gen;

use seqquery::prelude::*;
use seqquery::seqquery_core::Error;
use serde_json::json;
use test_data_gen::{people, rows};

#[test]
fn test_parse_accepts_accessor_paths() {
    let cases = [
        ("x => x.id", KeySelector::field("id")),
        ("(row) => row.address.city", KeySelector::field("city")),
        ("p.age", KeySelector::field("age")),
        ("x => x", KeySelector::identity()),
        ("value", KeySelector::identity()),
        ("  item =>  item.total ; ", KeySelector::field("total")),
    ];
    for (text, expected) in cases {
        assert_eq!(KeySelector::parse(text).unwrap(), expected, "parsing '{}'", text);
    }

    let parsed: KeySelector = "o => o.name".parse().unwrap();
    assert_eq!(parsed.field_name(), Some("name"));
    assert_eq!(parsed.to_string(), "x => x.name");
}

#[test]
fn test_parse_rejects_malformed_accessors() {
    for text in ["", "x =>", "x => y", "x => y.id", "x => x.", "x => x[0]", "x => x.id + 1", "1x => 1x.a"] {
        assert!(
            matches!(KeySelector::parse(text), Err(OpError::MalformedSelector(_))),
            "'{}' should be malformed",
            text
        );
    }
}

#[test]
fn test_resolution_errors_surface_through_operators() {
    let ps = people();
    let err = ps.order_by(&KeySelector::parse("p => p.height").unwrap()).unwrap_err();
    assert!(err.to_string().contains("height"));
    assert!(err.to_string().contains("'name'"));

    assert!(matches!(
        ps.group_by(&KeySelector::identity()),
        Err(OpError::MalformedSelector(_))
    ));
}

#[test]
fn test_resolution_only_checks_the_first_element() {
    // Later elements lacking the field read it as null.
    let seq = rows(json!([{ "v": 2 }, { "w": 1 }, { "v": 1 }]));
    let sorted = seq.order_by(&KeySelector::field("v")).unwrap().unwrap();
    let firsts: Vec<Option<&Value>> = sorted.iter().map(|r| r.get("v")).collect();
    assert_eq!(firsts, vec![None, Some(&Value::Int(1)), Some(&Value::Int(2))]);
}

#[test]
fn test_primitive_samples_skip_the_property_check() {
    let words = Sequence::from(vec!["pear", "apple", "fig"]);
    let sorted = words.order_by(&KeySelector::field("length")).unwrap().unwrap();
    assert_eq!(sorted, vec!["apple", "fig", "pear"]);
}

#[test]
fn test_query_config_builders_and_serde() {
    let cfg = QueryConfig::default()
        .with_comparison_budget(1_000)
        .with_tracing(true);
    assert_eq!(cfg.comparison_budget, Some(1_000));
    assert!(cfg.trace_operators);

    let text = serde_json::to_string(&cfg).unwrap();
    let back: QueryConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, cfg);

    let budget = ComparisonBudget::from_config(&cfg);
    assert_eq!(budget.cap(), Some(1_000));
    assert_eq!(ComparisonBudget::from_config(&QueryConfig::default()).cap(), None);
}

#[test]
fn test_query_config_from_env() {
    std::env::set_var("SEQQUERY_COMPARISON_BUDGET", "250");
    std::env::set_var("SEQQUERY_TRACE_OPERATORS", "yes");
    let cfg = QueryConfig::try_from_env().unwrap();
    assert_eq!(cfg.comparison_budget, Some(250));
    assert!(cfg.trace_operators);

    std::env::set_var("SEQQUERY_COMPARISON_BUDGET", "lots");
    assert!(matches!(QueryConfig::try_from_env(), Err(Error::Config(_))));
    // The lenient loader keeps the default for the bad value.
    let cfg = QueryConfig::from_env();
    assert_eq!(cfg.comparison_budget, None);
    assert!(cfg.trace_operators);

    std::env::remove_var("SEQQUERY_COMPARISON_BUDGET");
    std::env::remove_var("SEQQUERY_TRACE_OPERATORS");
}

#[test]
fn test_derived_sequences_keep_config() {
    let cfg = QueryConfig::default().with_comparison_budget(3);
    let seq = Sequence::from(vec![1, 2, 3, 4]).with_config(cfg);
    let evens = seq.where_(|x, _| x % 2 == 0);
    assert_eq!(evens.config(), &cfg);
    assert!(matches!(
        evens.intersect(&[2, 4]),
        Err(OpError::BudgetExceeded { op: "intersect", requested: 5, cap: 3 })
    ));
}
