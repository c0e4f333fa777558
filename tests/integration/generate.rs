//! Generate action integration tests
//!
//! Drives the public API end to end: validation, build, evaluation,
//! layout, labels and JSON output.

use pascal_lattice::lattice::{render_text, value_count};
use pascal_lattice::{generate, generate_with_values, GenerateConfig, LatticeError, Mode};

fn config(depth: usize) -> GenerateConfig {
    GenerateConfig {
        depth,
        max_value: 9,
        seed: Some(1234),
        ..GenerateConfig::default()
    }
}

#[test]
fn test_random_generation_shape() {
    for depth in 1..=7 {
        let view = generate(&config(depth)).unwrap();
        let n = value_count(depth).unwrap();
        assert_eq!(view.layout.nodes.len(), n);
        assert_eq!(view.layout.edges.len(), depth * (depth - 1));
        assert!(view
            .layout
            .nodes
            .iter()
            .all(|p| (1..=9).contains(&p.value)));
    }
}

#[test]
fn test_seed_is_reproducible() {
    let a = generate(&config(5)).unwrap();
    let b = generate(&config(5)).unwrap();
    let labels = |v: &pascal_lattice::LatticeView| -> Vec<String> {
        v.layout.nodes.iter().map(|p| p.label.clone()).collect()
    };
    assert_eq!(labels(&a), labels(&b));
    assert_eq!(a.root_optimal_sum, b.root_optimal_sum);
}

#[test]
fn test_explicit_values_both_modes() {
    let values = [1, 2, 3, 4, 5, 6];
    let max = generate_with_values(&config(3), &values).unwrap();
    assert_eq!(max.root_optimal_sum, 10);

    let min_config = GenerateConfig {
        mode: Mode::Minimize,
        ..config(3)
    };
    let min = generate_with_values(&min_config, &values).unwrap();
    assert_eq!(min.root_optimal_sum, 7);
    assert_eq!(min.layout.nodes[1].label, "2 (6)");
}

#[test]
fn test_naive_matches_memoized() {
    let naive_config = GenerateConfig {
        persist_memo: false,
        ..config(8)
    };
    let memoized = generate(&config(8)).unwrap();
    let naive = generate(&naive_config).unwrap();
    assert_eq!(memoized.root_optimal_sum, naive.root_optimal_sum);
    assert!(naive.stats.visits > memoized.stats.visits);
    assert_eq!(naive.stats.visits, (1 << 8) - 1);
}

#[test]
fn test_depth_one() {
    let view = generate_with_values(&config(1), &[42]).unwrap();
    assert_eq!(view.layout.nodes.len(), 1);
    assert!(view.layout.edges.is_empty());
    assert_eq!(view.root_optimal_sum, 42);
    assert_eq!(view.layout.nodes[0].label, "42 (42)");
}

#[test]
fn test_invalid_configuration() {
    let zero_depth = GenerateConfig {
        depth: 0,
        ..config(3)
    };
    assert!(matches!(
        generate(&zero_depth),
        Err(LatticeError::InvalidConfiguration { .. })
    ));

    let zero_max = GenerateConfig {
        max_value: 0,
        ..config(3)
    };
    assert!(matches!(
        generate(&zero_max),
        Err(LatticeError::InvalidConfiguration { .. })
    ));

    assert!(matches!(
        generate_with_values(&config(3), &[1, 2, 3]),
        Err(LatticeError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_naive_ceiling() {
    let deep = GenerateConfig {
        persist_memo: false,
        max_recompute_depth: 10,
        ..config(11)
    };
    assert_eq!(
        generate(&deep).unwrap_err(),
        LatticeError::RecomputeCeiling {
            depth: 11,
            limit: 10
        }
    );

    // The ceiling only guards the naive path
    let memoized = GenerateConfig {
        persist_memo: true,
        ..deep
    };
    assert!(generate(&memoized).is_ok());
}

#[test]
fn test_json_output() {
    let view = generate_with_values(&config(3), &[1, 2, 3, 4, 5, 6]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();
    assert_eq!(json["rootOptimalSum"], 10);
    assert_eq!(json["mode"], "maximize");
    assert_eq!(json["nodes"].as_array().unwrap().len(), 6);
    assert_eq!(json["nodes"][0]["id"], "1");
    assert_eq!(json["nodes"][0]["label"], "1 (10)");
    assert_eq!(json["edges"][0]["id"], "e1-2");
    assert_eq!(json["edges"][0]["source"], "1");
    assert_eq!(json["edges"][0]["target"], "2");
}

#[test]
fn test_text_rendering() {
    let view = generate_with_values(&config(3), &[1, 2, 3, 4, 5, 6]).unwrap();
    let text = render_text(&view, false);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("1 (10)"));
    assert!(lines[2].contains("4 (4)") && lines[2].contains("6 (6)"));
    // Rows are centred: the root is indented further than the base
    let indent = |s: &str| s.len() - s.trim_start().len();
    assert!(indent(lines[0]) > indent(lines[1]));
    assert!(indent(lines[1]) > indent(lines[2]));
}

#[test]
fn test_text_rendering_highlights_optimal_path() {
    let view = generate_with_values(&config(3), &[1, 2, 3, 4, 5, 6]).unwrap();
    let text = render_text(&view, true);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);

    // Optimal path is 1 -> 3 -> 6: everything before the first escape on a
    // row is unstyled, so only off-path labels may appear there.
    let unstyled = |line: &str| line.split('\u{1b}').next().unwrap_or("").to_string();
    assert!(lines.iter().all(|line| line.contains("\u{1b}[")));
    assert!(!unstyled(lines[0]).contains("1 (10)"));
    assert!(unstyled(lines[1]).contains("2 (7)"));
    assert!(!unstyled(lines[1]).contains("3 (9)"));
    assert!(unstyled(lines[2]).contains("4 (4)") && unstyled(lines[2]).contains("5 (5)"));
    assert!(!unstyled(lines[2]).contains("6 (6)"));
    assert!(text.contains("6 (6)"));

    assert!(!render_text(&view, false).contains('\u{1b}'));
}
