use deriv_repl::{derive_line, error::Error, Options, Stats};
use pretty_assertions::assert_eq;

/// Differentiates the line and renders it with the default options.
fn render(line: &str) -> String {
    derive_line(line, 'x').unwrap().render(&Options::default())
}

#[test]
fn simplified_output() {
    assert_eq!(render("x ^ 5"), "d/dx x ^ 5 = (5 * x) ^ (5 - 1)\n           = 5x ^ 4");
    assert_eq!(render("3x + 7"), "d/dx 3x + 7 = 3 + 0\n            = 3");
}

#[test]
fn implicit_output() {
    assert_eq!(render("sin(y)"), "d/dx sin(y) = dy/dx * cos(y)\n            = dy/dx * cos(y)");
    assert_eq!(
        derive_line("dy/dt y ^ 2", 'x').unwrap().raw.to_string(),
        "dy/dt * ((2 * y) ^ (2 - 1))",
    );
}

#[test]
fn errors() {
    for line in ["", "(x + 1", "x + 1)", "x +", "2 x", "foo(x)", "x % 2", "sin x"] {
        let err = derive_line(line, 'x').unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "`{}` gave {}", line, err);
    }

    let err = derive_line("x + y + z", 'x').unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn sample_file() {
    let mut stats = Stats::new();
    for line in include_str!("../expressions.txt").lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match derive_line(line, 'x') {
            Ok(derivation) => stats.record(&derivation.raw, &derivation.simplified),
            Err(_) => stats.record_failure(),
        }
    }

    assert_eq!(stats.count, 20);
    assert_eq!(stats.failures, 0);
    assert!(stats.mean_simplified_nodes() < stats.mean_raw_nodes());
    assert!(stats.mean_simplified_len() < stats.mean_raw_len());
    assert!(stats.larger_reduction() > 0);
}
