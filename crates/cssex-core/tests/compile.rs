use cssex_core::{compile, emit_css, parse, parse_file, Options, RuleTree};
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn rules(source: &str) -> RuleTree {
    parse(source, &Options::default()).expect("parse").rules
}

#[test]
fn nav_matches_expected_css() {
    let source = fs::read_to_string(fixture("nav.cssex")).unwrap();
    let expected = fs::read_to_string(fixture("nav.css")).unwrap();
    assert_eq!(compile(&source, &Options::default()).unwrap(), expected);
}

#[test]
fn theme_fixture() {
    let parsed = parse_file(fixture("theme.cssex"), &Options::default()).unwrap();
    let tree = &parsed.rules;

    assert_eq!(
        tree.selectors().collect::<Vec<_>>(),
        [
            "body",
            "#container",
            "#container #header ul",
            "#container #header ul > li",
            "#container #header ul > li a",
            "#container #header ul > li a:hover",
            "#container #content .example",
        ]
    );
    assert_eq!(tree.value("body", "background-color"), Some("#1A1A1A"));
    assert_eq!(
        tree.value("body", "font-family"),
        Some("'Droid Sans', sans-serif")
    );
    // `$accent` is reassigned at the very end of the file.
    assert_eq!(tree.value("#container #header ul > li a", "color"), Some("#0AF"));
    assert_eq!(
        tree.value("#container #content .example", "border"),
        Some("1px solid #0AF")
    );
    assert_eq!(
        tree.value("#container #content .example", "padding"),
        Some("10px 10px 0")
    );
    assert_eq!(parsed.variables.get("gutter"), Some("10px"));
}

#[test]
fn single_flat_rule() {
    let tree = rules("a { color: red; }");
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.value("a", "color"), Some("red"));
}

#[test]
fn explicit_combinator_has_no_leftovers() {
    let tree = rules("a { > p { color: green; } }");
    assert_eq!(tree.selectors().collect::<Vec<_>>(), ["a > p"]);
}

#[test]
fn pseudo_selector_attaches_without_space() {
    let tree = rules("a { :hover: { color: cyan; } }");
    assert_eq!(tree.selectors().collect::<Vec<_>>(), ["a:hover"]);
}

#[test]
fn reparsing_output_is_stable() {
    let source = fs::read_to_string(fixture("theme.cssex")).unwrap();
    for options in [
        Options::default(),
        Options::new().tabs(),
        Options::new().compact(),
    ] {
        let first = parse(&source, &options).unwrap().rules;
        let css = emit_css(&first, &options);
        let second = parse(&css, &options).unwrap().rules;
        assert_eq!(first, second, "unstable with {options:?}");
        assert_eq!(emit_css(&second, &options), css);
    }
}

#[test]
fn pruning_toggle() {
    let source = "section { article { color: red; } }";
    assert_eq!(
        compile(source, &Options::default()).unwrap(),
        "section article {\n    color: red;\n}\n"
    );
    assert_eq!(
        compile(source, &Options::new().keep_empty()).unwrap(),
        "section {\n}\nsection article {\n    color: red;\n}\n"
    );
}

#[test]
fn formatting_toggles() {
    let source = fs::read_to_string(fixture("nav.cssex")).unwrap();

    let compact = compile(&source, &Options::new().compact()).unwrap();
    assert!(!compact.contains('\n'));
    assert!(!compact.contains('\t'));
    assert!(compact.starts_with("ul{list-style:none;}ul > li{color:#FFF;"));

    let tabbed = compile(&source, &Options::new().tabs()).unwrap();
    for line in tabbed.lines().filter(|l| l.contains(';')) {
        assert!(line.starts_with('\t') && !line.starts_with("\t\t"), "{line:?}");
    }
    assert!(!tabbed.contains("    "));
}
