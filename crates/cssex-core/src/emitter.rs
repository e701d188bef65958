use crate::options::Options;
use crate::rules::{Declarations, RuleTree};

/// Render the rule tree as CSS, one block per selector in tree order.
///
/// With whitespace: `sel {\n    prop: value;\n}\n`. Without:
/// `sel{prop:value;}`. Nothing is escaped or reordered.
pub fn emit_css(rules: &RuleTree, options: &Options) -> String {
    let mut out = String::new();

    for (selector, decls) in rules {
        emit_rule(selector, decls, options, &mut out);
    }
    tracing::debug!(rules = rules.len(), bytes = out.len(), "emitted css");
    out
}

fn emit_rule(selector: &str, decls: &Declarations, options: &Options, out: &mut String) {
    let ws = options.emit_whitespace;

    out.push_str(selector);
    if ws {
        out.push(' ');
    }
    out.push('{');

    for (property, value) in decls {
        if ws {
            out.push('\n');
        }
        out.push_str(options.indent());
        out.push_str(property);
        out.push(':');
        if ws {
            out.push(' ');
        }
        out.push_str(value);
        out.push(';');
    }

    if ws {
        out.push('\n');
    }
    out.push('}');
    if ws {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> RuleTree {
        let mut tree = RuleTree::new();
        tree.insert("a", "color", "red");
        tree.insert("a", "margin", "0 auto");
        tree.insert("a:hover", "color", "blue");
        tree
    }

    #[test]
    fn readable_output() {
        assert_eq!(
            emit_css(&tree(), &Options::default()),
            "a {\n    color: red;\n    margin: 0 auto;\n}\na:hover {\n    color: blue;\n}\n"
        );
    }

    #[test]
    fn tab_indent() {
        assert_eq!(
            emit_css(&tree(), &Options::new().tabs()),
            "a {\n\tcolor: red;\n\tmargin: 0 auto;\n}\na:hover {\n\tcolor: blue;\n}\n"
        );
    }

    #[test]
    fn compact_output() {
        let css = emit_css(&tree(), &Options::new().compact());
        assert_eq!(css, "a{color:red;margin:0 auto;}a:hover{color:blue;}");
        assert!(!css.contains('\n'));
        assert!(!css.contains('\t'));
    }

    #[test]
    fn empty_selector_block() {
        let mut tree = RuleTree::new();
        tree.touch("div");
        assert_eq!(emit_css(&tree, &Options::default()), "div {\n}\n");
        assert_eq!(emit_css(&tree, &Options::new().compact()), "div{}");
    }

    #[test]
    fn empty_tree() {
        assert_eq!(emit_css(&RuleTree::new(), &Options::default()), "");
    }
}
