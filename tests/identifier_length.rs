//! End-to-end scenarios: walker driving the identifier-length rule.

use ident_lint::{
    CollectingSink, Config, IdentifierLengthRule, NodeKind, SyntaxNode, Walker,
};

fn def(kind: NodeKind, name: &str, line: usize, column: usize) -> SyntaxNode {
    SyntaxNode::new(kind, line, column).with_child(SyntaxNode::identifier(name, line, column + 6))
}

/// A small class: `class A { void m(int index) { int i; for (q : xs) {} } }`
/// with a foreach header that binds no plain name.
fn sample_tree() -> SyntaxNode {
    SyntaxNode::new(NodeKind::CompilationUnit, 1, 1).with_child(
        def(NodeKind::ClassDefinition, "A", 1, 1).with_child(
            def(NodeKind::MethodDefinition, "m", 2, 5)
                .with_child(def(NodeKind::Parameter, "index", 2, 12))
                .with_child(
                    SyntaxNode::new(NodeKind::Block, 2, 30)
                        .with_child(def(NodeKind::LocalVariableDefinition, "i", 3, 9))
                        .with_child(SyntaxNode::new(NodeKind::ForEachHeader, 4, 14)),
                ),
        ),
    )
}

fn run(rule: IdentifierLengthRule, tree: &SyntaxNode) -> Vec<ident_lint::Finding> {
    let walker = Walker::builder().rule(rule).build();
    let mut sink = CollectingSink::new();
    walker.walk_file("A.java", tree, &mut sink);
    sink.into_findings()
}

#[test]
fn empty_allow_list_flags_every_single_char_name() {
    let findings = run(IdentifierLengthRule::new(), &sample_tree());

    // "A", "m", and "i" flag; "index" does not; the unnamed foreach header
    // is skipped without a fault.
    let names: Vec<&str> = findings.iter().map(|f| f.args[0].as_str()).collect();
    assert_eq!(names, vec!["A", "m", "i"]);
    assert!(findings.iter().all(|f| f.rule_id == "single-char-identifier"));
}

#[test]
fn findings_carry_the_token_position() {
    let findings = run(IdentifierLengthRule::new(), &sample_tree());
    let a = &findings[0];
    assert_eq!((a.line, a.column), (1, 7));
}

#[test]
fn allow_list_exempts_configured_names() {
    let rule = IdentifierLengthRule::new().allow_list("i,j,A,m");
    let findings = run(rule, &sample_tree());
    assert!(findings.is_empty());
}

#[test]
fn allow_list_miss_still_flags() {
    let rule = IdentifierLengthRule::new().allow_list("j");
    let tree = SyntaxNode::new(NodeKind::CompilationUnit, 1, 1)
        .with_child(def(NodeKind::LocalVariableDefinition, "i", 3, 9));
    let findings = run(rule, &tree);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].args, vec!["i"]);
}

#[test]
fn enum_and_interface_declarations_are_covered() {
    let tree = SyntaxNode::new(NodeKind::CompilationUnit, 1, 1)
        .with_child(
            def(NodeKind::EnumDefinition, "E", 1, 1)
                .with_child(def(NodeKind::EnumConstant, "V", 2, 5)),
        )
        .with_child(def(NodeKind::InterfaceDefinition, "I", 5, 1))
        .with_child(
            SyntaxNode::new(NodeKind::ForInitHeader, 8, 10)
                .with_child(SyntaxNode::identifier("k", 8, 14)),
        );

    let names: Vec<String> = run(IdentifierLengthRule::new(), &tree)
        .into_iter()
        .map(|mut f| f.args.remove(0))
        .collect();
    assert_eq!(names, vec!["E", "V", "I", "k"]);
}

#[test]
fn malformed_identifier_token_is_recovered_and_siblings_still_flag() {
    // First variable's name token has no text; the second is fine.
    let tree = SyntaxNode::new(NodeKind::CompilationUnit, 1, 1)
        .with_child(
            SyntaxNode::new(NodeKind::LocalVariableDefinition, 2, 5)
                .with_child(SyntaxNode::new(NodeKind::Identifier, 2, 9)),
        )
        .with_child(def(NodeKind::LocalVariableDefinition, "z", 3, 5));

    let findings = run(IdentifierLengthRule::new(), &tree);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].args, vec!["z"]);
}

#[test]
fn walker_is_reusable_across_files() {
    let walker = Walker::builder()
        .rule(IdentifierLengthRule::new())
        .trace(true)
        .build();

    for file in ["A.java", "B.java"] {
        let mut sink = CollectingSink::new();
        walker.walk_file(file, &sample_tree(), &mut sink);
        assert_eq!(sink.findings().len(), 3);
    }
}

#[test]
fn rule_configured_from_toml() {
    let config = Config::parse(
        r#"
[rules.single-char-identifier]
allow-list = "i"
"#,
    )
    .expect("Failed to parse");

    let options = config
        .rule_options("single-char-identifier")
        .expect("options");
    let rule = IdentifierLengthRule::from_options(options);

    let names: Vec<String> = run(rule, &sample_tree())
        .into_iter()
        .map(|mut f| f.args.remove(0))
        .collect();
    // "i" is exempt; "A" and "m" still flag.
    assert_eq!(names, vec!["A", "m"]);
}
