//! End-to-end tests over the full text → tokens → steps → locators →
//! declarations pipeline.

use xpath_locator::{
    canonicalize, ComparisonOp, Condition, DeclarationPipeline, NodeTest, PathError, PathLexer,
    PathParser,
};

fn pipeline() -> DeclarationPipeline {
    DeclarationPipeline::standard()
}

#[test]
fn header_span_text_path_yields_three_chained_locators() {
    let locators = pipeline()
        .locators("//div[@class='header']/span[1]/text()")
        .unwrap();
    assert_eq!(locators.len(), 3);

    // First locator: div with the class attribute in metadata and UID.
    assert_eq!(locators[0].metadata["class"], "header");
    assert_eq!(locators[0].uid, "div_QWidget_class_header");
    assert_eq!(locators[0].container_uid, None);

    // Position 1 is implied; no occurrence key anywhere on the span.
    assert!(!locators[1].metadata.contains_key("occurrence"));

    // Chain follows emission order.
    assert_eq!(locators[1].container_uid.as_deref(), Some(locators[0].uid.as_str()));
    assert_eq!(locators[2].container_uid.as_deref(), Some(locators[1].uid.as_str()));

    // The trailing text() step classifies as a text widget.
    assert_eq!(locators[2].metadata["archetype"], "TextFieldQT");
}

#[test]
fn conjunction_flattens_into_one_locator() {
    let locators = pipeline()
        .locators("//button[@name='submit' and @enabled='true']")
        .unwrap();
    assert_eq!(locators.len(), 1);
    assert_eq!(locators[0].metadata["name"], "submit");
    assert_eq!(locators[0].metadata["enabled"], "true");
    assert_eq!(locators[0].metadata["archetype"], "PushButtonQT");
}

#[test]
fn unterminated_literal_reports_offset_after_quote() {
    let err = pipeline().locators("//button[@name='x]").unwrap_err();
    assert_eq!(err, PathError::UnterminatedLiteral { offset: 16 });
}

#[test]
fn wildcard_uid_substitutes_any() {
    let locators = pipeline().locators("//*").unwrap();
    assert_eq!(locators.len(), 1);
    assert!(locators[0].uid.contains("any"));
    assert!(!locators[0].uid.contains('*'));
}

#[test]
fn bare_comparison_becomes_attribute_condition() {
    let tokens = PathLexer::new()
        .tokenize("//bookstore/book[price>35]/title")
        .unwrap();
    let steps = PathParser::new().parse(&tokens).unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[1].node_test, NodeTest::Named("book".into()));

    let predicate = steps[1].predicate.as_ref().unwrap();
    assert_eq!(
        predicate.conditions,
        vec![Condition::Attribute {
            name: "price".into(),
            value: "35".into(),
            op: ComparisonOp::Gt,
        }]
    );

    // The condition also lands in the locator metadata.
    let locators = pipeline()
        .locators("//bookstore/book[price>35]/title")
        .unwrap();
    assert_eq!(locators[1].metadata["price"], "35");
}

#[test]
fn locator_count_equals_step_count() {
    for path in [
        "/a",
        "//a/b/c",
        "//form/input[@name='x']",
        "///section/div",
        "/list/item[2]",
    ] {
        let tokens = PathLexer::new().tokenize(path).unwrap();
        let steps = PathParser::new().parse(&tokens).unwrap();
        let locators = pipeline().locators(path).unwrap();
        assert_eq!(locators.len(), steps.len(), "path: {path}");
    }
}

#[test]
fn container_chain_is_linear() {
    let locators = pipeline().locators("//a/b/c/d").unwrap();
    assert_eq!(locators[0].container_uid, None);
    for i in 1..locators.len() {
        assert_eq!(
            locators[i].container_uid.as_deref(),
            Some(locators[i - 1].uid.as_str())
        );
    }
}

#[test]
fn repeated_runs_are_deterministic() {
    let path = "//main/form[@id='login']/textfield[@name='user']/button[2]";
    let p = pipeline();
    let first = p.locators(path).unwrap();
    let second = p.locators(path).unwrap();
    assert_eq!(first, second);
    assert_eq!(p.declare(path).unwrap(), p.declare(path).unwrap());
}

#[test]
fn canonicalize_is_idempotent() {
    for s in [
        "",
        "plain",
        "__lead_and_trail__",
        "a---b",
        "text()",
        "ns:tag*weird/[]chars",
    ] {
        let once = canonicalize(s);
        assert_eq!(canonicalize(&once), once);
    }
}

#[test]
fn declarations_render_uid_metadata_and_container() {
    let text = pipeline().declare("//panel/button[@name='ok']").unwrap();

    // One block per locator, each opening with "<uid> = {".
    assert!(text.contains("panel_ScrollViewQT = {"));
    assert!(text.contains("panel_ScrollViewQT_button_PushButtonQT_name_ok = {"));

    // The second block references the first by bare identifier.
    assert!(text.contains("\"container\": panel_ScrollViewQT\n}"));
    assert!(!text.contains("\"container\": \"panel_ScrollViewQT\""));

    // Fixed keys present in every block.
    assert_eq!(text.matches("\"visible\": 1").count(), 2);
}

#[test]
fn occurrence_recorded_only_above_one() {
    let locators = pipeline().locators("/list/item[3]").unwrap();
    assert_eq!(locators[1].metadata["occurrence"], 3);

    let locators = pipeline().locators("/list/item[1]").unwrap();
    assert!(!locators[1].metadata.contains_key("occurrence"));
}

#[test]
fn syntax_errors_return_no_partial_locators() {
    for path in ["/div/[1]", "/div[@a='b'", "/div[#]", "//x[@a='b' @]"] {
        assert!(pipeline().locators(path).is_err(), "path: {path}");
    }
}
