//! End-to-end tests driving the whole front end through `analyze`.

use minilang::analyze;

fn analyze_source(source: &str) -> minilang::Analysis {
    analyze(source, Some(String::from("test.mini"))).unwrap()
}

#[test]
fn test_well_formed_program_is_clean() {
    let source = "int x = 1 + 2\n\
                  float y = 3.5\n\
                  if x == 3 then {\n\
                  x = x * 2\n\
                  } else {\n\
                  x = 0\n\
                  }\n\
                  while x > 0 do {\n\
                  x = x - 1\n\
                  }";
    let analysis = analyze_source(source);

    assert!(analysis.is_clean());
    assert_eq!(analysis.program.statements().len(), 4);
}

#[test]
fn test_single_line_blocks_are_clean() {
    let source = "int a = 5\nfloat b = 2.5\nif a < 10 then { a = a + 1 } else { b = b + 1.0 }";
    let analysis = analyze_source(source);

    assert!(analysis.is_clean());
    assert_eq!(analysis.program.statements().len(), 3);
}

#[test]
fn test_undeclared_assignment_reports_one_message() {
    let analysis = analyze_source("x = 5");

    assert_eq!(
        analysis.messages(),
        vec![String::from(
            "Variable x has not been declared in the current or any enclosing scopes"
        )]
    );
}

#[test]
fn test_mixed_initializer_reports_one_mismatch() {
    let analysis = analyze_source("int x = 1 + 2.0");

    assert_eq!(
        analysis.messages(),
        vec![String::from("Type Mismatch between int and float")]
    );
}

#[test]
fn test_matching_initializers_are_clean() {
    assert!(analyze_source("float y = 1.0 + 2.0").is_clean());
    assert!(analyze_source("int z = 1 + 2").is_clean());
}

#[test]
fn test_duplicate_declaration_message() {
    let analysis = analyze_source("int x\nint x");

    assert_eq!(
        analysis.messages(),
        vec![String::from(
            "Variable x has already been declared in the current scope"
        )]
    );
}

#[test]
fn test_nested_blocks_share_enclosing_bindings() {
    let source = "int total = 0\n\
                  int i = 0\n\
                  while i < 5 do {\n\
                  if i == 2 then {\n\
                  total = total + i\n\
                  }\n\
                  i = i + 1\n\
                  }";

    assert!(analyze_source(source).is_clean());
}

#[test]
fn test_malformed_input_terminates_with_diagnostics() {
    for source in ["int 5", "}", "int a = 1 + + 2", "if x then", "int a = ("] {
        let analysis = analyze_source(source);
        assert!(!analysis.is_clean(), "expected diagnostics for {:?}", source);
    }
}

#[test]
fn test_empty_source_is_clean() {
    let analysis = analyze_source("");

    assert!(analysis.is_clean());
    assert!(analysis.program.statements().is_empty());
}

#[test]
fn test_unrecognised_character_is_fatal() {
    let result = analyze("int x = 5 @", Some(String::from("test.mini")));

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_bare_exclamation_is_fatal() {
    let result = analyze("int x = 1 ! 2", None);

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "IncompleteOperator");
}
