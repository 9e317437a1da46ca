use sutra_domain::{validate_rule_set, DomainError, FlowRule, FlowRuleRow, TatType};

#[test]
fn test_rules_deserialize_from_store_json() {
    // Formato de filas tal como las exporta el Rule Store
    let json = r#"[
        {"system":"Purchase","currentTask":"","status":"","nextTask":"Raise PO","tat":1,"tatType":"hourtat","doer":"Buyer","email":"buyer@acme.test"},
        {"system":"Purchase","currentTask":"Raise PO","status":"Done","nextTask":"Approve PO","tat":1,"tatType":"daytat","doer":"Manager","email":"mgr@acme.test","formId":"f-12"}
    ]"#;
    let rules: Vec<FlowRule> = serde_json::from_str(json).unwrap();
    assert_eq!(rules.len(), 2);
    assert!(rules[0].is_start());
    assert_eq!(rules[1].tat_type(), TatType::DayTat);
    assert_eq!(rules[1].form_id(), Some("f-12"));
    assert!(validate_rule_set(&rules).is_ok());
}

#[test]
fn test_unknown_tat_type_fails_deserialization() {
    let json = r#"[{"system":"Purchase","currentTask":"","nextTask":"Raise PO","tat":1,"tatType":"monthtat"}]"#;
    let err = serde_json::from_str::<Vec<FlowRule>>(json).unwrap_err();
    assert!(err.to_string().contains("monthtat"), "unexpected error: {err}");
}

#[test]
fn test_rule_serializes_back_to_row_shape() {
    let rule = FlowRule::new("Purchase", "Raise PO", "Done", "Approve PO", 2.5, TatType::SpecifyTat).unwrap()
                                                                                            .with_doer("Manager", "mgr@acme.test");
    let value = serde_json::to_value(&rule).unwrap();
    assert_eq!(value["tatType"], "specifytat");
    assert_eq!(value["currentTask"], "Raise PO");
    assert!(value.get("formId").is_none());

    let row: FlowRuleRow = serde_json::from_value(value).unwrap();
    assert_eq!(FlowRule::try_from(row).unwrap(), rule);
}

#[test]
fn test_duplicate_start_rule_error_message() {
    let err = DomainError::DuplicateStartRule("Purchase".into());
    assert_eq!(err.to_string(), "el sistema 'Purchase' ya tiene una regla de inicio");
}
