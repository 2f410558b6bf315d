use typewrite_client::{
    PermissionOptions, QueryOptions, Role, RoleString, build_permissions, build_queries,
};

#[test]
fn test_query_count_equals_condition_count() {
    let options: QueryOptions = serde_json::from_str(
        r#"{
            "equals": [{"field": "status", "value": "active"}, {"field": "status", "value": "active"}],
            "lessThan": [{"field": "age", "value": 65}],
            "greaterThan": [{"field": "age", "value": 18}, {"field": "age", "value": 70}],
            "contains": [{"field": "bio", "value": "rust"}]
        }"#,
    )
    .unwrap();

    let queries = build_queries(&options);
    assert_eq!(queries.len(), 6);
    assert_eq!(
        queries[0],
        r#"{"method":"equal","attribute":"status","values":["active"]}"#
    );
    assert_eq!(queries[0], queries[1]);
    assert_eq!(
        queries[5],
        r#"{"method":"search","attribute":"bio","values":["rust"]}"#
    );
}

#[test]
fn test_empty_option_sets() {
    assert!(build_queries(&QueryOptions::default()).is_empty());
    assert!(build_permissions(&PermissionOptions::default()).is_empty());
}

#[test]
fn test_permissions_in_action_order() {
    let options = PermissionOptions::new()
        .update(Role::team("editors", "member"))
        .delete(Role::label("admin"))
        .read(Role::any())
        .write(Role::user("abc123"));

    assert_eq!(
        build_permissions(&options),
        vec![
            r#"read("any")"#,
            r#"write("user:abc123")"#,
            r#"delete("label:admin")"#,
            r#"update("team:editors:member")"#,
        ]
    );
}

#[test]
fn test_checked_roles_reject_what_unchecked_accepts() {
    assert!(RoleString::parse("team:editors").is_err());

    let unchecked = PermissionOptions::new().read("team:editors");
    assert_eq!(build_permissions(&unchecked), vec![r#"read("team:editors")"#]);
}
