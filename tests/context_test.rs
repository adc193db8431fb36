use datahub_client::Context;

#[test]
fn test_add_header_keeps_latest_value() {
    let mut ctx = Context::new();
    ctx.add_header("api-key", "first").add_header("api-key", "second");

    assert_eq!(ctx.headers().len(), 1);
    assert_eq!(ctx.headers()["api-key"], "second");
}

#[test]
fn test_set_project_overrides_previous() {
    let mut ctx = Context::new();
    ctx.set_project("p1").set_project("p2");

    assert_eq!(ctx.project(), "p2");
}

#[test]
fn test_bootstrap_call_chain() {
    // The shape the binary configures: key auth plus target project.
    let mut ctx = Context::new();
    ctx.add_header("api-key", "secret").set_project("publicdata");

    assert_eq!(ctx.headers()["api-key"], "secret");
    assert_eq!(ctx.project(), "publicdata");
}

#[test]
fn test_set_api_key_sets_the_api_key_header() {
    let mut ctx = Context::new();
    ctx.set_api_key("secret");

    assert_eq!(ctx.headers()["api-key"], "secret");
}

#[test]
fn test_new_context_is_empty() {
    let ctx = Context::new();
    assert!(ctx.headers().is_empty());
    assert_eq!(ctx.project(), "");
}
