use super::*;

#[test]
fn lines_are_trimmed_and_blank_lines_dropped() {
    let out = "  alpha\n\nbeta  \n   \ngamma\n";
    assert_eq!(parse_lines(out), vec!["alpha", "beta", "gamma"]);
}

#[test]
fn lines_keep_source_order() {
    let out = "zlib\nacl\nmake\n";
    assert_eq!(parse_lines(out), vec!["zlib", "acl", "make"]);
}

#[test]
fn empty_listing_is_empty() {
    assert!(parse_lines("").is_empty());
    assert!(parse_lines("\n\n").is_empty());
}

#[test]
fn group_with_maintainers() {
    let xml = r#"<group><title>g</title><maintainer userid="a"/><maintainer userid="b"/></group>"#;
    let group = parse_group(xml, false).unwrap();

    assert_eq!(group.group_name.as_deref(), Some("g"));
    assert_eq!(group.email, None);
    assert_eq!(group.maintainers, vec!["a", "b"]);
    assert_eq!(group.users, None);
}

#[test]
fn group_full_listing_collects_nested_people() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<group>
  <title>factory-maintainers</title>
  <email>factory@example.org</email>
  <maintainer userid="lead"/>
  <person>
    <person userid="alice"/>
    <person userid="bob" role="maintainer"/>
  </person>
</group>"#;
    let group = parse_group(xml, true).unwrap();

    assert_eq!(group.group_name.as_deref(), Some("factory-maintainers"));
    assert_eq!(group.email.as_deref(), Some("factory@example.org"));
    assert_eq!(group.maintainers, vec!["lead"]);
    assert_eq!(
        group.users,
        Some(vec!["alice".to_string(), "bob".to_string()])
    );
}

#[test]
fn group_full_listing_without_people_is_empty_list() {
    let xml = r#"<group><title>lonely</title></group>"#;
    let group = parse_group(xml, true).unwrap();
    assert_eq!(group.users, Some(vec![]));
}

#[test]
fn group_members_ignored_without_full_listing() {
    let xml = r#"<group><title>g</title><person><person userid="x"/></person></group>"#;
    let group = parse_group(xml, false).unwrap();
    assert_eq!(group.users, None);
}

#[test]
fn group_without_title_is_tolerated() {
    let xml = r#"<group><maintainer userid="a"/></group>"#;
    let group = parse_group(xml, false).unwrap();
    assert_eq!(group.group_name, None);
    assert_eq!(group.maintainers, vec!["a"]);
}

#[test]
fn group_maintainer_without_userid_is_malformed() {
    let xml = r#"<group><title>g</title><maintainer/></group>"#;
    let err = parse_group(xml, false).unwrap_err();
    assert!(matches!(err, RelxError::MalformedRecord { kind: "group", .. }));
}

#[test]
fn group_rejects_other_documents() {
    let xml = r#"<status code="unknown_group"><summary>nope</summary></status>"#;
    let err = parse_group(xml, false).unwrap_err();
    assert!(matches!(err, RelxError::MalformedRecord { .. }));
}

#[test]
fn blank_group_output_is_malformed() {
    let err = parse_group("   \n", false).unwrap_err();
    assert!(matches!(err, RelxError::MalformedRecord { .. }));
}

#[test]
fn users_in_document_order() {
    let xml = r#"<collection>
  <person>
    <login>jdoe</login>
    <email>jdoe@example.com</email>
    <realname>Jane Doe</realname>
    <state>confirmed</state>
  </person>
  <person>
    <login>jroe</login>
    <email>jroe@example.com</email>
    <realname>John Roe</realname>
    <state>locked</state>
  </person>
</collection>"#;
    let users = parse_users(xml).unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].login, "jdoe");
    assert_eq!(users[0].realname, "Jane Doe");
    assert_eq!(users[1].login, "jroe");
    assert_eq!(users[1].state, "locked");
}

#[test]
fn user_missing_required_child_is_malformed() {
    let xml = r#"<collection>
  <person>
    <login>jdoe</login>
    <email>jdoe@example.com</email>
    <state>confirmed</state>
  </person>
</collection>"#;
    let err = parse_users(xml).unwrap_err();
    assert!(matches!(err, RelxError::MalformedRecord { kind: "user", .. }));
}

#[test]
fn empty_collection_is_not_an_error() {
    assert!(parse_users("<collection/>").unwrap().is_empty());
    assert!(parse_users(r#"<collection matches="0"></collection>"#)
        .unwrap()
        .is_empty());
}

#[test]
fn broken_xml_is_malformed() {
    let err = parse_users("<collection><person><login>x</person>").unwrap_err();
    assert!(matches!(err, RelxError::MalformedRecord { .. }));
}
