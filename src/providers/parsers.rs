//! Turn raw `osc` output into typed records.
//!
//! Listing commands print one entry per line. API commands print OBS XML
//! documents, which are deserialized with `quick-xml`'s serde support.
//!
//! Optional schema elements (group `title`, `email`) are tolerated as absent.
//! Required ones (user `login`, `email`, `realname`, `state`, and `userid`
//! attributes) fail the whole document with `MalformedRecord`.

use crate::error::{RelxError, Result};
use crate::providers::types::{GroupRecord, UserRecord};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

/// Split listing output into trimmed, non-empty lines in source order.
pub fn parse_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Deserialize)]
struct GroupDocument {
    title: Option<String>,
    email: Option<String>,
    #[serde(rename = "maintainer", default)]
    maintainers: Vec<UserRef>,
    #[serde(rename = "person", default)]
    people: Vec<PersonList>,
}

#[derive(Debug, Deserialize)]
struct PersonList {
    #[serde(rename = "person", default)]
    entries: Vec<UserRef>,
}

#[derive(Debug, Deserialize)]
struct UserRef {
    #[serde(rename = "@userid")]
    userid: String,
}

#[derive(Debug, Deserialize)]
struct PersonCollection {
    #[serde(rename = "person", default)]
    people: Vec<PersonDocument>,
}

#[derive(Debug, Deserialize)]
struct PersonDocument {
    login: String,
    email: String,
    realname: String,
    state: String,
}

/// Parse a `/group/<name>` document.
///
/// Member user ids are collected only when `full_list` is set.
pub fn parse_group(xml: &str, full_list: bool) -> Result<GroupRecord> {
    expect_root(xml, "group", "group")?;
    let doc: GroupDocument = quick_xml::de::from_str(xml).map_err(|e| malformed("group", e))?;

    let users = full_list.then(|| {
        doc.people
            .into_iter()
            .flat_map(|list| list.entries)
            .map(|entry| entry.userid)
            .collect()
    });

    Ok(GroupRecord {
        group_name: non_empty(doc.title),
        email: non_empty(doc.email),
        maintainers: doc.maintainers.into_iter().map(|m| m.userid).collect(),
        users,
    })
}

/// Parse a `/search/person` result collection.
pub fn parse_users(xml: &str) -> Result<Vec<UserRecord>> {
    expect_root(xml, "collection", "user")?;
    let doc: PersonCollection =
        quick_xml::de::from_str(xml).map_err(|e| malformed("user", e))?;

    Ok(doc
        .people
        .into_iter()
        .map(|p| UserRecord {
            login: p.login,
            email: p.email,
            realname: p.realname,
            state: p.state,
        })
        .collect())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn malformed(kind: &'static str, reason: impl ToString) -> RelxError {
    RelxError::MalformedRecord {
        kind,
        reason: reason.to_string(),
    }
}

/// Check the document element before handing the text to serde, which
/// would otherwise accept any root name.
fn expect_root(xml: &str, expected: &str, kind: &'static str) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == expected {
                    return Ok(());
                }
                return Err(malformed(
                    kind,
                    format!("expected <{}> document, found <{}>", expected, name),
                ));
            }
            Ok(Event::Eof) => return Err(malformed(kind, "empty document")),
            Ok(_) => continue,
            Err(e) => return Err(malformed(kind, e)),
        }
    }
}

#[cfg(test)]
mod tests;
