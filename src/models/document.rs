//! JSON:API document decoding for discussion resources.
//!
//! The forum answers list requests with
//! `{ data: [..], included: [..], meta: { moreUrl }, links: { next } }`
//! where start/last users are referenced through `relationships` and
//! resolved from `included`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::discussion::{Badge, Discussion, User};
use super::page::DiscussionPage;
use crate::error::StoreError;

const RESOURCE: &str = "discussions";

#[derive(Debug, Deserialize)]
struct Document<D> {
    data: D,
    #[serde(default)]
    included: Vec<Resource>,
    #[serde(default)]
    meta: Option<Meta>,
    #[serde(default)]
    links: Option<Links>,
}

#[derive(Debug, Deserialize)]
struct Meta {
    #[serde(default, rename = "moreUrl")]
    more_url: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Links {
    #[serde(default)]
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Resource {
    #[serde(rename = "type")]
    kind: String,
    id: String,
    #[serde(default)]
    attributes: Value,
    #[serde(default)]
    relationships: HashMap<String, Relationship>,
}

#[derive(Debug, Deserialize)]
struct Relationship {
    #[serde(default)]
    data: Option<Identifier>,
}

#[derive(Debug, Deserialize)]
struct Identifier {
    #[serde(rename = "type")]
    kind: String,
    id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DiscussionAttributes {
    title: String,
    slug: Option<String>,
    start_time: Option<DateTime<Utc>>,
    last_time: Option<DateTime<Utc>>,
    last_post_number: Option<u32>,
    read_number: Option<u32>,
    unread_count: Option<u32>,
    replies_count: Option<u32>,
    comments_count: Option<u32>,
    can_delete: bool,
    is_sticky: bool,
    is_locked: bool,
    is_hidden: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UserAttributes {
    username: String,
    avatar_url: Option<String>,
}

/// Decode a list document into a page of discussions.
pub fn parse_discussion_page(body: &[u8]) -> Result<DiscussionPage, StoreError> {
    let doc: Document<Vec<Resource>> =
        serde_json::from_slice(body).map_err(|e| StoreError::decode(RESOURCE, e.to_string()))?;

    let users = index_users(&doc.included);
    let discussions = doc
        .data
        .iter()
        .filter(|r| r.kind == RESOURCE)
        .map(|r| build_discussion(r, &users))
        .collect::<Result<Vec<_>, _>>()?;

    let more_url = doc
        .meta
        .and_then(|m| m.more_url)
        .and_then(truthy_url)
        .or_else(|| doc.links.and_then(|l| l.next));

    Ok(DiscussionPage::new(discussions, more_url))
}

/// Decode a single-resource document (the answer to a save).
pub fn parse_discussion(body: &[u8]) -> Result<Discussion, StoreError> {
    let doc: Document<Resource> =
        serde_json::from_slice(body).map_err(|e| StoreError::decode(RESOURCE, e.to_string()))?;
    if doc.data.kind != RESOURCE {
        return Err(StoreError::decode(
            RESOURCE,
            format!("expected discussions resource, got {}", doc.data.kind),
        ));
    }
    let users = index_users(&doc.included);
    build_discussion(&doc.data, &users)
}

/// `moreUrl` may be a string, `false` or `null`; only a non-empty string
/// means another page exists.
fn truthy_url(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

fn index_users(included: &[Resource]) -> HashMap<&str, User> {
    included
        .iter()
        .filter(|r| r.kind == "users")
        .filter_map(|r| {
            let attrs: UserAttributes = serde_json::from_value(r.attributes.clone()).ok()?;
            Some((
                r.id.as_str(),
                User {
                    id: r.id.clone(),
                    username: attrs.username,
                    avatar_url: attrs.avatar_url,
                },
            ))
        })
        .collect()
}

fn related_user(resource: &Resource, name: &str, users: &HashMap<&str, User>) -> Option<User> {
    let ident = resource.relationships.get(name)?.data.as_ref()?;
    if ident.kind != "users" {
        return None;
    }
    users.get(ident.id.as_str()).cloned()
}

fn build_discussion(
    resource: &Resource,
    users: &HashMap<&str, User>,
) -> Result<Discussion, StoreError> {
    let attrs: DiscussionAttributes = if resource.attributes.is_null() {
        DiscussionAttributes::default()
    } else {
        serde_json::from_value(resource.attributes.clone()).map_err(|e| {
            StoreError::decode(RESOURCE, format!("discussion {}: {}", resource.id, e))
        })?
    };

    let last_post_number = attrs.last_post_number.unwrap_or(1);
    let replies_count = attrs
        .replies_count
        .or_else(|| attrs.comments_count.map(|c| c.saturating_sub(1)))
        .unwrap_or(0);
    let unread_count = attrs.unread_count.unwrap_or(0);

    let mut badges = Vec::new();
    if attrs.is_sticky {
        badges.push(Badge::new("Sticky", Some("thumb-tack")));
    }
    if attrs.is_locked {
        badges.push(Badge::new("Locked", Some("lock")));
    }
    if attrs.is_hidden {
        badges.push(Badge::new("Hidden", Some("trash")));
    }

    let slug = attrs
        .slug
        .unwrap_or_else(|| super::discussion::slugify(&attrs.title));

    Ok(Discussion {
        id: resource.id.clone(),
        title: attrs.title,
        slug,
        start_user: related_user(resource, "startUser", users),
        start_time: attrs.start_time,
        last_user: related_user(resource, "lastUser", users),
        last_time: attrs.last_time,
        last_post_number,
        read_number: attrs.read_number,
        unread_count,
        replies_count,
        badges,
        can_delete: attrs.can_delete,
    })
}
