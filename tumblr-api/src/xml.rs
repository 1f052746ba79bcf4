//! Folding of v1 XML bodies into generic JSON structures.
//!
//! The non-JSON endpoints answer with XML. `parse` turns such a body into
//! the same generic shape a JSON answer would have had. The folding rules:
//!
//! - the root element stays a single-key map: `<a>1</a>` folds to `{"a":"1"}`;
//! - attributes become string entries on the element's map;
//! - an element with only text folds to that text as a string;
//! - siblings sharing a tag fold to an array in document order, but a tag
//!   occurring once stays unwrapped (callers must handle both shapes);
//! - an element carrying attributes and text keeps the text under the
//!   `content` key;
//! - an element with nothing at all folds to an empty map;
//! - leaf text is never coerced to numbers. `<total>2</total>` stays the
//!   string `"2"`; only the JSON wire variant carries native types.

use roxmltree::{Document, Node};
use serde_json::map::Entry;
use serde_json::{Map, Value};

use tumblr_core::error::{TumblrError, TumblrResult};

/// Key holding an element's text when attributes force a map shape.
const CONTENT_KEY: &str = "content";

/// Parse an XML body and fold it.
pub fn parse(body: &str) -> TumblrResult<Value> {
    let doc = Document::parse(body)
        .map_err(|e| TumblrError::MalformedResponse(format!("invalid XML: {e}")))?;
    let root = doc.root_element();

    let mut folded = Map::new();
    folded.insert(root.tag_name().name().to_string(), fold_element(root));
    Ok(Value::Object(folded))
}

fn fold_element(node: Node) -> Value {
    let mut map = Map::new();
    for attr in node.attributes() {
        map.insert(
            attr.name().to_string(),
            Value::String(attr.value().to_string()),
        );
    }

    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            let folded = fold_element(child);
            match map.entry(child.tag_name().name().to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(folded);
                }
                Entry::Occupied(mut slot) => {
                    let existing = slot.get_mut();
                    if let Value::Array(items) = existing {
                        items.push(folded);
                    } else {
                        let first = existing.take();
                        *existing = Value::Array(vec![first, folded]);
                    }
                }
            }
        } else if child.is_text() {
            if let Some(t) = child.text() {
                text.push_str(t);
            }
        }
    }
    let text = text.trim();

    if map.is_empty() {
        if text.is_empty() {
            Value::Object(Map::new())
        } else {
            Value::String(text.to_string())
        }
    } else {
        if !text.is_empty() {
            map.insert(CONTENT_KEY.to_string(), Value::String(text.to_string()));
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_leaf_folds_to_string() {
        assert_eq!(parse("<a>1</a>").unwrap(), json!({"a": "1"}));
    }

    #[test]
    fn test_attributes_become_entries() {
        let value = parse(r#"<posts start="0" total="2"></posts>"#).unwrap();
        assert_eq!(value, json!({"posts": {"start": "0", "total": "2"}}));
    }

    #[test]
    fn test_repeated_siblings_fold_to_array_in_order() {
        let value = parse("<posts><post>a</post><post>b</post><post>c</post></posts>").unwrap();
        assert_eq!(value, json!({"posts": {"post": ["a", "b", "c"]}}));
    }

    #[test]
    fn test_single_occurrence_stays_unwrapped() {
        let value = parse("<posts><post>a</post></posts>").unwrap();
        assert_eq!(value, json!({"posts": {"post": "a"}}));
    }

    #[test]
    fn test_attributes_and_text_use_content_key() {
        let value = parse(r#"<feed url="http://x">My feed</feed>"#).unwrap();
        assert_eq!(value, json!({"feed": {"url": "http://x", "content": "My feed"}}));
    }

    #[test]
    fn test_empty_element_folds_to_empty_map() {
        assert_eq!(parse("<a></a>").unwrap(), json!({"a": {}}));
        assert_eq!(parse("<a/>").unwrap(), json!({"a": {}}));
    }

    #[test]
    fn test_leaf_text_is_never_coerced() {
        let value = parse("<counts><total>2</total><rate>1.5</rate></counts>").unwrap();
        assert_eq!(value, json!({"counts": {"total": "2", "rate": "1.5"}}));
    }

    #[test]
    fn test_cdata_is_plain_text() {
        let value = parse("<body><![CDATA[<b>hi</b>]]></body>").unwrap();
        assert_eq!(value, json!({"body": "<b>hi</b>"}));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let value = parse("<title>\n  Hello\n</title>").unwrap();
        assert_eq!(value, json!({"title": "Hello"}));
    }

    #[test]
    fn test_invalid_xml_is_malformed() {
        let err = parse("<a><b></a>").unwrap_err();
        assert!(matches!(err, TumblrError::MalformedResponse(msg) if msg.contains("XML")));
        assert!(parse("").is_err());
        assert!(parse("plain words").is_err());
    }

    #[test]
    fn test_realistic_read_document() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<tumblr version="1.0">
  <tumblelog name="demo" title="Demo Blog">A demo.</tumblelog>
  <posts start="0" total="2">
    <post id="123" type="regular">
      <regular-title>First</regular-title>
      <regular-body>Body one</regular-body>
    </post>
    <post id="124" type="quote">
      <quote-text>Second</quote-text>
    </post>
  </posts>
</tumblr>"#;
        let value = parse(body).unwrap();
        assert_eq!(value["tumblr"]["version"], json!("1.0"));
        assert_eq!(
            value["tumblr"]["tumblelog"],
            json!({"name": "demo", "title": "Demo Blog", "content": "A demo."})
        );
        let posts = &value["tumblr"]["posts"];
        assert_eq!(posts["start"], json!("0"));
        assert_eq!(posts["total"], json!("2"));
        let items = posts["post"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], json!("123"));
        assert_eq!(items[0]["regular-title"], json!("First"));
        assert_eq!(items[1]["quote-text"], json!("Second"));
    }

    #[test]
    fn test_mixed_children_and_text() {
        let value = parse("<entry>lead <tag>x</tag> tail</entry>").unwrap();
        assert_eq!(value, json!({"entry": {"tag": "x", "content": "lead  tail"}}));
    }
}
