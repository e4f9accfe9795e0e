use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::Value;

use crate::error::Result;

/// Render `entries` as children of a `root` element.
///
/// Nested objects and arrays become nested elements. Numeric keys, such as
/// array indices, `-1` or `1.5`, are written as `item<key>` since element
/// names cannot start with a digit or a sign.
pub fn to_document<'a, I>(root: &str, entries: I) -> Result<String>
where
    I: IntoIterator<Item = (&'a str, Value)>
{
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
    writer.write_event(Event::Start(BytesStart::new(root)))?;
    for (key, value) in entries {
        write_value(&mut writer, key, &value)?;
    }
    writer.write_event(Event::End(BytesEnd::new(root)))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_value<W: std::io::Write>(writer: &mut Writer<W>, key: &str, value: &Value) -> Result<()> {
    let name = element_name(key);
    match value {
        Value::Object(map) => {
            writer.write_event(Event::Start(BytesStart::new(name.as_str())))?;
            for (k, v) in map {
                write_value(writer, k, v)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        },
        Value::Array(items) => {
            writer.write_event(Event::Start(BytesStart::new(name.as_str())))?;
            for (i, v) in items.iter().enumerate() {
                write_value(writer, &i.to_string(), v)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        },
        scalar => {
            let text = scalar_text(scalar);
            writer.write_event(Event::Start(BytesStart::new(name.as_str())))?;
            if !text.is_empty() {
                writer.write_event(Event::Text(BytesText::new(&text)))?;
            }
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        }
    }
    Ok(())
}

fn element_name(key: &str) -> String {
    if is_numeric(key) {
        format!("item{}", key)
    } else {
        key.to_owned()
    }
}

fn is_numeric(key: &str) -> bool {
    // `parse` also takes "inf" and "NaN"; neither is a number key
    key.parse::<f64>()
        .map_or(false, |n| n.is_finite())
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_owned(),
        Value::Bool(false) => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn nested_values_become_nested_elements() {
        let doc = to_document("root", vec![
            ("place", json!({"name": "Sé", "codes": ["1", "2"]})),
            ("7", json!("seven")),
        ])
        .unwrap();

        assert!(doc.starts_with("<?xml version=\"1.0\"?>"));
        assert!(doc.contains("<place><codes><item0>1</item0><item1>2</item1></codes><name>Sé</name></place>"));
        assert!(doc.contains("<item7>seven</item7>"));
        assert!(doc.ends_with("</root>"));
    }

    #[test]
    fn signed_and_decimal_keys_are_items() {
        let doc = to_document("root", vec![
            ("-1", json!("minus")),
            ("1.5", json!("half")),
            ("nan", json!("word")),
        ])
        .unwrap();
        assert!(doc.contains("<item-1>minus</item-1><item1.5>half</item1.5><nan>word</nan>"));
    }

    #[test]
    fn scalars_are_escaped() {
        let doc = to_document("root", vec![("a", json!("x < y & z"))]).unwrap();
        assert!(doc.contains("<a>x &lt; y &amp; z</a>"));
    }

    #[test]
    fn null_and_false_are_empty() {
        let doc = to_document("root", vec![
            ("a", Value::Null),
            ("b", json!(false)),
            ("c", json!(true)),
            ("d", json!(42)),
        ])
        .unwrap();
        assert!(doc.contains("<a></a><b></b><c>1</c><d>42</d>"));
    }
}
