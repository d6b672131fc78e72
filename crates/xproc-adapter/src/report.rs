//! Translation of the engine's structured error documents into positioned
//! diagnostics.
//!
//! Compile errors arrive as an `<errors>` document with one `<error>` child
//! per problem. Runtime failures arrive either as a `c:errors` list in the
//! XProc step namespace or as an engine-namespace document whose `<type>`
//! element marks a security or generic runtime exception.

use editor_plugin_api::PositionedInfo;
use roxmltree::{Document, Node};
use xproc_engine_traits::diagnostics::{
    ENGINE_NS, RUNTIME_EXCEPTION_TYPE, SECURITY_EXCEPTION_TYPE, XPROC_STEP_NS,
};

/// Parse a compile-error document into one record per `<error>` element.
///
/// A document that cannot be parsed, or contains no `<error>` elements,
/// degrades to a single record carrying the raw text.
pub fn compile_errors(error_document: &str, fallback_uri: &str) -> Vec<PositionedInfo> {
    let doc = match Document::parse(error_document) {
        Ok(doc) => doc,
        Err(err) => {
            tracing::debug!(%err, "compile error document is not well-formed XML");
            return vec![PositionedInfo::error(error_document.trim())];
        }
    };

    let records: Vec<PositionedInfo> = doc
        .root_element()
        .children()
        .filter(|node| {
            node.is_element()
                && node.tag_name().name() == "error"
                && node.tag_name().namespace().is_none()
        })
        .map(|error| compile_error_record(error, fallback_uri))
        .collect();

    if records.is_empty() {
        vec![PositionedInfo::error(error_document.trim())]
    } else {
        records
    }
}

fn compile_error_record(error: Node, fallback_uri: &str) -> PositionedInfo {
    let position = child_element(error, "position", None);
    let href = position
        .and_then(|p| p.attribute("href"))
        .and_then(non_blank)
        .unwrap_or(fallback_uri);

    let mut message = String::new();
    if let Some(code) = error.attribute("code") {
        message.push_str("err:");
        message.push_str(code);
        message.push_str(": ");
    }
    let description = child_element(error, "description", None)
        .map(text_value)
        .unwrap_or_default();
    let detail = child_element(error, "message", None)
        .map(text_value)
        .unwrap_or_default();
    message.push_str(&format!("{description} ({detail})"));

    PositionedInfo::error(message).at(
        href,
        parse_position(position.and_then(|p| p.attribute("line"))),
        parse_position(position.and_then(|p| p.attribute("column"))),
    )
}

/// Translate the error document of a failed run into diagnostic records.
///
/// `serialized` is the plain-text rendition used whenever the document is
/// absent or cannot be interpreted.
pub fn runtime_errors(
    error_document: Option<&str>,
    serialized: &str,
    fallback_uri: &str,
) -> Vec<PositionedInfo> {
    let Some(text) = error_document else {
        return vec![PositionedInfo::error(serialized)];
    };
    let doc = match Document::parse(text) {
        Ok(doc) => doc,
        Err(err) => {
            tracing::debug!(%err, "runtime error document is not well-formed XML");
            return vec![PositionedInfo::error(serialized)];
        }
    };
    let root = doc.root_element();

    if let Some(errors) = child_element(root, "errors", Some(XPROC_STEP_NS)) {
        return errors
            .children()
            .filter(|node| {
                node.is_element()
                    && node.tag_name().name() == "error"
                    && node.tag_name().namespace() == Some(XPROC_STEP_NS)
            })
            .map(|error| runtime_error_record(error, fallback_uri))
            .collect();
    }

    match child_element(root, "type", Some(ENGINE_NS)).map(text_value) {
        Some(ty) if ty == SECURITY_EXCEPTION_TYPE => {
            let message = child_element(root, "message", Some(ENGINE_NS))
                .map(text_value)
                .unwrap_or_default();
            vec![PositionedInfo::error(format!(
                "{message}. To access the resource, reconfigure the security \
                 settings of the XProc engine."
            ))]
        }
        Some(ty) if ty == RUNTIME_EXCEPTION_TYPE => {
            let detail = child_element(root, "error", None)
                .or_else(|| child_element(root, "message", None))
                .unwrap_or(root);
            vec![PositionedInfo::error(text_value(detail))]
        }
        _ => vec![PositionedInfo::error(serialized)],
    }
}

fn runtime_error_record(error: Node, fallback_uri: &str) -> PositionedInfo {
    let href = error
        .attribute("href")
        .and_then(non_blank)
        .unwrap_or(fallback_uri);

    let mut message = String::new();
    if let Some(code) = error.attribute("code") {
        message.push_str(code);
        message.push_str(": ");
    }
    match child_element(error, "message", None) {
        Some(detail) => message.push_str(&text_value(detail)),
        None => message.push_str(&text_value(error)),
    }

    PositionedInfo::error(message).at(
        href,
        parse_position(error.attribute("line")),
        parse_position(error.attribute("column")),
    )
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Parse a 1-based position attribute; absent, non-numeric, or non-positive
/// values mean "unknown"
fn parse_position(value: Option<&str>) -> Option<u32> {
    let value = value?.trim();
    match value.parse::<i64>() {
        Ok(n) if n > 0 => u32::try_from(n).ok(),
        _ => None,
    }
}

/// First child element with the given local name; `namespace` of `None`
/// matches only elements in no namespace
fn child_element<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
    namespace: Option<&str>,
) -> Option<Node<'a, 'input>> {
    node.children().find(|child| {
        child.is_element()
            && child.tag_name().name() == name
            && child.tag_name().namespace() == namespace
    })
}

/// Concatenated text of a node and its descendants
fn text_value(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
