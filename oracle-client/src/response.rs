use roxmltree::Document;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Message carried by every `Error` response, whatever the server said.
pub const UNAUTHORIZED: &str = "Unauthorized access";
/// Message carried by every `Unknown` response.
pub const UNKNOWN_RESPONSE: &str = "unknown response type";

/// One parsed server response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    /// The server refused the request.
    Error { message: String },
    /// Alternating actor / movie chain linking the two names.
    Graph { path: Vec<String> },
    /// Alternative spellings for an unrecognized name.
    Spellcheck { candidates: Vec<String> },
    /// Anything that matched none of the known shapes.
    Unknown { message: String },
}

/// Classify a raw XML payload into a typed response.
///
/// First match wins: error, then graph, then spellcheck. A payload that does
/// not parse as XML, or parses but matches no shape, comes back as
/// `Unknown` — this function never fails.
pub fn classify(raw: &str) -> Response {
    let doc = match Document::parse(raw) {
        Ok(doc) => doc,
        Err(err) => {
            debug!(%err, "response body is not well-formed XML");
            return unknown();
        }
    };

    // An error element matches on presence alone, children or not, and takes
    // priority over any other shape in the same document.
    if has_element(&doc, "error") {
        return Response::Error {
            message: UNAUTHORIZED.to_string(),
        };
    }
    if has_element(&doc, "link") {
        return Response::Graph {
            path: connection_path(&doc),
        };
    }
    if has_element(&doc, "spellcheck") {
        let candidates = element_texts(&doc, "match")
            .into_iter()
            .filter(|text| !text.is_empty())
            .collect();
        return Response::Spellcheck { candidates };
    }
    unknown()
}

fn unknown() -> Response {
    Response::Unknown {
        message: UNKNOWN_RESPONSE.to_string(),
    }
}

fn has_element(doc: &Document, tag: &str) -> bool {
    doc.descendants().any(|node| node.has_tag_name(tag))
}

/// Interleave actor and movie texts pairwise, truncating to the shorter
/// list, then drop entries with no text. The truncation applies to
/// malformed, unequal lists as well; unmatched tail entries are lost.
fn connection_path(doc: &Document) -> Vec<String> {
    let actors = element_texts(doc, "actor");
    let movies = element_texts(doc, "movie");
    actors
        .into_iter()
        .zip(movies)
        .flat_map(|(actor, movie)| [actor, movie])
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Texts of every `tag` element in document order. A childless element
/// contributes an empty entry so pairing stays positional.
fn element_texts(doc: &Document, tag: &str) -> Vec<String> {
    doc.descendants()
        .filter(|node| node.has_tag_name(tag))
        .map(|node| node.text().unwrap_or_default().to_string())
        .collect()
}
