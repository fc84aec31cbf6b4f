use crate::query::Query;

/// Endpoint serving the XML API.
pub const ENDPOINT: &str = "http://oracleofbacon.org/cgi-bin/xml";

/// Render a query into a fully escaped GET URI.
///
/// All three fields go through the same encoder. No re-validation happens
/// here; a degenerate query still yields a syntactically valid URI.
pub fn build_uri(query: &Query) -> String {
    format!(
        "{}?p={}&a={}&b={}",
        ENDPOINT,
        urlencoding::encode(&query.api_key),
        urlencoding::encode(&query.from),
        urlencoding::encode(&query.to),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_spaces_in_every_field() {
        let query = Query::new("Kevin Bacon", "Tom Hanks", "ab c");
        assert_eq!(
            build_uri(&query),
            "http://oracleofbacon.org/cgi-bin/xml?p=ab%20c&a=Kevin%20Bacon&b=Tom%20Hanks"
        );
    }

    #[test]
    fn encodes_reserved_characters() {
        let query = Query::new("A&B", "C=D?", "p&q");
        assert_eq!(
            build_uri(&query),
            "http://oracleofbacon.org/cgi-bin/xml?p=p%26q&a=A%26B&b=C%3DD%3F"
        );
    }

    #[test]
    fn encodes_non_ascii_names() {
        let query = Query::new("Renée Zellweger", "Tom Hanks", "key");
        assert_eq!(
            build_uri(&query),
            "http://oracleofbacon.org/cgi-bin/xml?p=key&a=Ren%C3%A9e%20Zellweger&b=Tom%20Hanks"
        );
    }
}
