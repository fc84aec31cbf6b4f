use serde::{Deserialize, Serialize};

const SELF_LOOP_MESSAGE: &str = "From cannot be the same as To";
const BLANK_MESSAGE: &str = "cannot be blank";

/// A connection request between two public figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub from: String,
    pub to: String,
    pub api_key: String,
}

/// Field a validation error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    From,
    To,
    ApiKey,
}

/// A single validation failure, keyed by the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Query {
    pub fn new(from: impl Into<String>, to: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            api_key: api_key.into(),
        }
    }

    /// Check every validation rule and return all failures; an empty vec
    /// means the query is safe to send.
    ///
    /// Rules are evaluated independently rather than short-circuited, so an
    /// all-blank query reports the self-loop on top of the three blanks.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.from.is_empty() {
            errors.push(FieldError::new(Field::From, BLANK_MESSAGE));
        }
        if self.to.is_empty() {
            errors.push(FieldError::new(Field::To, BLANK_MESSAGE));
        }
        if self.api_key.is_empty() {
            errors.push(FieldError::new(Field::ApiKey, BLANK_MESSAGE));
        }
        if self.from == self.to {
            errors.push(FieldError::new(Field::From, SELF_LOOP_MESSAGE));
            errors.push(FieldError::new(Field::To, SELF_LOOP_MESSAGE));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_query_has_no_errors() {
        let query = Query::new("Kevin Bacon", "Tom Hanks", "key");
        assert!(query.validate().is_empty());
    }

    #[test]
    fn blank_from_flags_from_only() {
        let query = Query::new("", "Tom Hanks", "key");
        let errors = query.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::From);
    }

    #[test]
    fn blank_api_key_flags_api_key() {
        let query = Query::new("Kevin Bacon", "Tom Hanks", "");
        let errors = query.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::ApiKey);
    }

    #[test]
    fn self_loop_flags_both_name_fields() {
        let query = Query::new("Kevin Bacon", "Kevin Bacon", "key");
        let errors = query.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, Field::From);
        assert_eq!(errors[1].field, Field::To);
        assert!(errors.iter().all(|e| e.message == SELF_LOOP_MESSAGE));
    }

    #[test]
    fn all_blank_reports_every_rule() {
        // Two empty names are also equal, so the self-loop rule fires too.
        let query = Query::new("", "", "");
        let errors = query.validate();
        assert_eq!(errors.len(), 5);
        let self_loops = errors
            .iter()
            .filter(|e| e.message == SELF_LOOP_MESSAGE)
            .count();
        assert_eq!(self_loops, 2);
    }
}
