use thiserror::Error;

/// Errors returned by [`crate::PizzaClient`].
#[derive(Debug, Error)]
pub enum PizzaError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body did not match the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The caller passed an argument no request can be built from.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A list the service should have populated came back empty, usually
    /// because it could not resolve the address or phone number.
    #[error("no {context} returned by the ordering service")]
    EmptyResult { context: String },

    /// The priced order came back with fewer (or more) line items than were
    /// submitted; the service drops product codes it does not recognise.
    #[error(
        "not all products were returned, possibly invalid product submitted \
         (submitted {submitted}, returned {returned})"
    )]
    ProductMismatch { submitted: usize, returned: usize },

    /// The pricing endpoint rejected the order.
    #[error("invalid order, status codes: {}", quote_codes(.codes))]
    Validation { status: i32, codes: Vec<String> },
}

impl PizzaError {
    /// `true` when the request could not be sent or its response could not
    /// be read, as opposed to the service answering with a result the
    /// client rejects.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PizzaError::Http(_)
                | PizzaError::UnexpectedStatus { .. }
                | PizzaError::Deserialize { .. }
                | PizzaError::InvalidUrl { .. }
        )
    }
}

fn quote_codes(codes: &[String]) -> String {
    codes
        .iter()
        .map(|code| format!("{code:?}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_quotes_each_code() {
        let err = PizzaError::Validation {
            status: -1,
            codes: vec![
                "BelowMinimumDeliveryAmount".to_string(),
                "StoreClosed".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            r#"invalid order, status codes: "BelowMinimumDeliveryAmount" "StoreClosed""#
        );
        assert!(!err.is_transport());
    }

    #[test]
    fn validation_message_with_no_codes() {
        let err = PizzaError::Validation {
            status: 2,
            codes: Vec::new(),
        };
        assert_eq!(err.to_string(), "invalid order, status codes: ");
    }

    #[test]
    fn product_mismatch_message() {
        let err = PizzaError::ProductMismatch {
            submitted: 1,
            returned: 0,
        };
        assert!(err
            .to_string()
            .starts_with("not all products were returned, possibly invalid product submitted"));
    }

    #[test]
    fn transport_classification() {
        let source = serde_json::from_str::<()>("invalid").unwrap_err();
        assert!(PizzaError::Deserialize {
            context: "test".to_owned(),
            source,
        }
        .is_transport());
        assert!(PizzaError::UnexpectedStatus {
            status: 503,
            url: "http://localhost/".to_owned(),
        }
        .is_transport());
        assert!(!PizzaError::EmptyResult {
            context: "stores".to_owned(),
        }
        .is_transport());
        assert!(!PizzaError::InvalidInput("empty store id".to_owned()).is_transport());
    }
}
