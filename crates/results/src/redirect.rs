//! Redirect results: a status code plus a `Location` header.

use axum::http::HeaderValue;
use httpresults_core::{ResultError, ResultResult};

/// A redirect target checked to be sendable as a `Location` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RedirectTarget {
    uri: String,
    location: HeaderValue,
}

impl RedirectTarget {
    pub(crate) fn parse(uri: String) -> ResultResult<Self> {
        // Empty and blank targets are sent as given; only absence is an error.
        let location = HeaderValue::from_str(&uri)
            .map_err(|e| ResultError::invalid_header_value("uri", e.to_string()))?;

        Ok(Self { uri, location })
    }

    pub(crate) fn uri(&self) -> &str {
        &self.uri
    }

    pub(crate) fn into_header_value(self) -> HeaderValue {
        self.location
    }
}

redirect_result!(
    /// 301 Moved Permanently to a target URI.
    ///
    /// Clients may switch the method to GET when following it.
    ///
    /// Endpoint metadata: one 301 response without a body.
    RedirectPermanent,
    ::axum::http::StatusCode::MOVED_PERMANENTLY
);

redirect_result!(
    /// 302 Found.
    Redirect,
    ::axum::http::StatusCode::FOUND
);

redirect_result!(
    /// 307 Temporary Redirect; the method and body are preserved.
    RedirectTemporary,
    ::axum::http::StatusCode::TEMPORARY_REDIRECT
);

redirect_result!(
    /// 308 Permanent Redirect; the method and body are preserved.
    RedirectPermanentPreserveMethod,
    ::axum::http::StatusCode::PERMANENT_REDIRECT
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{execute, execute_blocking};
    use axum::http::{header::LOCATION, StatusCode};
    use httpresults_core::{describe, ProducesResponseType};
    use proptest::prelude::*;

    #[tokio::test]
    async fn permanent_redirect_writes_301_and_location() {
        let redirect = RedirectPermanent::new("https://example.com/new-home").unwrap();
        assert_eq!(redirect.uri(), "https://example.com/new-home");
        assert_eq!(redirect.status_code(), StatusCode::MOVED_PERMANENTLY);

        let (status, headers, body) = execute(redirect).await;

        assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
        assert_eq!(headers[LOCATION], "https://example.com/new-home");
        assert!(body.is_empty());
    }

    #[test]
    fn missing_target_is_rejected() {
        assert_eq!(
            RedirectPermanent::try_from(None::<String>),
            Err(ResultError::MissingArgument { name: "uri" })
        );
        assert_eq!(
            RedirectTemporary::try_from(None::<String>),
            Err(ResultError::MissingArgument { name: "uri" })
        );
    }

    #[tokio::test]
    async fn empty_and_blank_targets_are_written_as_given() {
        for uri in ["", " ", "\t", "  /padded  "] {
            let redirect = RedirectPermanent::new(uri).unwrap();
            assert_eq!(redirect.uri(), uri);

            let (status, headers, _) = execute(redirect).await;
            assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
            assert_eq!(headers[LOCATION].as_bytes(), uri.as_bytes());
        }

        let redirect = RedirectPermanent::try_from(Some(String::new())).unwrap();
        assert_eq!(redirect.uri(), "");
    }

    #[test]
    fn target_that_breaks_the_header_is_rejected() {
        let err = RedirectPermanent::new("/next\r\nSet-Cookie: a=b").unwrap_err();
        assert!(matches!(err, ResultError::InvalidHeaderValue { name: "uri", .. }));
    }

    #[test]
    fn relative_targets_are_allowed() {
        let redirect = RedirectPermanent::try_from(Some("/docs".to_string())).unwrap();
        assert_eq!(redirect.uri(), "/docs");
    }

    #[tokio::test]
    async fn siblings_use_their_own_status() {
        let cases = [
            (execute(Redirect::new("/a").unwrap()).await, StatusCode::FOUND),
            (
                execute(RedirectTemporary::new("/a").unwrap()).await,
                StatusCode::TEMPORARY_REDIRECT,
            ),
            (
                execute(RedirectPermanentPreserveMethod::new("/a").unwrap()).await,
                StatusCode::PERMANENT_REDIRECT,
            ),
        ];

        for ((status, headers, _), expected) in cases {
            assert_eq!(status, expected);
            assert_eq!(headers[LOCATION], "/a");
        }
    }

    #[test]
    fn metadata_describes_a_bodiless_301() {
        let d = describe::<RedirectPermanent>("GET", "/old");
        assert_eq!(d.responses, vec![ProducesResponseType::status(301)]);
    }

    proptest! {
        /// Property: the Location header equals the provided URI.
        #[test]
        fn location_equals_target(
            uri in "(https?://[a-z]{1,12}\\.example(/[A-Za-z0-9._~-]{0,12}){0,4}|/[!-~]{0,40}|[ \t]{0,4}|[ -~]{0,40})"
        ) {
            let redirect = RedirectPermanent::new(uri.clone()).unwrap();

            let (status, headers, _) = execute_blocking(redirect);

            prop_assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
            prop_assert_eq!(headers[LOCATION].as_bytes(), uri.as_bytes());
        }
    }
}
