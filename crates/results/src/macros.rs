/// Define a result that writes an optional value as JSON with a fixed status.
macro_rules! json_status_result {
    ($(#[$meta:meta])* $name:ident, $status:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name<T> {
            value: Option<T>,
        }

        impl<T> $name<T> {
            pub const STATUS: ::axum::http::StatusCode = $status;

            /// A result that writes `value` as the response body.
            pub fn new(value: T) -> Self {
                Self { value: Some(value) }
            }

            /// A result whose body is the JSON literal `null`.
            pub fn empty() -> Self {
                Self { value: None }
            }

            pub fn value(&self) -> Option<&T> {
                self.value.as_ref()
            }

            pub fn into_value(self) -> Option<T> {
                self.value
            }

            pub fn status_code(&self) -> ::axum::http::StatusCode {
                Self::STATUS
            }
        }

        impl<T> From<T> for $name<T> {
            fn from(value: T) -> Self {
                Self::new(value)
            }
        }

        impl<T: ::serde::Serialize> ::axum::response::IntoResponse for $name<T> {
            fn into_response(self) -> ::axum::response::Response {
                ::tracing::debug!(
                    result = stringify!($name),
                    status = Self::STATUS.as_u16(),
                    "executing result"
                );

                // A serialization failure stays the 500 axum::Json produces.
                let mut res =
                    ::axum::response::IntoResponse::into_response(::axum::Json(self.value));
                if res.status().is_success() {
                    *res.status_mut() = Self::STATUS;
                }
                res
            }
        }

        impl<T> ::httpresults_core::EndpointMetadataProvider for $name<T> {
            fn populate_metadata(ctx: &mut ::httpresults_core::EndpointMetadataContext) {
                ctx.add(::httpresults_core::ProducesResponseType::typed::<T>(
                    Self::STATUS.as_u16(),
                    ::httpresults_core::APPLICATION_JSON,
                ));
            }
        }
    };
}

/// Define a redirect result with a fixed status and a validated `Location`.
macro_rules! redirect_result {
    ($(#[$meta:meta])* $name:ident, $status:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            target: $crate::redirect::RedirectTarget,
        }

        impl $name {
            pub const STATUS: ::axum::http::StatusCode = $status;

            /// Redirect to `uri`.
            ///
            /// The target is written to `Location` exactly as given, empty or
            /// blank strings included. Fails with
            /// [`ResultError::InvalidHeaderValue`] when it can not be sent as a
            /// header; an absent target (`None`) is rejected by the
            /// `TryFrom<Option<String>>` impl.
            ///
            /// [`ResultError::InvalidHeaderValue`]: httpresults_core::ResultError::InvalidHeaderValue
            pub fn new(uri: impl Into<String>) -> ::httpresults_core::ResultResult<Self> {
                Ok(Self {
                    target: $crate::redirect::RedirectTarget::parse(uri.into())?,
                })
            }

            /// The URI to redirect to.
            pub fn uri(&self) -> &str {
                self.target.uri()
            }

            pub fn status_code(&self) -> ::axum::http::StatusCode {
                Self::STATUS
            }
        }

        impl TryFrom<Option<String>> for $name {
            type Error = ::httpresults_core::ResultError;

            fn try_from(uri: Option<String>) -> Result<Self, Self::Error> {
                match uri {
                    Some(uri) => Self::new(uri),
                    None => Err(::httpresults_core::ResultError::missing_argument("uri")),
                }
            }
        }

        impl ::axum::response::IntoResponse for $name {
            fn into_response(self) -> ::axum::response::Response {
                ::tracing::debug!(
                    result = stringify!($name),
                    status = Self::STATUS.as_u16(),
                    location = %self.target.uri(),
                    "executing result"
                );

                ::axum::response::IntoResponse::into_response((
                    Self::STATUS,
                    [(::axum::http::header::LOCATION, self.target.into_header_value())],
                ))
            }
        }

        impl ::httpresults_core::EndpointMetadataProvider for $name {
            fn populate_metadata(ctx: &mut ::httpresults_core::EndpointMetadataContext) {
                ctx.add(::httpresults_core::ProducesResponseType::status(Self::STATUS.as_u16()));
            }
        }
    };
}
