// src/domain/text.rs
//! Length-bounded string value objects.

/// Declares a validated string newtype whose trimmed content must be
/// non-empty and whose character count must not exceed `$max`.
macro_rules! bounded_text {
    ($(#[$attr:meta])* $name:ident, $label:literal, $max:expr) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub const MAX_CHARS: usize = $max;

            pub fn new(value: impl Into<String>) -> $crate::domain::errors::DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err($crate::domain::errors::DomainError::Validation(
                        concat!($label, " cannot be empty").into(),
                    ));
                }
                if value.chars().count() > Self::MAX_CHARS {
                    return Err($crate::domain::errors::DomainError::Validation(format!(
                        "{} must be at most {} characters",
                        $label,
                        Self::MAX_CHARS
                    )));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

pub(crate) use bounded_text;
