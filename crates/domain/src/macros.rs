//! Macro for implementing Display and FromStr for label enums
//!
//! Status and option enums (trip status, map filter, sort order) travel as
//! short lowercase labels through the CLI and JSON output. This macro keeps
//! the two directions of that conversion in one place.
//!
//! # Example
//!
//! ```rust
//! use tripscope_domain::impl_domain_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Leg {
//!     Outbound,
//!     Return,
//! }
//!
//! impl_domain_label_conversions!(Leg {
//!     Outbound => "outbound",
//!     Return => "return",
//! });
//!
//! assert_eq!(Leg::Outbound.to_string(), "outbound");
//! assert_eq!("RETURN".parse::<Leg>().unwrap(), Leg::Return);
//! ```

/// Implements Display and FromStr traits for label enums
///
/// - Display writes the label verbatim
/// - FromStr parses case-insensitively and reports the enum name on failure
#[macro_export]
macro_rules! impl_domain_label_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
