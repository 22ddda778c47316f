//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around a non-empty `String` with:
/// - `Serialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `new()` returning `None` for an empty value, `as_str()`, `into_inner()`
/// - `Display`, `AsRef<str>` and `From<$name> for String`
///
/// No `Deserialize` impl is generated. IDs are only created through `new()`,
/// so an empty ID is unrepresentable.
///
/// # Example
///
/// ```rust
/// # use order_desk_core::define_id;
/// define_id!(InvoiceId);
/// define_id!(ShipmentId);
///
/// let invoice_id = InvoiceId::new("INV-1").unwrap();
/// assert_eq!(invoice_id.as_str(), "INV-1");
/// assert!(ShipmentId::new("").is_none());
///
/// // These are different types, so this won't compile:
/// // let _: ShipmentId = invoice_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID, or `None` if the value is empty.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Option<Self> {
                let id = id.into();
                if id.is_empty() { None } else { Some(Self(id)) }
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(CustomerId);
define_id!(ProductId);
define_id!(OrderId);
