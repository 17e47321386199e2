//! Serde helpers for tri-state (absent / null / value) fields.
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Deserialize `Option<Option<T>>` so a missing field and an explicit `null` stay distinct.
///
/// - Missing field → `None` (requires `#[serde(default)]`)
/// - `null` → `Some(None)`
/// - Value → `Some(Some(value))`
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct Params {
///     #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
///     due_date: Option<Option<String>>,
/// }
/// ```
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    struct DoubleOptionVisitor<T> {
        _inner: PhantomData<T>,
    }

    impl<'de, T: Deserialize<'de>> serde::de::Visitor<'de> for DoubleOptionVisitor<T> {
        type Value = Option<Option<T>>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a value or null")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(None))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(None))
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            T::deserialize(deserializer).map(|val| Some(Some(val)))
        }
    }

    de.deserialize_option(DoubleOptionVisitor {
        _inner: PhantomData,
    })
}

/// Serialize the inner layer of an `Option<Option<T>>`.
///
/// Pair with `skip_serializing_if = "Option::is_none"` so an absent field is
/// omitted and `Some(None)` goes out as `null`.
pub fn serialize_double_option<T, S>(
    value: &Option<Option<T>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    T: serde::Serialize,
    S: Serializer,
{
    match value {
        Some(Some(v)) => serializer.serialize_some(v),
        _ => serializer.serialize_none(),
    }
}
