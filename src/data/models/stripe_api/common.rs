use serde::Deserialize;

/// A field that holds either the ID of a related object or, if the request
/// asked for it to be expanded, the object itself.
///
/// https://docs.stripe.com/api/expanding_objects
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}
