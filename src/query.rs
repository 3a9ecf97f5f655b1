//! Query-string serialization for parameter records.
//!
//! A record exposes its fields as `(name, QueryValue)` pairs in declaration
//! order; [`to_query_string`] turns them into `?a=1&b=2&b=3`. Unset fields
//! contribute nothing, list fields contribute one pair per element.

use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Bytes that would change the meaning of a query component if left raw.
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'`');

/// A parameter that accepts either one value or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        Self::One(value.to_owned())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.into_iter().map(str::to_owned).collect())
    }
}

/// The rendered form of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Absent,
    Scalar(String),
    List(Vec<String>),
}

impl QueryValue {
    pub fn from_option<T: ToQueryValue + ?Sized>(value: Option<&T>) -> Self {
        value.map_or(Self::Absent, ToQueryValue::to_query_value)
    }
}

pub trait ToQueryValue {
    fn to_query_value(&self) -> QueryValue;
}

macro_rules! display_scalar {
    ($($ty:ty),*) => {
        $(
            impl ToQueryValue for $ty {
                fn to_query_value(&self) -> QueryValue {
                    QueryValue::Scalar(self.to_string())
                }
            }
        )*
    };
}

display_scalar!(String, str, u32, i64, f64, bool);

impl ToQueryValue for NaiveDate {
    fn to_query_value(&self) -> QueryValue {
        QueryValue::Scalar(self.format("%Y-%m-%d").to_string())
    }
}

impl<T: ToString> ToQueryValue for OneOrMany<T> {
    fn to_query_value(&self) -> QueryValue {
        match self {
            Self::One(value) => QueryValue::Scalar(value.to_string()),
            Self::Many(values) => QueryValue::List(values.iter().map(ToString::to_string).collect()),
        }
    }
}

/// A record that can be rendered as a query string.
pub trait QueryParams {
    /// Every declared field, in declaration order, including unset ones.
    fn query_pairs(&self) -> Vec<(&'static str, QueryValue)>;

    fn to_query_string(&self) -> String {
        to_query_string(self.query_pairs())
    }
}

/// Renders pairs as `?name=value&...`; no pairs yields `"?"`.
pub fn to_query_string(pairs: impl IntoIterator<Item = (&'static str, QueryValue)>) -> String {
    let mut rendered = Vec::new();
    for (name, value) in pairs {
        match value {
            QueryValue::Absent => {}
            QueryValue::Scalar(value) => rendered.push(pair(name, &value)),
            QueryValue::List(values) => {
                rendered.extend(values.iter().map(|value| pair(name, value)));
            }
        }
    }
    concat_str!("?", rendered.join("&"))
}

fn pair(name: &str, value: &str) -> String {
    concat_str!(
        name,
        "=",
        utf8_percent_encode(value, QUERY_VALUE_ENCODE_SET).to_string()
    )
}
