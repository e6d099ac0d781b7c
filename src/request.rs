//! Turning an [`Endpoint`] and caller [`Params`] into a concrete request.
//!
//! Resolution validates and coerces every declared parameter before anything
//! touches the network; preparation then lays the resolved values out as
//! path segments, query pairs, headers and body.

use crate::{
    endpoint::{Endpoint, Kind, Location, Param, Requirement, Reshape},
    envelope::Upload,
    error::Error::{self, InvalidArgument, MissingArgument, NoResponse},
    params::{ParamValue, Params},
    result::Result,
};
use reqwest::Url;
use serde_json::{Map, Number, Value};

/// Header carrying the API key on primary-host calls.
pub const KEY_HEADER: &str = "key";

/// Body of a prepared request.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// No body.
    Empty,
    /// A JSON document.
    Json(Value),
    /// Plain text.
    Text(String),
}

/// A request ready to be handed to a [`Transport`](crate::transport::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared {
    /// Name of the endpoint the request was built for.
    pub endpoint: &'static str,
    /// HTTP method.
    pub method: reqwest::Method,
    /// Full URL, query included.
    pub url: Url,
    /// Extra headers, in order.
    pub headers: Vec<(String, String)>,
    /// Request body.
    pub body: Body,
}

impl Prepared {
    /// Returns the first header called `name`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Validated, coerced arguments of one call.
#[derive(Debug)]
pub(crate) struct Resolved<'e> {
    pub(crate) endpoint: &'e Endpoint,
    key: Option<String>,
    values: Vec<(&'e Param, Value)>,
    /// Caller text of provided text values, before lowercasing.
    given: Vec<(&'e str, String)>,
}

/// Validates `params` (and `key`) against `endpoint`, applying defaults.
///
/// Checks run in declaration order: the key first, then each parameter, so
/// the first problem found is the one reported.
pub(crate) fn resolve<'e>(
    endpoint: &'e Endpoint,
    key: Option<&str>,
    params: &Params,
) -> Result<Resolved<'e>> {
    let key = key.filter(|k| !k.is_empty()).map(ToString::to_string);
    if let Some(message) = endpoint.missing_key {
        if key.is_none() {
            return Err(MissingArgument(message.to_string()));
        }
    }

    let mut values: Vec<(&Param, Value)> = Vec::with_capacity(endpoint.params.len());
    let mut given = Vec::new();
    for param in endpoint.params {
        let switched_on = |flag: &str| {
            values
                .iter()
                .any(|(p, v)| p.name == flag && *v == Value::Bool(true))
        };

        let raw = match (params.provided(param.name), param.requirement) {
            (_, Requirement::RequiredUnless { flag, .. }) if switched_on(flag) => continue,
            (
                Some(value),
                Requirement::Required(message) | Requirement::RequiredUnless { message, .. },
            ) if param.kind == Kind::Number && value.is_zero() => {
                return Err(MissingArgument(message.to_string()));
            }
            (Some(value), _) => {
                if param.kind == Kind::Text {
                    given.push((param.name, value.to_string()));
                }
                value.clone()
            }
            (
                None,
                Requirement::Required(message) | Requirement::RequiredUnless { message, .. },
            ) => return Err(MissingArgument(message.to_string())),
            (None, Requirement::Default(value)) => ParamValue::from(value),
            (None, Requirement::Optional) => continue,
            (None, Requirement::Nullable) => {
                values.push((param, Value::Null));
                continue;
            }
        };

        let value = coerce(param, &raw)?;
        values.push((param, value));
    }

    Ok(Resolved {
        endpoint,
        key: if endpoint.needs_key() { key } else { None },
        values,
        given,
    })
}

fn parse_bool(value: &ParamValue) -> Option<bool> {
    match value {
        ParamValue::Bool(b) => Some(*b),
        ParamValue::Text(t) if t.eq_ignore_ascii_case("true") => Some(true),
        ParamValue::Text(t) if t.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

fn parse_number(value: &ParamValue) -> Option<Number> {
    match value {
        ParamValue::Int(n) => Some(Number::from(*n)),
        ParamValue::Float(f) => Number::from_f64(*f),
        ParamValue::Text(t) => {
            let t = t.trim();
            t.parse::<i64>()
                .map(Number::from)
                .ok()
                .or_else(|| t.parse::<f64>().ok().and_then(Number::from_f64))
        }
        ParamValue::Bool(_) => None,
    }
}

fn coerce(param: &Param, value: &ParamValue) -> Result<Value> {
    let invalid = || InvalidArgument(param.invalid.to_string());
    let value = match param.kind {
        Kind::Text => {
            let text = value.to_string();
            Value::String(if param.lowercase {
                text.to_lowercase()
            } else {
                text
            })
        }
        Kind::Number => Value::Number(parse_number(value).ok_or_else(invalid)?),
        Kind::Bool | Kind::Switch => Value::Bool(parse_bool(value).ok_or_else(invalid)?),
        Kind::LenientBool => Value::Bool(matches!(value, ParamValue::Bool(true))),
    };
    Ok(value)
}

/// Wire text of a resolved value. `None` for values that are not sent.
fn wire_text(param: &Param, value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(false) if param.kind == Kind::Switch => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl<'e> Resolved<'e> {
    fn located(&self, location: Location) -> impl Iterator<Item = &(&'e Param, Value)> + '_ {
        self.values
            .iter()
            .filter(move |(p, _)| p.location == location)
    }

    /// Text of the resolved parameter called `name`.
    pub(crate) fn lookup(&self, name: &str) -> Option<String> {
        self.values
            .iter()
            .find(|(p, _)| p.name == name)
            .and_then(|(p, v)| match v {
                Value::Bool(b) => Some(b.to_string()),
                _ => wire_text(p, v),
            })
    }

    /// The endpoint's failure message, filled in with the caller's own text
    /// where there is one.
    pub(crate) fn no_response(&self) -> Error {
        NoResponse(self.endpoint.no_response.render(|name| {
            self.given
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, text)| text.clone())
                .or_else(|| self.lookup(name))
        }))
    }

    /// Base URL for this call: the override parameter if given, else `default`.
    pub(crate) fn base_url(&self, default: &str) -> String {
        self.located(Location::BaseUrl)
            .find_map(|(p, v)| wire_text(p, v))
            .unwrap_or_else(|| default.to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// Lays the resolved values out as a request against `default_base`.
    pub(crate) fn prepare(&self, default_base: &str) -> Result<Prepared> {
        let base = self.base_url(default_base);
        let mut url = Url::parse(&format!("{base}{}", self.endpoint.path))?;

        let segments: Vec<String> = self
            .located(Location::Path)
            .filter_map(|(p, v)| wire_text(p, v))
            .collect();
        if !segments.is_empty() {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| Error::BaseUrl(base.clone()))?;
            path.pop_if_empty();
            for segment in &segments {
                path.push(segment);
            }
        }

        let mut pairs: Vec<(&str, String)> = self
            .endpoint
            .fixed
            .iter()
            .map(|(k, v)| (*k, (*v).to_string()))
            .collect();
        pairs.extend(
            self.located(Location::Query)
                .filter_map(|(p, v)| wire_text(p, v).map(|text| (p.wire, text))),
        );
        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (name, value) in &pairs {
                query.append_pair(name, value);
            }
        }

        let mut headers = Vec::new();
        if let Some(key) = &self.key {
            headers.push((KEY_HEADER.to_string(), key.clone()));
        }
        headers.extend(
            self.located(Location::Header)
                .filter_map(|(p, v)| wire_text(p, v).map(|text| (p.wire.to_string(), text))),
        );

        let body = if let Some(text) = self
            .located(Location::RawBody)
            .find_map(|(p, v)| wire_text(p, v))
        {
            Body::Text(text)
        } else {
            let fields: Map<String, Value> = self
                .located(Location::Body)
                .filter(|(p, v)| !(p.kind == Kind::Switch && *v == Value::Bool(false)))
                .map(|(p, v)| (p.wire.to_string(), v.clone()))
                .collect();
            if fields.is_empty() {
                Body::Empty
            } else {
                Body::Json(Value::Object(fields))
            }
        };

        Ok(Prepared {
            endpoint: self.endpoint.name,
            method: self.endpoint.verb.method(),
            url,
            headers,
            body,
        })
    }

    /// Applies the endpoint's reshape to a decoded body.
    pub(crate) fn reshape(&self, body: Value, default_base: &str) -> Result<Value> {
        match self.endpoint.reshape {
            Reshape::None => Ok(body),
            Reshape::Upload { extension } => {
                let id = match body.get("key") {
                    Some(Value::String(key)) => key.clone(),
                    Some(Value::Number(key)) => key.to_string(),
                    _ => return Err(self.no_response()),
                };
                let extension = self.lookup(extension).unwrap_or_default();
                let url = format!("{}/{id}.{extension}", self.base_url(default_base));
                log::debug!("reshaped upload {id} to {url}");
                Ok(Upload {
                    status: true,
                    id,
                    url,
                }
                .into())
            }
        }
    }
}
