use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Error;

/// HTTP method of an API definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Options,
}

/// Where a parameter field travels in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Body,
    Path,
    Query,
}

/// Declarative description of a single endpoint.
///
/// `path` may contain `${name}` placeholders, filled from path-positioned
/// parameter fields at call time.
#[derive(Debug, Clone)]
pub struct Api {
    pub name: &'static str,
    pub path: &'static str,
    pub method: Method,
}

/// Request parameters for an API call.
///
/// Fields serialize through serde; [`Params::position`] routes each
/// top-level field into the body (the default), the path template or the
/// query string.
pub trait Params: Serialize {
    fn position(_field: &str) -> Position {
        Position::Body
    }
}

/// Serialized parameter fields, split by position.
#[derive(Debug, Default)]
pub(crate) struct ParamBuckets {
    pub path: HashMap<String, String>,
    pub query: Vec<(String, String)>,
    pub body: Map<String, Value>,
}

pub(crate) fn split_params<P: Params>(params: &P) -> Result<ParamBuckets, Error> {
    let Value::Object(fields) = serde_json::to_value(params)? else {
        return Err(Error::InvalidParams);
    };

    let mut buckets = ParamBuckets::default();
    for (name, value) in fields {
        match P::position(&name) {
            Position::Body => {
                buckets.body.insert(name, value);
            }
            Position::Path => {
                let value = scalar_to_string(&value);
                buckets.path.insert(name, value);
            }
            Position::Query => {
                let value = scalar_to_string(&value);
                buckets.query.push((name, value));
            }
        }
    }
    Ok(buckets)
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Fill `${name}` placeholders in a path template. A `${` without a closing
/// brace is kept literally; a placeholder with no matching parameter is an
/// error.
pub(crate) fn fill_path(
    template: &str,
    params: &HashMap<String, String>,
) -> Result<String, Error> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            rest = "";
            break;
        };
        let name = &after[..end];
        let value = params
            .get(name)
            .ok_or_else(|| Error::MissingPathParam(name.to_string()))?;
        out.push_str(value);
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}
