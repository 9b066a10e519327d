use crate::error::ParamError;
use bytes::BytesMut;
use chrono::{DateTime, NaiveDate, Utc};
use model::core::value::Value;
use std::error::Error;
use tokio_postgres::types::{IsNull, Kind, ToSql, Type, to_sql_checked};
use uuid::Uuid;

/// A `Value::Array` lowered to a typed vector for the Postgres binary
/// array format. `NULL` elements are kept as `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum PgArray {
    /// No element carries a type (empty or all `NULL`); binds to any array
    /// parameter. Holds the element count.
    Untyped(usize),
    Int(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
    Bool(Vec<Option<bool>>),
    Uuid(Vec<Option<Uuid>>),
    Bytes(Vec<Option<Vec<u8>>>),
    Date(Vec<Option<NaiveDate>>),
    Timestamp(Vec<Option<DateTime<Utc>>>),
    Json(Vec<Option<serde_json::Value>>),
}

#[derive(Debug, Clone, Copy)]
enum ElementKind {
    Int,
    Float,
    Text,
    Bool,
    Uuid,
    Bytes,
    Date,
    Timestamp,
    Json,
}

impl ElementKind {
    fn of(value: &Value) -> Result<Option<Self>, ParamError> {
        let kind = match value {
            Value::Null => return Ok(None),
            Value::Array(_) => return Err(ParamError::NestedArray),
            Value::Int(_) | Value::Uint(_) => ElementKind::Int,
            Value::Float(_) => ElementKind::Float,
            Value::String(_) => ElementKind::Text,
            Value::Boolean(_) => ElementKind::Bool,
            Value::Uuid(_) => ElementKind::Uuid,
            Value::Bytes(_) => ElementKind::Bytes,
            Value::Date(_) => ElementKind::Date,
            Value::Timestamp(_) => ElementKind::Timestamp,
            Value::Json(_) => ElementKind::Json,
        };
        Ok(Some(kind))
    }
}

impl PgArray {
    pub fn from_values(values: Vec<Value>) -> Result<Self, ParamError> {
        let kind = values
            .iter()
            .find_map(|v| ElementKind::of(v).transpose())
            .transpose()?;

        let Some(kind) = kind else {
            return Ok(PgArray::Untyped(values.len()));
        };

        let array = match kind {
            ElementKind::Int => PgArray::Int(collect(values, "int", |v| match v {
                Value::Int(i) => Some(Ok(i)),
                Value::Uint(u) => Some(i64::try_from(u).map_err(|_| ParamError::OutOfRange(u))),
                _ => None,
            })?),
            ElementKind::Float => PgArray::Float(collect(values, "float", |v| match v {
                Value::Float(f) => Some(Ok(f)),
                _ => None,
            })?),
            ElementKind::Text => PgArray::Text(collect(values, "string", |v| match v {
                Value::String(s) => Some(Ok(s)),
                _ => None,
            })?),
            ElementKind::Bool => PgArray::Bool(collect(values, "boolean", |v| match v {
                Value::Boolean(b) => Some(Ok(b)),
                _ => None,
            })?),
            ElementKind::Uuid => PgArray::Uuid(collect(values, "uuid", |v| match v {
                Value::Uuid(u) => Some(Ok(u)),
                _ => None,
            })?),
            ElementKind::Bytes => PgArray::Bytes(collect(values, "bytes", |v| match v {
                Value::Bytes(b) => Some(Ok(b)),
                _ => None,
            })?),
            ElementKind::Date => PgArray::Date(collect(values, "date", |v| match v {
                Value::Date(d) => Some(Ok(d)),
                _ => None,
            })?),
            ElementKind::Timestamp => PgArray::Timestamp(collect(values, "timestamp", |v| match v {
                Value::Timestamp(ts) => Some(Ok(ts)),
                _ => None,
            })?),
            ElementKind::Json => PgArray::Json(collect(values, "json", |v| match v {
                Value::Json(j) => Some(Ok(j)),
                _ => None,
            })?),
        };
        Ok(array)
    }

    /// Element type name used in error messages.
    pub fn element_name(&self) -> &'static str {
        match self {
            PgArray::Untyped(_) => "untyped",
            PgArray::Int(_) => "int",
            PgArray::Float(_) => "float",
            PgArray::Text(_) => "string",
            PgArray::Bool(_) => "boolean",
            PgArray::Uuid(_) => "uuid",
            PgArray::Bytes(_) => "bytes",
            PgArray::Date(_) => "date",
            PgArray::Timestamp(_) => "timestamp",
            PgArray::Json(_) => "json",
        }
    }

    fn type_error(&self, ty: &Type) -> Box<dyn Error + Sync + Send> {
        Box::new(ParamError::ArrayType {
            elements: self.element_name(),
            ty: ty.to_string(),
        })
    }
}

/// Maps every element through `extract`, keeping `NULL` as `None`.
/// `extract` returns `None` for elements of the wrong type.
fn collect<T>(
    values: Vec<Value>,
    first: &'static str,
    extract: impl Fn(Value) -> Option<Result<T, ParamError>>,
) -> Result<Vec<Option<T>>, ParamError> {
    values
        .into_iter()
        .map(|v| match v {
            Value::Null => Ok(None),
            Value::Array(_) => Err(ParamError::NestedArray),
            other => {
                let found = other.type_name();
                match extract(other) {
                    Some(res) => res.map(Some),
                    None => Err(ParamError::MixedArray { first, found }),
                }
            }
        })
        .collect()
}

impl ToSql for PgArray {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        if !matches!(ty.kind(), Kind::Array(_)) {
            return Err(self.type_error(ty));
        }

        match self {
            // Only NULLs are written, so the element type is never consulted.
            PgArray::Untyped(len) => vec![None::<i64>; *len].to_sql(ty, out),
            PgArray::Int(v) => self.write(v, ty, out),
            PgArray::Float(v) => self.write(v, ty, out),
            PgArray::Text(v) => self.write(v, ty, out),
            PgArray::Bool(v) => self.write(v, ty, out),
            PgArray::Uuid(v) => self.write(v, ty, out),
            PgArray::Bytes(v) => self.write(v, ty, out),
            PgArray::Date(v) => self.write(v, ty, out),
            PgArray::Timestamp(v) => self.write(v, ty, out),
            PgArray::Json(v) => self.write(v, ty, out),
        }
    }

    fn accepts(ty: &Type) -> bool {
        matches!(ty.kind(), Kind::Array(_))
    }

    to_sql_checked!();
}

impl PgArray {
    fn write<T: ToSql>(
        &self,
        values: &[Option<T>],
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        if !<&[Option<T>] as ToSql>::accepts(ty) {
            return Err(self.type_error(ty));
        }
        values.to_sql(ty, out)
    }
}
