use crate::{error::ParamError, sql::postgres::array::PgArray};
use bytes::BytesMut;
use model::core::value::Value;
use std::error::Error;
use tokio_postgres::types::{IsNull, Json as PgJson, ToSql, Type, to_sql_checked};
use tracing::debug;

#[derive(Debug)]
pub struct PgParam(Box<dyn ToSql + Sync + Send>);

impl PgParam {
    pub fn from_value(value: Value) -> Result<Self, ParamError> {
        let param = match value {
            Value::Int(v) => PgParam(Box::new(v)),
            Value::Uint(v) => {
                let v = i64::try_from(v).map_err(|_| ParamError::OutOfRange(v))?;
                PgParam(Box::new(v))
            }
            Value::Float(v) => PgParam(Box::new(v)),
            Value::String(v) => PgParam(Box::new(v)),
            Value::Boolean(v) => PgParam(Box::new(v)),
            Value::Json(v) => PgParam(Box::new(PgJson(v))),
            Value::Uuid(v) => PgParam(Box::new(v)),
            Value::Bytes(v) => PgParam(Box::new(v)),
            Value::Date(v) => PgParam(Box::new(v)),
            Value::Timestamp(v) => PgParam(Box::new(v)),
            Value::Array(values) => PgParam(Box::new(PgArray::from_values(values)?)),
            Value::Null => PgParam(Box::new(PgNull)),
        };
        Ok(param)
    }
}

impl AsRef<dyn ToSql + Sync> for PgParam {
    fn as_ref(&self) -> &(dyn ToSql + Sync + 'static) {
        &*self.0
    }
}

/// SQL `NULL` for a parameter of any type.
#[derive(Debug)]
struct PgNull;

impl ToSql for PgNull {
    fn to_sql(&self, _ty: &Type, _out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        Ok(IsNull::Yes)
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

/// Positional parameters in the order their placeholders were rendered.
pub struct PgParamStore {
    pub params: Vec<PgParam>,
}

impl PgParamStore {
    pub fn from_values(values: Vec<Value>) -> Result<Self, ParamError> {
        let params = values
            .into_iter()
            .map(PgParam::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = params.len(), "bound postgres parameters");
        Ok(Self { params })
    }

    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|param| param.as_ref())
            .collect::<Vec<_>>()
    }
}
