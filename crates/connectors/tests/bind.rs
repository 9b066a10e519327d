use bytes::BytesMut;
use connectors::sql::postgres::params::PgParamStore;
use model::core::value::Value;
use sql_expr::{Expr, Postgres, SqlHandler};
use tokio_postgres::types::Type;

#[test]
fn rendered_args_bind_in_placeholder_order() {
    let filter = Expr::And(vec![
        Expr::Eq {
            ident: "tenant_id".to_string(),
            value: Value::Int(3),
        },
        Expr::NeqAll {
            ident: "state".to_string(),
            values: vec![Value::from("archived"), Value::from("deleted")],
        },
        Expr::IsNull {
            ident: "locked_at".to_string(),
        },
    ]);

    let (sql, params) = Postgres::new().to_sql(
        &filter,
        "SELECT id FROM tickets WHERE ".to_string(),
        Vec::new(),
    );
    assert_eq!(
        sql,
        "SELECT id FROM tickets WHERE (tenant_id = $1 AND state <> ALL($2) AND locked_at IS NULL)"
    );

    let store = PgParamStore::from_values(params).unwrap();
    let refs = store.as_refs();
    assert_eq!(refs.len(), 2);

    // Types as the server would declare them for $1 and $2.
    let declared = [Type::INT8, Type::TEXT_ARRAY];
    for (param, ty) in refs.iter().zip(declared.iter()) {
        let mut out = BytesMut::new();
        param.to_sql_checked(ty, &mut out).unwrap();
    }
}

#[test]
fn empty_set_binds_to_declared_array_type() {
    let filter = Expr::EqAny {
        ident: "id".to_string(),
        values: Vec::new(),
    };

    let (_, params) = Postgres::new().to_sql(&filter, String::new(), Vec::new());
    let store = PgParamStore::from_values(params).unwrap();

    let mut out = BytesMut::new();
    store.as_refs()[0]
        .to_sql_checked(&Type::INT4_ARRAY, &mut out)
        .unwrap();
}
