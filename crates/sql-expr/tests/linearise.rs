use model::core::value::Value;
use sql_expr::{Expr, Handler, Postgres, Render, Renderer, SqlHandler};

fn eq(ident: &str, value: i64) -> Expr {
    Expr::Eq {
        ident: ident.to_string(),
        value: Value::Int(value),
    }
}

/// `?` placeholders with sequences flattened into a JSON array.
#[derive(Default)]
struct Ordinal {
    issued: usize,
}

impl Handler for Ordinal {
    fn next_placeholder(&mut self, sql: &mut String) {
        self.issued += 1;
        sql.push('?');
    }

    fn wrap_slice(&self, values: &[Value]) -> Value {
        let items = values
            .iter()
            .map(|v| serde_json::to_value(v).unwrap_or(serde_json::Value::Null))
            .collect();
        Value::Json(serde_json::Value::Array(items))
    }

    fn position(&self) -> u64 {
        self.issued as u64
    }

    fn name(&self) -> &'static str {
        "Ordinal"
    }
}

#[test]
fn fresh_handlers_restart_numbering() {
    let ast = Expr::And(vec![eq("a", 1), eq("b", 2)]);

    let (first, _) = Postgres::new().to_sql(&ast, String::new(), Vec::new());
    let (second, _) = Postgres::new().to_sql(&ast, String::new(), Vec::new());

    assert_eq!(first, "(a = $1 AND b = $2)");
    assert_eq!(second, first);
}

#[test]
fn appends_to_existing_fragment() {
    let mut handler = Postgres::new();
    let (sql, params) = handler.to_sql(
        &eq("tenant_id", 7),
        "SELECT * FROM orders WHERE ".to_string(),
        Vec::new(),
    );
    assert_eq!(sql, "SELECT * FROM orders WHERE tenant_id = $1");

    // Same handler: numbering carries on from $1.
    let (sql, params) = handler.to_sql(
        &Expr::Lt {
            ident: "total".to_string(),
            value: Value::Float(9.5),
        },
        sql + " AND ",
        params,
    );

    assert_eq!(sql, "SELECT * FROM orders WHERE tenant_id = $1 AND total < $2");
    assert_eq!(params, vec![Value::Int(7), Value::Float(9.5)]);
}

#[test]
fn starting_counter_matches_prebound_args() {
    let prefix = "UPDATE users SET name = $1 WHERE ".to_string();
    let args = vec![Value::String("ada".to_string())];

    let mut handler = Postgres::starting_at(args.len() as u64);
    let (sql, params) = handler.to_sql(&eq("id", 42), prefix, args);

    assert_eq!(sql, "UPDATE users SET name = $1 WHERE id = $2");
    assert_eq!(
        params,
        vec![Value::String("ada".to_string()), Value::Int(42)]
    );
}

#[test]
fn nested_groups_bind_depth_first() {
    let ast = Expr::Or(vec![
        Expr::And(vec![
            eq("a", 1),
            Expr::Or(vec![
                eq("b", 2),
                Expr::IsNull {
                    ident: "c".to_string(),
                },
                Expr::NeqAll {
                    ident: "d".to_string(),
                    values: vec![Value::Int(3), Value::Int(4)],
                },
            ]),
        ]),
        Expr::Neq {
            ident: "e".to_string(),
            value: Value::Int(5),
        },
        Expr::And(vec![]),
        eq("f", 6),
    ]);

    let (sql, params) = Postgres::new().to_sql(&ast, String::new(), Vec::new());

    assert_eq!(
        sql,
        "((a = $1 AND (b = $2 OR c IS NULL OR d <> ALL($3))) OR e <> $4 OR () OR f = $5)"
    );
    assert_eq!(
        params,
        vec![
            Value::Int(1),
            Value::Int(2),
            Value::Array(vec![Value::Int(3), Value::Int(4)]),
            Value::Int(5),
            Value::Int(6),
        ]
    );
}

#[test]
fn placeholder_count_matches_args() {
    let ast = Expr::And(
        (0..25)
            .map(|i| {
                if i % 3 == 0 {
                    Expr::IsNotNull {
                        ident: format!("c{i}"),
                    }
                } else {
                    eq(&format!("c{i}"), i)
                }
            })
            .collect(),
    );

    let mut handler = Postgres::new();
    let (sql, params) = handler.to_sql(&ast, String::new(), Vec::new());

    assert_eq!(params.len(), 16);
    assert_eq!(handler.position(), 16);
    assert_eq!(sql.matches('$').count(), params.len());
    assert!(sql.ends_with("c23 = $16 AND c24 IS NOT NULL)"));
}

#[test]
fn custom_handler_controls_syntax_and_wrapping() {
    let ast = Expr::And(vec![
        eq("a", 1),
        Expr::EqAny {
            ident: "tag".to_string(),
            values: vec![Value::String("x".to_string()), Value::Null],
        },
    ]);

    let mut handler = Ordinal::default();
    let mut renderer = Renderer::new(&mut handler);
    ast.render(&mut renderer);
    let (sql, params) = renderer.finish();

    assert_eq!(sql, "(a = ? AND tag = ANY(?))");
    assert_eq!(
        params,
        vec![
            Value::Int(1),
            Value::Json(serde_json::json!([{ "String": "x" }, "Null"])),
        ]
    );
    assert_eq!(handler.position(), 2);
}
