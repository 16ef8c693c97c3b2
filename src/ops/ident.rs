use anyhow::{Result, bail};

/// Table and column names cannot be bound as query parameters, so commands
/// that interpolate them only accept plain identifiers.
pub fn check_ident(name: &str) -> Result<&str> {
    let mut chars = name.chars();
    let ok = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if !ok {
        bail!("not a plain SQL identifier: {name:?}");
    }
    Ok(name)
}

/// Column type expressions like `varchar(255)` or `timestamp with time zone`
/// need a slightly wider charset than identifiers.
pub fn check_sql_type(sql_type: &str) -> Result<&str> {
    let ok = !sql_type.is_empty()
        && sql_type
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '(' | ')' | ','));
    if !ok {
        bail!("not a plain SQL type expression: {sql_type:?}");
    }
    Ok(sql_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        for name in ["users", "alembic_version", "_tmp", "col2"] {
            assert!(check_ident(name).is_ok());
        }
    }

    #[test]
    fn rejects_everything_else() {
        for name in ["", "2col", "users; DROP TABLE users", "a-b", "a.b", "a\"b"] {
            assert!(check_ident(name).is_err());
        }
    }

    #[test]
    fn type_expressions() {
        assert!(check_sql_type("varchar(255)").is_ok());
        assert!(check_sql_type("timestamp with time zone").is_ok());
        assert!(check_sql_type("text; DROP TABLE users").is_err());
        assert!(check_sql_type("").is_err());
    }
}
