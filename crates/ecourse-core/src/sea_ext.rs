use sea_orm::{
    ColumnTrait, EntityTrait, QueryFilter, Select,
    sea_query::{Expr, Func, LikeExpr},
};

/// Case-insensitive substring filtering that behaves the same on PostgreSQL and SQLite.
pub trait FilterContainsIgnoreCase: Sized {
    /// Keep rows whose `column` contains `needle`, ignoring case.
    fn filter_contains_ignore_case<C>(self, column: C, needle: &str) -> Self
    where
        C: ColumnTrait;
}

impl<E> FilterContainsIgnoreCase for Select<E>
where
    E: EntityTrait,
{
    fn filter_contains_ignore_case<C>(self, column: C, needle: &str) -> Self
    where
        C: ColumnTrait,
    {
        let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
        self.filter(
            Expr::expr(Func::lower(Expr::col((column.entity_name(), column))))
                .like(LikeExpr::new(pattern).escape('\\')),
        )
    }
}

/// Escape LIKE wildcards so user text is matched literally.
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
