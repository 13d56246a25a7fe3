use axum::{Json, extract::State};

use crate::error::CoursesServiceError;
use crate::state::AppState;
use crate::usecase::category::ListCategoriesUseCase;
use crate::view::CategoryView;

// ── GET /categories ──────────────────────────────────────────────────────────

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryView>>, CoursesServiceError> {
    let usecase = ListCategoriesUseCase {
        repo: state.category_repo(),
    };
    let categories = usecase.execute().await?;
    Ok(Json(categories.into_iter().map(CategoryView::from).collect()))
}
