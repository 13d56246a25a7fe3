use crate::domain::repository::CategoryRepository;
use crate::domain::types::Category;
use crate::error::CoursesServiceError;

// ── ListCategories ───────────────────────────────────────────────────────────

pub struct ListCategoriesUseCase<R: CategoryRepository> {
    pub repo: R,
}

impl<R: CategoryRepository> ListCategoriesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Category>, CoursesServiceError> {
        self.repo.list_all().await
    }
}
