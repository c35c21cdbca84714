use crate::domain::entities::catalog::Category;
use crate::repositories::catalog::{CatalogRepository, MockCatalogRepository};

fn category(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        description: None,
    }
}

#[tokio::test]
async fn test_catalog_list_is_ordered_by_id() {
    let repo = MockCatalogRepository::with_records(vec![category(2, "Shoes"), category(1, "Rackets")]);

    let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Rackets", "Shoes"]);
}

#[tokio::test]
async fn test_catalog_find_by_id() {
    let repo = MockCatalogRepository::with_records(vec![category(1, "Rackets")]);

    assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().name, "Rackets");
    assert!(repo.find_by_id(5).await.unwrap().is_none());
}
