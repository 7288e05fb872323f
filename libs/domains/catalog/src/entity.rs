use sea_orm::ActiveValue::Set;
use sea_orm::Condition;
use sea_orm::entity::prelude::*;

use crate::models::{CreateProduct, Product};

/// Sea-ORM Entity for the catalog table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "catalog")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub sku: String,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rows where `term` equals the sku, the name or the category
pub fn matching(term: &str) -> Condition {
    Condition::any()
        .add(Column::Sku.eq(term))
        .add(Column::Name.eq(term))
        .add(Column::Category.eq(term))
}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            sku: model.sku,
            name: model.name,
            category: model.category,
        }
    }
}

impl From<CreateProduct> for ActiveModel {
    fn from(input: CreateProduct) -> Self {
        ActiveModel {
            sku: Set(input.sku),
            name: Set(input.name),
            category: Set(input.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, QueryFilter, QueryTrait};

    #[test]
    fn test_matching_compares_every_column() {
        let sql = Entity::find()
            .filter(matching("Paint"))
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""catalog"."sku" = 'Paint'"#), "{sql}");
        assert!(sql.contains(r#""catalog"."name" = 'Paint'"#), "{sql}");
        assert!(sql.contains(r#""catalog"."category" = 'Paint'"#), "{sql}");
        assert_eq!(sql.matches(" OR ").count(), 2, "{sql}");
    }
}
