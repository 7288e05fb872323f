//! Proto ↔ domain conversions for `catalog.CatalogService`

use rpc::catalog::{CreateRequest, SearchRequest, SearchResponse};

use crate::models::{CreateProduct, Product, SearchQuery};

impl From<CreateRequest> for CreateProduct {
    fn from(req: CreateRequest) -> Self {
        Self {
            sku: req.sku,
            name: req.name,
            category: req.category,
        }
    }
}

impl From<SearchRequest> for SearchQuery {
    fn from(req: SearchRequest) -> Self {
        Self { query: req.query }
    }
}

impl From<Product> for rpc::catalog::Product {
    fn from(product: Product) -> Self {
        Self {
            sku: product.sku,
            name: product.name,
            category: product.category,
        }
    }
}

/// Wrap search results, keeping their order
pub fn search_response(products: Vec<Product>) -> SearchResponse {
    SearchResponse {
        results: products.into_iter().map(Into::into).collect(),
    }
}
