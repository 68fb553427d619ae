//! Test helpers.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use salvo::{affix_state::inject, prelude::*};

use crate::{
    categories::{MockCategoriesRepository, models::Category},
    orders::MockOrdersRepository,
    products::{MockProductsRepository, models::Product},
    state::State,
    users::{MockUsersRepository, models::User},
};

pub(crate) fn make_user(uid: &str) -> User {
    User {
        id: Some(ObjectId::new()),
        uid: uid.to_string(),
        display_name: Some("Test User".to_string()),
        email: Some("test@example.com".to_string()),
        phone: None,
        photo_url: None,
        address: None,
        is_admin: Some(false),
        is_blocked: Some(false),
    }
}

pub(crate) fn make_category(title: &str) -> Category {
    Category {
        id: Some(ObjectId::new()),
        title: Some(title.to_string()),
        thumbnail_url: None,
    }
}

pub(crate) fn make_product(title: &str, price: f64) -> Product {
    Product {
        id: Some(ObjectId::new()),
        title: Some(title.to_string()),
        thumbnail_url: None,
        details: None,
        ratings: None,
        price: Some(price),
        category: Some("lighting".to_string()),
    }
}

pub(crate) fn strict_users_mock() -> MockUsersRepository {
    let mut users = MockUsersRepository::new();

    users.expect_create_user().never();
    users.expect_list_users().never();
    users.expect_find_user_by_uid().never();
    users.expect_upsert_user().never();
    users.expect_delete_user().never();

    users
}

pub(crate) fn strict_categories_mock() -> MockCategoriesRepository {
    let mut categories = MockCategoriesRepository::new();

    categories.expect_create_category().never();
    categories.expect_list_categories().never();
    categories.expect_find_category().never();
    categories.expect_upsert_category().never();
    categories.expect_delete_category().never();

    categories
}

pub(crate) fn strict_products_mock() -> MockProductsRepository {
    let mut products = MockProductsRepository::new();

    products.expect_create_product().never();
    products.expect_list_products().never();
    products.expect_list_products_by_category().never();
    products.expect_find_product().never();
    products.expect_find_product_summary().never();
    products.expect_upsert_product().never();
    products.expect_delete_product().never();

    products
}

pub(crate) fn strict_orders_mock() -> MockOrdersRepository {
    let mut orders = MockOrdersRepository::new();

    orders.expect_create_order().never();
    orders.expect_list_orders().never();
    orders.expect_find_order().never();
    orders.expect_list_orders_by_user().never();
    orders.expect_delete_order().never();

    orders
}

pub(crate) fn state_with_users(users: MockUsersRepository) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(users),
        Arc::new(strict_categories_mock()),
        Arc::new(strict_products_mock()),
        Arc::new(strict_orders_mock()),
    ))
}

pub(crate) fn state_with_categories(categories: MockCategoriesRepository) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_users_mock()),
        Arc::new(categories),
        Arc::new(strict_products_mock()),
        Arc::new(strict_orders_mock()),
    ))
}

pub(crate) fn state_with_products(products: MockProductsRepository) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_users_mock()),
        Arc::new(strict_categories_mock()),
        Arc::new(products),
        Arc::new(strict_orders_mock()),
    ))
}

/// State for the purchase and order-read flows, which touch several
/// collections in a single request.
pub(crate) fn order_flow_state(
    users: MockUsersRepository,
    products: MockProductsRepository,
    orders: MockOrdersRepository,
) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(users),
        Arc::new(strict_categories_mock()),
        Arc::new(products),
        Arc::new(orders),
    ))
}

pub(crate) fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn users_service(users: MockUsersRepository, route: Router) -> Service {
    service(state_with_users(users), route)
}

pub(crate) fn categories_service(categories: MockCategoriesRepository, route: Router) -> Service {
    service(state_with_categories(categories), route)
}

pub(crate) fn products_service(products: MockProductsRepository, route: Router) -> Service {
    service(state_with_products(products), route)
}

pub(crate) fn orders_service(orders: MockOrdersRepository, route: Router) -> Service {
    service(
        order_flow_state(strict_users_mock(), strict_products_mock(), orders),
        route,
    )
}
