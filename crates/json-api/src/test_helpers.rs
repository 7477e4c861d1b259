//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use souk_app::{
    auth::{AdminSession, MockAuthService, SessionUuid},
    context::AppContext,
    domain::{
        assets::MockAssetsService,
        categories::{
            MockCategoriesService,
            records::{CategoryRecord, CategoryUuid},
        },
        orders::{
            MockOrdersService,
            models::{City, DeliveryPeriod, OrderStatus},
            records::{OrderItemRecord, OrderItemUuid, OrderRecord, OrderUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        views::MockViewsService,
    },
};

use crate::state::State;

pub(crate) const TEST_CATEGORY_UUID: CategoryUuid = CategoryUuid::from_uuid(Uuid::nil());

/// Context whose services fail the test on any call.
///
/// Override the fields a test needs with struct update syntax.
pub(crate) fn strict_context() -> AppContext {
    AppContext {
        products: Arc::new(MockProductsService::new()),
        categories: Arc::new(MockCategoriesService::new()),
        orders: Arc::new(MockOrdersService::new()),
        views: Arc::new(MockViewsService::new()),
        auth: Arc::new(MockAuthService::new()),
        assets: Arc::new(MockAssetsService::new()),
    }
}

pub(crate) fn with_products(products: MockProductsService) -> AppContext {
    AppContext {
        products: Arc::new(products),
        ..strict_context()
    }
}

pub(crate) fn with_categories(categories: MockCategoriesService) -> AppContext {
    AppContext {
        categories: Arc::new(categories),
        ..strict_context()
    }
}

pub(crate) fn with_orders(orders: MockOrdersService) -> AppContext {
    AppContext {
        orders: Arc::new(orders),
        ..strict_context()
    }
}

pub(crate) fn with_views(views: MockViewsService) -> AppContext {
    AppContext {
        views: Arc::new(views),
        ..strict_context()
    }
}

pub(crate) fn with_auth(auth: MockAuthService) -> AppContext {
    AppContext {
        auth: Arc::new(auth),
        ..strict_context()
    }
}

pub(crate) fn with_assets(assets: MockAssetsService) -> AppContext {
    AppContext {
        assets: Arc::new(assets),
        ..strict_context()
    }
}

/// Serve `route` with state injected and no dashboard gate.
pub(crate) fn service(app: AppContext, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(State::new(app, true))).push(route))
}

pub(crate) fn make_product(uuid: ProductUuid, name: &str, price: i64) -> ProductRecord {
    ProductRecord {
        uuid,
        category_uuid: TEST_CATEGORY_UUID,
        category_name: "Home Decor".to_string(),
        name: name.to_string(),
        price: Decimal::from(price),
        original_price: None,
        discount: None,
        description: None,
        full_description: None,
        image: None,
        rating: Decimal::ZERO,
        reviews: 0,
        in_stock: true,
        quantity: 10,
        sales: 0,
        is_featured: false,
        is_best_seller: false,
        is_flash_sale: false,
        specifications: Vec::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_category(uuid: CategoryUuid, name: &str) -> CategoryRecord {
    CategoryRecord {
        uuid,
        name: name.to_string(),
        description: None,
        image: None,
        featured: Vec::new(),
        product_count: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(uuid: OrderUuid, status: OrderStatus) -> OrderRecord {
    OrderRecord {
        uuid,
        order_number: "SS-LZ2K3F9A".to_string(),
        first_name: "Nour".to_string(),
        last_name: "Hassan".to_string(),
        email: "nour@example.com".to_string(),
        phone: "+20 100 000 0000".to_string(),
        address: "12 Corniche Road".to_string(),
        city: City::Hurghada,
        delivery_period: DeliveryPeriod::Morning,
        subtotal: Decimal::from(40),
        shipping: Decimal::from(10),
        tax: Decimal::ZERO,
        total: Decimal::from(50),
        status,
        items: vec![OrderItemRecord {
            uuid: OrderItemUuid::from_uuid(Uuid::nil()),
            order_uuid: uuid,
            product_uuid: ProductUuid::from_uuid(Uuid::nil()),
            name: "Mug".to_string(),
            price: Decimal::from(20),
            quantity: 2,
            image: None,
        }],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_session() -> AdminSession {
    AdminSession {
        uuid: SessionUuid::from_uuid(Uuid::nil()),
        created_at: Timestamp::UNIX_EPOCH,
        expires_at: Timestamp::UNIX_EPOCH,
        last_used_at: None,
        revoked_at: None,
    }
}
