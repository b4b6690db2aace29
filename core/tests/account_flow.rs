//! Integration test wiring the services together over the in-memory stores

use std::sync::Arc;

use ps_core::{
    AuthService, InMemoryProductRepository, InMemoryUserRepository, NewProduct, ProductService,
    TokenService, UserRepository, UserRole, UserService,
};
use ps_shared::config::AuthConfig;
use ps_shared::types::PageParams;

#[tokio::test]
async fn test_register_login_and_read_profile() {
    let config = AuthConfig::new("integration-secret").with_bcrypt_cost(4);
    let users = Arc::new(InMemoryUserRepository::new());
    let tokens = Arc::new(TokenService::from_config(&config));
    let auth = AuthService::new(users.clone(), tokens.clone(), &config);
    let profiles = UserService::new(users.clone(), &config);

    auth.register("a@b.com", "secret1", None).await.unwrap();
    let token = auth.login("a@b.com", "secret1").await.unwrap();

    let user_id = tokens.authenticate(&token).unwrap();
    let profile = profiles.profile(user_id).await.unwrap();

    assert_eq!(profile.email, "a@b.com");
    assert_eq!(profile.role, UserRole::User);
    assert_ne!(users.find_by_id(user_id).await.unwrap().password_hash, "secret1");
}

#[tokio::test]
async fn test_product_lifecycle() {
    let products = ProductService::new(Arc::new(InMemoryProductRepository::new()));

    assert!(products.create(NewProduct::new("Leash", 0, 5)).await.is_err());

    let leash = products.create(NewProduct::new("Leash", 999, 5)).await.unwrap();
    products.create(NewProduct::new("Bowl", 450, 2)).await.unwrap();

    let page = products.list(PageParams::new(1, 0)).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 2);

    products.delete(leash.id).await.unwrap();
    assert!(products.get(leash.id).await.unwrap_err().is_not_found());
    assert_eq!(products.list(PageParams::default()).await.unwrap().total, 1);
}
