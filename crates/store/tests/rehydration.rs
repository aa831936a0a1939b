//! Persistence round-trip tests over the file-backed persister.
//!
//! These exercise the full restart path: mutate a store, drop it, build a
//! fresh one over the same data directory, and check the rehydrated
//! state.

use std::fs;
use std::sync::Arc;

use rust_decimal::Decimal;
use tempfile::TempDir;
use verdant_core::{Product, ProductId};
use verdant_store::persist::{FilePersister, Persister};
use verdant_store::{CartStore, ClientState, StorageConfig, WishlistStore};

fn persister(dir: &TempDir) -> Arc<dyn Persister> {
    Arc::new(FilePersister::open(dir.path()).expect("open persister"))
}

#[test]
fn cart_rehydrates_order_for_order() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let mut cart = CartStore::new(persister(&dir));
        cart.add_item(Product::new("c", "Cactus", Decimal::new(899, 2)));
        cart.add_item(Product::new("a", "Aloe", Decimal::new(1250, 2)));
        cart.add_item(Product::new("b", "Basil", Decimal::new(300, 2)));
        cart.increase_qty(&ProductId::new("a"));
    }

    let cart = CartStore::new(persister(&dir));
    let lines: Vec<(&str, u32, Decimal)> = cart
        .items()
        .iter()
        .map(|line| {
            (
                line.product().id.as_str(),
                line.quantity(),
                line.product().price,
            )
        })
        .collect();

    assert_eq!(
        lines,
        vec![
            ("c", 1, Decimal::new(899, 2)),
            ("a", 2, Decimal::new(1250, 2)),
            ("b", 1, Decimal::new(300, 2)),
        ]
    );
    assert_eq!(cart.total(), Decimal::new(3699, 2));
}

#[test]
fn wishlist_rehydrates_with_optional_fields_intact() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let mut wishlist = WishlistStore::new(persister(&dir));
        wishlist.add(
            Product::new("m", "Monstera", Decimal::from(40))
                .with_category("plants")
                .with_image("https://cdn.example.com/m.jpg")
                .with_discount(Decimal::from(10)),
        );
    }

    let wishlist = WishlistStore::new(persister(&dir));
    assert!(wishlist.contains(&ProductId::new("m")));
    let saved = wishlist.products().first().expect("saved product");
    assert_eq!(saved.category.as_deref(), Some("plants"));
    assert_eq!(saved.discounted_price(), Decimal::from(36));
}

#[test]
fn corrupt_cart_snapshot_loads_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("cart-storage.json"),
        "{\"items\": [truncated",
    )
    .expect("write corrupt snapshot");

    let cart = CartStore::new(persister(&dir));
    assert!(cart.is_empty());
}

#[test]
fn next_mutation_overwrites_corrupt_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("cart-storage.json"), "not json")
        .expect("write corrupt snapshot");

    {
        let mut cart = CartStore::new(persister(&dir));
        cart.add_item(Product::new("a", "Aloe", Decimal::from(5)));
    }

    let cart = CartStore::new(persister(&dir));
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total(), Decimal::from(5));
}

#[test]
fn zero_quantity_lines_in_a_tampered_snapshot_are_dropped() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("cart-storage.json"),
        r#"[{"id":"a","title":"Aloe","price":"5","quantity":0},
            {"id":"b","title":"Basil","price":"3","quantity":2}]"#,
    )
    .expect("write snapshot");

    let cart = CartStore::new(persister(&dir));
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total(), Decimal::from(6));
}

#[test]
fn stores_persist_under_distinct_keys() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let config = StorageConfig::new(dir.path());
        let mut state = ClientState::open(&config).expect("open state");
        state
            .cart_mut()
            .add_item(Product::new("a", "Aloe", Decimal::from(5)));
        state
            .wishlist_mut()
            .add(Product::new("b", "Basil", Decimal::from(3)));
        state.session_mut().set_token("tok");
    }

    assert!(dir.path().join("cart-storage.json").exists());
    assert!(dir.path().join("wishlist-store.json").exists());
    assert!(dir.path().join("user-store.json").exists());

    let state = ClientState::open(&StorageConfig::new(dir.path())).expect("reopen state");
    assert_eq!(state.cart().len(), 1);
    assert!(state.wishlist().contains(&ProductId::new("b")));
    assert_eq!(state.session().token(), Some("tok"));
}

#[test]
fn clearing_a_cart_persists_the_empty_state() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let mut cart = CartStore::new(persister(&dir));
        cart.add_item(Product::new("a", "Aloe", Decimal::from(5)));
        cart.clear();
    }

    let cart = CartStore::new(persister(&dir));
    assert!(cart.is_empty());
}
