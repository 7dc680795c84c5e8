mod helpers;

use helpers::{args, object};
use serde_json::json;
use sim_host::{HostError, api};
use sim_store::CommerceError;

#[test]
fn init_session_isolates_the_calling_thread() {
    let a = api::init_session();
    api::write_file("draft.txt", "from a");
    api::add_item("lamp");
    assert_eq!(api::current(), a);

    let b = api::init_session();
    assert_eq!(api::current(), b);
    assert_eq!(api::read_file("draft.txt"), None);
    assert!(api::get_inventory().is_empty());

    assert_eq!(
        a.with(|s| s.files.read("draft.txt").map(str::to_string)),
        Some("from a".into())
    );
    assert_eq!(api::release_session(), Some(b));
    assert!(api::current().is_default());
    assert_eq!(api::read_file("draft.txt"), None);
}

#[test]
fn api_operations_follow_the_bound_session() {
    let outer = api::init_session();
    api::with_session(|session| {
        assert_ne!(session.id(), outer.id());
        api::write_file("todo.txt", "ship it");
        assert_eq!(api::read_file("todo.txt").as_deref(), Some("ship it"));
        assert_eq!(api::read_file("other.txt"), None);
        assert_eq!(api::list_files(""), vec!["todo.txt"]);
        assert!(api::delete_file("todo.txt"));
        assert_eq!(api::read_file("todo.txt"), None);

        api::add_item("sword");
        api::add_item("sword");
        api::add_item("shield");
        assert_eq!(api::get_inventory(), vec!["sword", "sword", "shield"]);
        let stats = api::get_game_stats();
        assert_eq!((stats.total_items, stats.unique_items), (3, 2));

        api::post_content("one");
        api::post_content("two");
        assert_eq!(api::get_feed(), vec!["one", "two"]);
        assert_eq!(api::get_user_profile().post_count, 2);

        assert_eq!(api::add_memory("likes tea"), 1);
        assert_eq!(api::search_memories("TEA").len(), 1);
    });

    api::with_session(|_| {
        assert!(api::get_inventory().is_empty());
        assert!(api::get_feed().is_empty());
        assert!(api::list_files("").is_empty());
        assert!(api::search_memories("tea").is_empty());
    });

    assert_eq!(api::current(), outer);
    assert_eq!(api::read_file("todo.txt"), None);
    api::release_session();
}

#[test]
fn api_checkout_reports_domain_errors() {
    api::with_session(|session| {
        session.with_mut(|s| {
            s.commerce.set_stock("A", 3).unwrap();
            s.commerce.add_to_cart("A", 5).unwrap();
        });
        let err = api::checkout().unwrap_err();
        assert!(matches!(
            err,
            HostError::Commerce(CommerceError::InsufficientStock { requested: 5, available: 3, .. })
        ));
        session.with(|s| {
            assert_eq!(s.commerce.stock_of("A"), 3);
            assert_eq!(s.commerce.cart().get("A"), Some(&5));
            assert!(s.commerce.orders().is_empty());
        });

        session.with_mut(|s| s.commerce.set_stock("A", 100).unwrap());
        let order = api::checkout().unwrap();
        assert_eq!(order.lines.get("A"), Some(&5));
        session.with(|s| {
            assert_eq!(s.commerce.stock_of("A"), 95);
            assert!(s.commerce.cart().is_empty());
            assert_eq!(s.commerce.orders().len(), 1);
        });
    });
}

#[test]
fn api_augment_uses_current_session() {
    api::with_session(|_| {
        let out = api::augment(
            "notes-save_note",
            &args(json!({"path": "n1", "text": "remember"})),
            object(json!({"saved": true})),
        );
        assert_eq!(out, object(json!({"saved": true})));
        assert_eq!(api::read_file("n1").as_deref(), Some("remember"));

        let out = api::augment(
            "notes-search",
            &args(json!({"path": "n1"})),
            object(json!({"content": null})),
        );
        assert_eq!(out["content"], "remember");
    });
}
