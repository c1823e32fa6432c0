use super::*;

#[test]
fn load_keeps_result_set_order() {
    let store = poi_store();
    let mut list = RowList::of_rows();
    list.load(&store, "poi", None, 0);

    assert_eq!(list.len(), 3);
    assert_eq!(names(&list), ["Prague Castle", "Pražský hrad", "Charles Bridge"]);
}

#[test]
fn load_with_locale_restricts_rows() {
    let store = poi_store();
    let mut list = RowList::of_rows();

    list.load(&store, "poi", Some("en"), 0);
    assert_eq!(names(&list), ["Prague Castle", "Charles Bridge"]);

    list.load(&store, "poi", Some("cs"), 0);
    assert_eq!(names(&list), ["Pražský hrad"]);
}

#[test]
fn with_locale_conjoins_clause_and_appends_argument() {
    let query = Query::table("poi")
        .filter("web = ?", &["w"])
        .with_locale(Some("en"));
    assert_eq!(query.selection.as_deref(), Some("web = ? and locale = ?"));
    assert_eq!(query.args, ["w", "en"]);

    let bare = Query::table("poi").with_locale(Some("en"));
    assert_eq!(bare.selection.as_deref(), Some("locale = ?"));
    assert_eq!(bare.args, ["en"]);

    let blank = Query::table("poi").with_locale(Some("  "));
    assert_eq!(blank.selection, None);
    assert!(blank.args.is_empty());

    let none = Query::table("poi").with_locale(None);
    assert_eq!(none.selection, None);
}

#[test]
fn max_caps_accepted_items_and_closes_the_cursor() {
    let closed = Rc::new(Cell::new(false));
    let backend = TrackingBackend {
        store: poi_store(),
        closed: Rc::clone(&closed),
    };

    let mut list = RowList::of_rows();
    list.load_filtered(&backend, "poi", None, None, &[], None, 2);

    assert_eq!(list.len(), 2);
    assert_eq!(names(&list), ["Prague Castle", "Pražský hrad"]);
    assert!(closed.get());
}

#[test]
fn empty_result_closes_the_cursor() {
    let closed = Rc::new(Cell::new(false));
    let backend = TrackingBackend {
        store: poi_store(),
        closed: Rc::clone(&closed),
    };

    let mut list = RowList::of_rows();
    list.load(&backend, "poi", Some("xx"), 0);

    assert!(list.is_empty());
    assert!(closed.get());
}

#[test]
fn consecutive_loads_fully_replace_contents() {
    let store = poi_store();
    let mut list = RowList::of_rows();

    list.load(&store, "poi", Some("en"), 0);
    assert_eq!(list.len(), 2);

    list.load(&store, "poi", Some("cs"), 0);
    assert_eq!(names(&list), ["Pražský hrad"]);
}

#[test]
fn failed_query_replaces_contents_with_nothing() {
    let store = poi_store();
    let mut list = RowList::of_rows();
    list.load(&store, "poi", None, 0);
    assert_eq!(list.len(), 3);

    list.load(&FailingBackend, "poi", None, 0);
    assert!(list.is_empty());
}

#[test]
fn reload_without_bound_backend_is_a_no_op() {
    let store = poi_store();
    let mut list = RowList::of_rows();
    list.load(&store, "poi", None, 0);
    assert_eq!(list.len(), 3);

    list.reload("poi", Some("cs"), 0);
    assert_eq!(list.len(), 3);
    assert!(!list.has_backend());
}

#[test]
fn reload_uses_the_bound_backend() {
    let backend: Rc<dyn Backend> = Rc::new(poi_store());
    let mut list = RowList::with_backend(|| Some(Row::new()), backend);

    list.reload("poi", Some("en"), 0);
    assert_eq!(list.len(), 2);
    assert!(list.has_backend());
}

#[test]
fn blank_cell_drops_the_key_but_keeps_the_row() {
    let mut store = MemStore::new();
    store.create_table("users", &["name"]).unwrap();
    store.insert("users", &[("name", "Alice")]).unwrap();
    store.insert("users", &[("name", "")]).unwrap();
    store.insert("users", &[("name", "Bob")]).unwrap();

    let mut list = RowList::of_rows();
    list.load(&store, "users", None, 0);

    assert_eq!(list.len(), 3);
    assert!(list.get(0).unwrap().has_data("name"));
    assert!(!list.get(1).unwrap().has_data("name"));
    assert!(list.get(1).unwrap().has_id());
    assert!(list.get(2).unwrap().has_data("name"));
}

#[test]
fn load_with_filter_and_order() {
    let mut store = MemStore::new();
    store.create_table("users", &["name", "age"]).unwrap();
    store.insert("users", &[("name", "a"), ("age", "30")]).unwrap();
    store.insert("users", &[("name", "b"), ("age", "20")]).unwrap();
    store.insert("users", &[("name", "c"), ("age", "10")]).unwrap();

    let mut list = RowList::of_rows();
    list.load_filtered(
        &store,
        "users",
        None,
        Some("age > ?"),
        &["15"],
        Some("age desc"),
        0,
    );

    assert_eq!(names(&list), ["a", "b"]);
}

#[test]
fn iteration_is_restartable() {
    let store = poi_store();
    let mut list = RowList::of_rows();
    list.load(&store, "poi", None, 0);

    let first: Vec<_> = list.iter().map(|r| r.id()).collect();
    let second: Vec<_> = list.iter().map(|r| r.id()).collect();
    assert_eq!(first, second);
    assert_eq!(first, [1, 2, 3]);
}

#[test]
fn remove_and_clear() {
    let store = poi_store();
    let mut list = RowList::of_rows();
    list.load(&store, "poi", None, 0);

    list.remove(0);
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).unwrap().get_string("name"), Some("Pražský hrad"));

    list.remove(10); // past the end, ignored
    assert_eq!(list.len(), 2);

    list.update();
    assert!(list.is_empty());
}
