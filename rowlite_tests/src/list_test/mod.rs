use std::cell::Cell;
use std::rc::Rc;

use rowlite_core::cursor::{Cursor, MemCursor};
use rowlite_core::query::{Backend, Query};
use rowlite_core::row::{Row, RowItem};
use rowlite_core::storage::MemStore;
use rowlite_core::{LatLon, RowList};

mod load;

/// Seeds a three-row points-of-interest table with locales and locations.
fn poi_store() -> MemStore {
    let mut store = MemStore::new();
    store
        .create_table("poi", &["name", "locale", "location", "web"])
        .unwrap();
    store
        .insert(
            "poi",
            &[
                ("name", "Prague Castle"),
                ("locale", "en"),
                ("location", "50.0911497,14.4019937"),
            ],
        )
        .unwrap();
    store
        .insert(
            "poi",
            &[
                ("name", "Pražský hrad"),
                ("locale", "cs"),
                ("location", "50.0911497,14.4019937"),
            ],
        )
        .unwrap();
    store
        .insert(
            "poi",
            &[
                ("name", "Charles Bridge"),
                ("locale", "en"),
                ("location", "50.0865407,14.4114211"),
            ],
        )
        .unwrap();
    store
}

fn names(list: &RowList<Row>) -> Vec<String> {
    list.iter()
        .map(|row| row.get_string("name").unwrap_or_default().to_string())
        .collect()
}

/// A backend whose cursors record whether they were closed.
struct TrackingBackend {
    store: MemStore,
    closed: Rc<Cell<bool>>,
}

struct TrackingCursor {
    inner: MemCursor,
    closed: Rc<Cell<bool>>,
}

impl Cursor for TrackingCursor {
    fn count(&self) -> usize {
        self.inner.count()
    }

    fn position(&self) -> isize {
        self.inner.position()
    }

    fn move_to_first(&mut self) -> bool {
        self.inner.move_to_first()
    }

    fn move_to_next(&mut self) -> bool {
        self.inner.move_to_next()
    }

    fn column_count(&self) -> usize {
        self.inner.column_count()
    }

    fn column_name(&self, index: usize) -> Option<&str> {
        self.inner.column_name(index)
    }

    fn value(&self, index: usize) -> Option<&str> {
        self.inner.value(index)
    }

    fn close(&mut self) {
        self.closed.set(true);
        self.inner.close();
    }
}

impl Backend for TrackingBackend {
    fn query(&self, query: &Query) -> Option<Box<dyn Cursor>> {
        let cursor = self.store.select(query).ok()?;
        Some(Box::new(TrackingCursor {
            inner: cursor,
            closed: Rc::clone(&self.closed),
        }))
    }
}

/// A backend whose queries always fail.
struct FailingBackend;

impl Backend for FailingBackend {
    fn query(&self, _query: &Query) -> Option<Box<dyn Cursor>> {
        None
    }
}
