//! The ordered list of rows in a table.

use std::fmt;
use std::rc::Rc;
use std::slice;

use crate::cursor::Cursor;
use crate::query::{Backend, Query};
use crate::row::{Row, RowItem};

/// An ordered, wholesale-replaceable collection of rows populated from a
/// query.
///
/// Items are built by the factory supplied at construction; a factory that
/// returns `None` skips the current position. The accept hook can drop
/// individual items during a load. A `load` call replaces the contents
/// entirely; the collection is never a live view onto the backend.
pub struct RowList<E: RowItem> {
    items: Vec<E>,
    factory: Box<dyn Fn() -> Option<E>>,
    accept: Box<dyn Fn(&E) -> bool>,
    backend: Option<Rc<dyn Backend>>,
}

impl<E: RowItem> RowList<E> {
    /// Creates an empty list with the given item factory.
    pub fn new(factory: impl Fn() -> Option<E> + 'static) -> Self {
        Self {
            items: Vec::new(),
            factory: Box::new(factory),
            accept: Box::new(|_| true),
            backend: None,
        }
    }

    /// Creates an empty list bound to `backend` for the `reload*` methods.
    /// The binding cannot change afterwards.
    pub fn with_backend(
        factory: impl Fn() -> Option<E> + 'static,
        backend: Rc<dyn Backend>,
    ) -> Self {
        let mut list = Self::new(factory);
        list.backend = Some(backend);
        list
    }

    /// Installs the hook called before an item is appended during a load.
    /// The default accepts everything the factory produced.
    pub fn accept_if(mut self, accept: impl Fn(&E) -> bool + 'static) -> Self {
        self.accept = Box::new(accept);
        self
    }

    /// The number of items in this list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if this list contains no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`.
    pub fn get(&self, index: usize) -> Option<&E> {
        self.items.get(index)
    }

    /// Removes the item at `index`. Indexes past the end are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Removes all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Resets the list. Use the load methods to see backend changes.
    pub fn update(&mut self) {
        self.clear();
    }

    /// True when a backend is bound for the `reload*` methods.
    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Forward traversal over the current contents. Restartable any number
    /// of times, always reflecting the contents at the time of the call.
    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Replaces the contents with all rows of `table`, optionally restricted
    /// to `locale`. `max` caps the number of accepted items; 0 means
    /// unbounded.
    pub fn load(&mut self, backend: &dyn Backend, table: &str, locale: Option<&str>, max: usize) {
        self.load_filtered(backend, table, locale, None, &[], None, max);
    }

    /// Replaces the contents with the rows matching `selection`, a predicate
    /// with `?` placeholders bound by `args` in order. A supplied locale is
    /// conjoined onto the selection, its value appended as the last
    /// argument. A failed query replaces the contents with nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn load_filtered(
        &mut self,
        backend: &dyn Backend,
        table: &str,
        locale: Option<&str>,
        selection: Option<&str>,
        args: &[&str],
        order_by: Option<&str>,
        max: usize,
    ) {
        let mut query = Query::table(table);
        if let Some(selection) = selection {
            query = query.filter(selection, args);
        }
        if let Some(order_by) = order_by {
            query = query.order_by(order_by);
        }
        let query = query.with_locale(locale);

        let cursor = backend.query(&query);
        self.items.clear();
        let Some(mut cursor) = cursor else { return };
        if !cursor.move_to_first() {
            cursor.close();
            return;
        }
        let cap = if max == 0 { usize::MAX } else { max };
        loop {
            if let Some(mut item) = (self.factory)() {
                item.load(&*cursor);
                if (self.accept)(&item) {
                    self.items.push(item);
                    if self.items.len() >= cap {
                        break;
                    }
                }
            }
            if !cursor.move_to_next() {
                break;
            }
        }
        cursor.close();
    }

    /// Repeats [`RowList::load`] against the bound backend. Without a bound
    /// backend the contents stay untouched.
    pub fn reload(&mut self, table: &str, locale: Option<&str>, max: usize) {
        self.reload_filtered(table, locale, None, &[], None, max);
    }

    /// Repeats [`RowList::load_filtered`] against the bound backend. Without
    /// a bound backend the contents stay untouched.
    #[allow(clippy::too_many_arguments)]
    pub fn reload_filtered(
        &mut self,
        table: &str,
        locale: Option<&str>,
        selection: Option<&str>,
        args: &[&str],
        order_by: Option<&str>,
        max: usize,
    ) {
        let Some(backend) = self.backend.clone() else {
            return;
        };
        self.load_filtered(
            backend.as_ref(),
            table,
            locale,
            selection,
            args,
            order_by,
            max,
        );
    }
}

impl RowList<Row> {
    /// A list of plain rows.
    pub fn of_rows() -> Self {
        Self::new(|| Some(Row::new()))
    }
}

impl<'a, E: RowItem> IntoIterator for &'a RowList<E> {
    type Item = &'a E;
    type IntoIter = slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<E: RowItem + fmt::Debug> fmt::Debug for RowList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowList")
            .field("items", &self.items)
            .field("bound", &self.backend.is_some())
            .finish()
    }
}
