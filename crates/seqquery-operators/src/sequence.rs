//! `Sequence<T>`: an owned, ordered collection with every operator bound as
//! a method.
//!
//! No method mutates the sequence it is called on; each returns a freshly
//! allocated result that inherits this sequence's `QueryConfig`.

use seqquery_core::budget::ComparisonBudget;
use seqquery_core::config::QueryConfig;
use seqquery_core::element::Element;
use seqquery_core::types::Value;

use crate::group::Group;
use crate::key::KeySelector;
use crate::metrics::emit_op;
use crate::traits::Result;
use crate::{aggregate, filter, group, join, map, set, sort};

#[derive(Debug, Clone, Default)]
pub struct Sequence<T> {
    items: Vec<T>,
    config: QueryConfig,
}

impl<T> Sequence<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            config: QueryConfig::default(),
        }
    }

    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn derive<U>(&self, items: Vec<U>) -> Sequence<U> {
        Sequence {
            items,
            config: self.config,
        }
    }

    fn budget(&self) -> ComparisonBudget {
        ComparisonBudget::from_config(&self.config)
    }

    // ---- filtering & projection -------------------------------------------

    pub fn where_<F>(&self, pred: F) -> Sequence<T>
    where
        T: Clone,
        F: FnMut(&T, usize) -> bool,
    {
        self.derive(filter::where_(&self.items, pred))
    }

    /// `None` when this sequence is empty.
    pub fn select<U, F>(&self, proj: F) -> Option<Sequence<U>>
    where
        F: FnMut(&T, usize) -> U,
    {
        map::select(&self.items, proj).map(|items| self.derive(items))
    }

    pub fn zip<U, R, F>(&self, other: &[U], f: F) -> Sequence<R>
    where
        F: FnMut(&T, &U) -> R,
    {
        self.derive(map::zip(&self.items, other, f))
    }

    pub fn skip(&self, count: usize) -> Sequence<T>
    where
        T: Clone,
    {
        self.derive(filter::skip(&self.items, count))
    }

    pub fn take(&self, count: usize) -> Sequence<T>
    where
        T: Clone,
    {
        self.derive(filter::take(&self.items, count))
    }

    pub fn skip_while<F>(&self, pred: F) -> Sequence<T>
    where
        T: Clone,
        F: FnMut(&T, usize) -> bool,
    {
        self.derive(filter::skip_while(&self.items, pred))
    }

    pub fn take_while<F>(&self, pred: F) -> Sequence<T>
    where
        T: Clone,
        F: FnMut(&T, usize) -> bool,
    {
        self.derive(filter::take_while(&self.items, pred))
    }

    // ---- aggregation -------------------------------------------------------

    pub fn first<F>(&self, pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        aggregate::first(&self.items, pred)
    }

    pub fn last<F>(&self, pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        aggregate::last(&self.items, pred)
    }

    pub fn aggregate<F>(&self, f: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(T, &T, usize, &[T]) -> T,
    {
        aggregate::aggregate(&self.items, f)
    }

    pub fn all<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        aggregate::all(&self.items, pred)
    }

    pub fn any<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        aggregate::any(&self.items, pred)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Plain concatenation with every present sequence; not deduplicated.
    pub fn union<'a, I, S>(&'a self, others: I) -> Sequence<T>
    where
        T: Clone + 'a,
        I: IntoIterator<Item = S>,
        S: Into<Option<&'a [T]>>,
    {
        self.derive(set::union(&self.items, others))
    }
}

impl<T: Element> Sequence<T> {
    /// Flatten the list every element carries under `key`.
    pub fn select_many(&self, key: &KeySelector) -> Result<Sequence<Value>> {
        Ok(self.derive(map::select_many(&self.items, key)?))
    }

    pub fn select_many_with<R, F>(&self, key: &KeySelector, result: F) -> Result<Sequence<R>>
    where
        F: FnMut(&T, &Value, usize) -> R,
    {
        Ok(self.derive(map::select_many_with(&self.items, key, result)?))
    }

    pub fn min(&self, key: &KeySelector) -> Result<Option<&T>> {
        aggregate::min(&self.items, key)
    }

    pub fn max(&self, key: &KeySelector) -> Result<Option<&T>> {
        aggregate::max(&self.items, key)
    }

    pub fn min_by(&self, property: &str) -> Result<Option<&T>> {
        aggregate::min_by(&self.items, property)
    }

    pub fn max_by(&self, property: &str) -> Result<Option<&T>> {
        aggregate::max_by(&self.items, property)
    }

    pub fn join_by_key<U, R, F>(
        &self,
        inner: &[U],
        outer_key: &KeySelector,
        inner_key: &KeySelector,
        result: F,
    ) -> Result<Sequence<R>>
    where
        U: Element,
        F: FnMut(&T, &U) -> R,
    {
        let out = join::join_by_key(
            &self.items,
            inner,
            outer_key,
            inner_key,
            &self.budget(),
            result,
        )?;
        emit_op(
            &self.config,
            "join_by_key",
            &[("outer", self.len()), ("inner", inner.len()), ("out", out.len())],
        );
        Ok(self.derive(out))
    }

    pub fn group_join_by_key<U, R, F>(
        &self,
        inner: &[U],
        outer_key: &KeySelector,
        inner_key: &KeySelector,
        result: F,
    ) -> Result<Sequence<R>>
    where
        U: Element,
        F: FnMut(&T, &[&U]) -> R,
    {
        let out = join::group_join_by_key(
            &self.items,
            inner,
            outer_key,
            inner_key,
            &self.budget(),
            result,
        )?;
        emit_op(
            &self.config,
            "group_join_by_key",
            &[("outer", self.len()), ("inner", inner.len()), ("out", out.len())],
        );
        Ok(self.derive(out))
    }

    pub fn group_by_element<E, F>(
        &self,
        key: &KeySelector,
        element_selector: F,
    ) -> Result<Sequence<Group<Vec<E>>>>
    where
        F: FnMut(&T) -> E,
    {
        let groups = group::group_by_element(&self.items, key, element_selector)?;
        emit_op(
            &self.config,
            "group_by",
            &[("in", self.len()), ("groups", groups.len())],
        );
        Ok(self.derive(groups))
    }

    /// One value per key; see [`group::group_by_result`] for the overwrite
    /// behaviour on repeated keys.
    pub fn group_by_result<E, R, FE, FR>(
        &self,
        key: &KeySelector,
        element_selector: Option<FE>,
        result_selector: FR,
    ) -> Result<Sequence<Group<R>>>
    where
        FE: FnMut(&T) -> E,
        FR: FnMut(&Value, E) -> R,
    {
        let groups =
            group::group_by_result(&self.items, key, element_selector, result_selector)?;
        emit_op(
            &self.config,
            "group_by",
            &[("in", self.len()), ("groups", groups.len())],
        );
        Ok(self.derive(groups))
    }
}

impl<T: Element + Clone> Sequence<T> {
    /// Sorted copy, ascending. `None` when this sequence is empty.
    pub fn order_by(&self, key: &KeySelector) -> Result<Option<Sequence<T>>> {
        Ok(sort::order_by(&self.items, key)?.map(|items| self.derive(items)))
    }

    /// Sorted copy, descending. `None` when this sequence is empty.
    pub fn order_by_desc(&self, key: &KeySelector) -> Result<Option<Sequence<T>>> {
        Ok(sort::order_by_desc(&self.items, key)?.map(|items| self.derive(items)))
    }

    /// Structurally distinct elements of this sequence. `None` when empty.
    pub fn distinct(&self) -> Result<Option<Sequence<T>>> {
        self.distinct_with(std::iter::empty::<&[T]>())
    }

    /// Structurally distinct elements of this sequence followed by every
    /// present sequence in `others`. `None` when all of them are empty.
    pub fn distinct_with<'a, I, S>(&'a self, others: I) -> Result<Option<Sequence<T>>>
    where
        T: 'a,
        I: IntoIterator<Item = S>,
        S: Into<Option<&'a [T]>>,
    {
        let out = set::distinct(&self.items, others, &self.budget())?;
        emit_op(
            &self.config,
            "distinct",
            &[("in", self.len()), ("out", out.as_ref().map_or(0, Vec::len))],
        );
        Ok(out.map(|items| self.derive(items)))
    }

    pub fn intersect(&self, other: &[T]) -> Result<Sequence<T>> {
        let out = set::intersect(&self.items, other, &self.budget())?;
        emit_op(
            &self.config,
            "intersect",
            &[("left", self.len()), ("right", other.len()), ("out", out.len())],
        );
        Ok(self.derive(out))
    }

    pub fn except(&self, other: &[T]) -> Result<Sequence<T>> {
        let out = set::except(&self.items, other, &self.budget())?;
        emit_op(
            &self.config,
            "except",
            &[("left", self.len()), ("right", other.len()), ("out", out.len())],
        );
        Ok(self.derive(out))
    }

    pub fn group_by(&self, key: &KeySelector) -> Result<Sequence<Group<Vec<T>>>> {
        let groups = group::group_by(&self.items, key)?;
        emit_op(
            &self.config,
            "group_by",
            &[("in", self.len()), ("groups", groups.len())],
        );
        Ok(self.derive(groups))
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for Sequence<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.items == *other
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence::new(items)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl Sequence<Value> {
    /// Build a value sequence from a JSON array (any other JSON value becomes
    /// a one-element sequence).
    pub fn from_json(json: serde_json::Value) -> Self {
        Sequence::new(Value::list_from_json(json))
    }
}
