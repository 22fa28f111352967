//! Binding between a named item list and the elements tagged with its name.

use itemdom::{Content, Element, find_by_data, find_element, find_element_mut};
use log::{debug, warn};

use crate::cache::ComponentCache;
use crate::component::Component;
use crate::config::RepositoryOptions;
use crate::error::{RepositoryError, Result};
use crate::item::Item;
use crate::markup::{ITEM, ITEM_END, ITEM_START, REPOSITORY};
use crate::store::Store;

/// A named item list bound to elements of a tree.
///
/// The bound elements are the ones tagged with `repository = name` when the
/// repository is bound; elements tagged later are not picked up. Bound
/// elements are resolved by ID, so their IDs must be unique in the tree. Every
/// operation takes the tree root so the caller keeps ownership of the tree.
///
/// # Example
///
/// ```
/// use item_repository::{Repository, RepositoryOptions, Store};
/// use itemdom::Element;
/// use serde_json::json;
///
/// let mut root = Element::box_().child(Element::box_().id("list").data("repository", "users"));
/// let store = Store::new();
/// let render = |item: &serde_json::Value| Element::text(item["name"].to_string());
///
/// let mut users = Repository::bind(&store, &mut root, "users", render, RepositoryOptions::default())?;
/// users.add(&mut root, json!({"id": 1, "name": "A"}))?;
///
/// assert_eq!(users.index_of(&json!(1)), Some(0));
/// # Ok::<(), item_repository::RepositoryError>(())
/// ```
pub struct Repository<T, C>
where
    T: Item,
    C: Component<T>,
{
    name: String,
    store: Store<T>,
    component: C,
    options: RepositoryOptions<C::Config>,
    /// IDs of the bound elements, in document order.
    bound: Vec<String>,
    cache: ComponentCache,
}

impl<T, C> Repository<T, C>
where
    T: Item,
    C: Component<T>,
{
    /// Bind the list `name` of `store` to the elements under `root` tagged with it.
    ///
    /// Items already present in the markup are parsed, removed and added
    /// again through [`Repository::add_all`], so they end up in the list and
    /// rendered by `component` in every bound element.
    pub fn bind(
        store: &Store<T>,
        root: &mut Element,
        name: impl Into<String>,
        component: C,
        options: RepositoryOptions<C::Config>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(RepositoryError::InvalidName);
        }
        options.validate()?;

        let bound: Vec<String> = find_by_data(root, REPOSITORY, &name)
            .iter()
            .map(|el| el.id.clone())
            .collect();
        if let Some(duplicate) = bound
            .iter()
            .enumerate()
            .find_map(|(i, id)| bound[..i].contains(id).then_some(id))
        {
            return Err(RepositoryError::DuplicateBoundElement(duplicate.clone()));
        }
        store.ensure_list(&name);

        debug!(
            "Binding repository '{}' to {} element(s)",
            name,
            bound.len()
        );

        let mut repository = Self {
            name,
            store: store.clone(),
            component,
            options,
            bound,
            cache: ComponentCache::new(),
        };

        let existing = repository.take_existing_items(root)?;
        if !existing.is_empty() {
            debug!(
                "Seeding repository '{}' with {} item(s) from markup",
                repository.name,
                existing.len()
            );
            repository.add_all(root, existing)?;
        }

        Ok(repository)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &RepositoryOptions<C::Config> {
        &self.options
    }

    /// IDs of the bound elements, in document order.
    pub fn bound_elements(&self) -> &[String] {
        &self.bound
    }

    pub fn store(&self) -> &Store<T> {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len(&self.name)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Add a single item. See [`Repository::add_all`].
    pub fn add(&mut self, root: &mut Element, item: T) -> Result<&mut Self> {
        self.add_all(root, [item])
    }

    /// Append items to the list and render them into every bound element.
    ///
    /// Each rendered element goes right before the end marker if there is
    /// one, otherwise after the start marker and the items following it,
    /// otherwise at the end. Nothing changes if an item fails to serialize.
    pub fn add_all(
        &mut self,
        root: &mut Element,
        items: impl IntoIterator<Item = T>,
    ) -> Result<&mut Self> {
        let entries = items
            .into_iter()
            .map(with_snapshot)
            .collect::<Result<Vec<_>>>()?;

        debug!("Adding {} item(s) to '{}'", entries.len(), self.name);

        self.store
            .extend(&self.name, entries.iter().map(|(item, _)| item.clone()));
        self.render_into_bound(root, &entries);

        Ok(self)
    }

    /// Remove a single item by ID. See [`Repository::remove_all`].
    pub fn remove(&mut self, root: &mut Element, id: T::Id) -> &mut Self {
        self.remove_all(root, [id])
    }

    /// Remove items by ID.
    ///
    /// For each ID the first item with that ID is dropped from the list;
    /// unknown IDs are ignored. Every rendered element carrying one of the
    /// IDs is removed from every bound element.
    pub fn remove_all(
        &mut self,
        root: &mut Element,
        ids: impl IntoIterator<Item = T::Id>,
    ) -> &mut Self {
        let ids: Vec<T::Id> = ids.into_iter().collect();

        let removed = self
            .store
            .update(&self.name, |items| {
                let mut removed = 0;
                for id in &ids {
                    if let Some(index) = items.iter().position(|item| item.id() == *id) {
                        items.remove(index);
                        removed += 1;
                    }
                }
                removed
            })
            .unwrap_or(0);

        debug!(
            "Removed {} of {} requested item(s) from '{}'",
            removed,
            ids.len(),
            self.name
        );

        for bound in &self.bound {
            let Some(el) = find_element_mut(root, bound) else {
                warn!("Bound element '{bound}' of '{}' is gone", self.name);
                continue;
            };
            el.retain_children(|child| {
                !embedded_id::<T>(child).is_some_and(|child_id| ids.contains(&child_id))
            });
        }

        if self.options.cache_components {
            for id in &ids {
                if let Some(key) = cache_key(id) {
                    self.cache.remove(&key);
                }
            }
        }

        self
    }

    /// Set the selection state of a single item. See [`Repository::select_all`].
    pub fn select(&mut self, root: &mut Element, id: T::Id, value: bool) -> &mut Self {
        self.select_all(root, [id], value)
    }

    /// Set the selection state of items by ID.
    ///
    /// The first item with each ID gets [`Item::set_selected`]; unknown IDs
    /// are ignored. Rendered elements carrying the IDs get the selected class
    /// added when `value` is true and removed otherwise.
    pub fn select_all(
        &mut self,
        root: &mut Element,
        ids: impl IntoIterator<Item = T::Id>,
        value: bool,
    ) -> &mut Self {
        let ids: Vec<T::Id> = ids.into_iter().collect();

        self.store.update(&self.name, |items| {
            for id in &ids {
                if let Some(item) = items.iter_mut().find(|item| item.id() == *id) {
                    item.set_selected(value);
                }
            }
        });

        debug!(
            "Setting selected={} on {} item(s) of '{}'",
            value,
            ids.len(),
            self.name
        );

        let class_name = &self.options.selected_class_name;
        for bound in &self.bound {
            let Some(el) = find_element_mut(root, bound) else {
                warn!("Bound element '{bound}' of '{}' is gone", self.name);
                continue;
            };
            let Content::Children(children) = &mut el.content else {
                continue;
            };
            for child in children {
                if !embedded_id::<T>(child).is_some_and(|child_id| ids.contains(&child_id)) {
                    continue;
                }
                if value {
                    child.add_class(class_name.as_str());
                } else {
                    child.remove_class(class_name);
                }
            }
        }

        self
    }

    /// Re-render the whole list into every bound element.
    ///
    /// All item elements are removed and the cache is reset before the
    /// current list is rendered again in order.
    pub fn update(&mut self, root: &mut Element) -> Result<()> {
        let entries = self
            .store
            .get_all(&self.name)
            .into_iter()
            .map(with_snapshot)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Refreshing '{}' with {} item(s)",
            self.name,
            entries.len()
        );

        for bound in &self.bound {
            if let Some(el) = find_element_mut(root, bound) {
                el.retain_children(|child| !child.has_data(ITEM));
            }
        }
        self.cache.clear();
        self.render_into_bound(root, &entries);

        Ok(())
    }

    /// Index of the first item with the given ID.
    pub fn index_of(&self, id: &T::Id) -> Option<usize> {
        self.store
            .read(&self.name, |items| items.iter().position(|item| item.id() == *id))
            .flatten()
    }

    /// Snapshot of all items, in insertion order.
    pub fn get_all(&self) -> Vec<T> {
        self.store.get_all(&self.name)
    }

    /// Mutate the list directly.
    ///
    /// Bound elements are not touched; call [`Repository::update`] to bring
    /// them back in sync.
    pub fn with_items_mut<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Vec<T>) -> R,
    {
        self.store.update(&self.name, f)
    }

    /// The cached rendered element for `id` in the first bound element that has one.
    ///
    /// Always `None` unless [`RepositoryOptions::cache_components`] is set.
    pub fn get_component<'a>(&self, root: &'a Element, id: &T::Id) -> Option<&'a Element> {
        self.get_components(root, id).into_iter().next()
    }

    /// The cached rendered elements for `id`, one per bound element, in document order.
    pub fn get_components<'a>(&self, root: &'a Element, id: &T::Id) -> Vec<&'a Element> {
        let Some(key) = cache_key(id) else {
            return Vec::new();
        };
        self.bound
            .iter()
            .filter_map(|bound| {
                let rendered = self.cache.get(bound, &key)?;
                find_element(root, bound)?
                    .child_elements()
                    .iter()
                    .find(|child| child.id == rendered)
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    fn render_into_bound(&mut self, root: &mut Element, entries: &[(T, String)]) {
        for bound in &self.bound {
            let Some(el) = find_element_mut(root, bound) else {
                warn!("Bound element '{bound}' of '{}' is gone", self.name);
                continue;
            };

            for (item, snapshot) in entries {
                let mut node = self
                    .component
                    .render(item, &self.options.child_component_options);
                node.set_data(ITEM, snapshot.as_str());

                if self.options.cache_components
                    && let Some(key) = cache_key(&item.id())
                {
                    self.cache.insert(bound, key, node.id.clone());
                }

                let index = insertion_index(el.child_elements());
                el.insert_at(index, node);
            }
        }
    }

    /// Parse and detach the item elements already present in the bound elements.
    ///
    /// Nothing is detached if any of them fails to parse.
    fn take_existing_items(&self, root: &mut Element) -> Result<Vec<T>> {
        let mut items = Vec::new();
        for bound in &self.bound {
            let Some(el) = find_element(root, bound) else {
                continue;
            };
            for child in el.child_elements() {
                let Some(data) = child.get_data(ITEM) else {
                    continue;
                };
                let item = serde_json::from_str(data).map_err(|source| {
                    RepositoryError::MalformedItem {
                        element: child.id.clone(),
                        source,
                    }
                })?;
                items.push(item);
            }
        }

        for bound in &self.bound {
            if let Some(el) = find_element_mut(root, bound) {
                el.retain_children(|child| !child.has_data(ITEM));
            }
        }

        Ok(items)
    }
}

impl<T, C> std::fmt::Debug for Repository<T, C>
where
    T: Item,
    C: Component<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("name", &self.name)
            .field("bound", &self.bound)
            .field("selected_class_name", &self.options.selected_class_name)
            .field("cache_components", &self.options.cache_components)
            .finish_non_exhaustive()
    }
}

/// Where a new item element goes among `children`.
fn insertion_index(children: &[Element]) -> usize {
    if let Some(end) = children.iter().position(|c| c.has_data(ITEM_END)) {
        return end;
    }
    if let Some(start) = children.iter().position(|c| c.has_data(ITEM_START)) {
        let following = children[start + 1..]
            .iter()
            .take_while(|c| c.has_data(ITEM))
            .count();
        return start + 1 + following;
    }
    children.len()
}

/// Pair an item with the JSON snapshot stored on its rendered elements.
fn with_snapshot<T: Item>(item: T) -> Result<(T, String)> {
    let snapshot = serde_json::to_string(&item)?;
    Ok((item, snapshot))
}

/// The ID of the item snapshotted into `child`, if it is an item element.
fn embedded_id<T: Item>(child: &Element) -> Option<T::Id> {
    let data = child.get_data(ITEM)?;
    match serde_json::from_str::<T>(data) {
        Ok(item) => Some(item.id()),
        Err(e) => {
            warn!("Skipping item element '{}' with malformed data: {e}", child.id);
            None
        }
    }
}

fn cache_key<I: serde::Serialize>(id: &I) -> Option<String> {
    serde_json::to_string(id).ok()
}
