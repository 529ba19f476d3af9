//! R-tree index over placed icons for hit testing and marquee queries.
//!
//! Entries live in canvas-local pixel space (before pan and zoom), so the
//! index only needs rebuilding when the document or the canvas extent
//! changes, not on every pan or zoom. Each icon is a circle of radius
//! `hit_radius * size` around its centre.

use crate::types::{IconId, PlacedIcon};
use kurbo::{Point, Rect};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A placed icon's hit circle.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub icon_id: IconId,
    pub center: Point,
    pub radius: f64,
}

impl SpatialEntry {
    pub fn new(icon_id: IconId, center: Point, radius: f64) -> Self {
        Self {
            icon_id,
            center,
            radius,
        }
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        (p - self.center).hypot() <= self.radius
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.center.x - self.radius, self.center.y - self.radius],
            [self.center.x + self.radius, self.center.y + self.radius],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.icon_id == other.icon_id
    }
}

#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<IconId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load an index from icons, mapping each percent position to
    /// canvas-local pixels with `to_canvas`.
    pub fn from_icons<'a, I, F>(icons: I, hit_radius: f64, to_canvas: F) -> Self
    where
        I: IntoIterator<Item = &'a PlacedIcon>,
        F: Fn(Point) -> Point,
    {
        let mut index = Self::new();
        index.rebuild(icons, hit_radius, to_canvas);
        index
    }

    pub fn insert(&mut self, icon_id: IconId, center: Point, radius: f64) {
        if let Some(old) = self.entries.remove(&icon_id) {
            self.tree.remove(&old);
        }
        let entry = SpatialEntry::new(icon_id.clone(), center, radius);
        self.tree.insert(entry.clone());
        self.entries.insert(icon_id, entry);
    }

    pub fn remove(&mut self, icon_id: &IconId) -> bool {
        match self.entries.remove(icon_id) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// Icons whose hit circle contains `p` (canvas-local pixels).
    pub fn query_point(&self, p: Point) -> Vec<IconId> {
        let envelope = AABB::from_point([p.x, p.y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(p))
            .map(|entry| entry.icon_id.clone())
            .collect()
    }

    /// Icons whose centre lies inside `rect` (canvas-local pixels, edges
    /// inclusive).
    pub fn query_rect(&self, rect: Rect) -> Vec<IconId> {
        let rect = rect.abs();
        let envelope = AABB::from_corners([rect.x0, rect.y0], [rect.x1, rect.y1]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| {
                let c = entry.center;
                c.x >= rect.x0 && c.x <= rect.x1 && c.y >= rect.y0 && c.y <= rect.y1
            })
            .map(|entry| entry.icon_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<'a, I, F>(&mut self, icons: I, hit_radius: f64, to_canvas: F)
    where
        I: IntoIterator<Item = &'a PlacedIcon>,
        F: Fn(Point) -> Point,
    {
        let entries: Vec<SpatialEntry> = icons
            .into_iter()
            .map(|icon| SpatialEntry::new(icon.id.clone(), to_canvas(icon.position), hit_radius * icon.size))
            .collect();
        self.entries = entries
            .iter()
            .map(|entry| (entry.icon_id.clone(), entry.clone()))
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
