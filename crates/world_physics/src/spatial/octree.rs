//! Static octree over collision faces
//!
//! The tree shape is fixed at construction: depth `d` holds `8^d` nodes in a
//! flat array addressed by Morton code, with node bounds derived by uniform
//! subdivision of the root. Only face membership changes afterwards.
//!
//! A face is referenced by every node it overlaps at every depth, from the
//! root down to `max_depth`. Queries can therefore stop at any depth and prune
//! whole subtrees as soon as a node is empty.

use std::collections::{BTreeSet, HashSet};

use slotmap::SlotMap;
use thiserror::Error;

use super::bounds::AABB;
use super::face::{Face, FaceId, FaceKind, FaceLabel};
use super::morton;
use crate::foundation::math::Vec3;
use crate::physics::collision::primitives::{BoundingSphere, Ray, Triangle};

/// Deepest tree the index will allocate (8^8 nodes at the last level)
pub const MAX_SUPPORTED_DEPTH: u32 = 8;

/// Construction-time octree failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OctreeError {
    /// Bounds with a non-positive or non-finite extent
    #[error("invalid octree bounds: min {min:?}, max {max:?}")]
    InvalidBounds {
        /// Requested minimum corner
        min: Vec3,
        /// Requested maximum corner
        max: Vec3,
    },

    /// Requested depth beyond [`MAX_SUPPORTED_DEPTH`]
    #[error("unsupported octree depth {depth} (maximum {max})")]
    UnsupportedDepth {
        /// Requested depth
        depth: u32,
        /// Supported maximum
        max: u32,
    },
}

/// Single node in the octree hierarchy
#[derive(Debug, Clone)]
pub struct OctreeNode {
    /// World-space bounds of this node
    pub bounds: AABB,

    /// Faces overlapping this node
    faces: Vec<FaceId>,
}

impl OctreeNode {
    fn new(bounds: AABB) -> Self {
        Self {
            bounds,
            faces: Vec::new(),
        }
    }

    /// Faces referenced by this node
    pub fn faces(&self) -> &[FaceId] {
        &self.faces
    }

    /// True when no face overlaps this node
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Nearest face hit by [`OctreeIndex::raycast`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceHit {
    /// The face that was hit
    pub face: FaceId,
    /// Distance from the ray origin to the hit point
    pub distance: f32,
    /// Hit point in world space
    pub point: Vec3,
    /// Outward normal of the face
    pub normal: Vec3,
}

/// Summary counters for debugging and tooling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OctreeStats {
    /// Faces in the arena
    pub faces: usize,
    /// Face references across all node pools
    pub node_entries: usize,
    /// Nodes holding at least one face
    pub occupied_nodes: usize,
    /// Total number of nodes
    pub total_nodes: usize,
}

/// Static, depth-bounded octree indexing triangular surface faces
#[derive(Debug, Clone)]
pub struct OctreeIndex {
    bounds: AABB,
    max_depth: u32,

    /// `levels[d]` holds the `8^d` nodes of depth `d`, indexed by Morton code
    levels: Vec<Vec<OctreeNode>>,

    /// Face arena; nodes hold keys into it
    faces: SlotMap<FaceId, Face>,
}

impl OctreeIndex {
    /// Create an index covering `bounds`, subdivided down to `max_depth`
    ///
    /// All nodes are allocated up front.
    pub fn new(bounds: AABB, max_depth: u32) -> Result<Self, OctreeError> {
        if !bounds.has_volume() {
            return Err(OctreeError::InvalidBounds {
                min: bounds.min,
                max: bounds.max,
            });
        }
        if max_depth > MAX_SUPPORTED_DEPTH {
            return Err(OctreeError::UnsupportedDepth {
                depth: max_depth,
                max: MAX_SUPPORTED_DEPTH,
            });
        }

        let levels: Vec<Vec<OctreeNode>> = (0..=max_depth)
            .map(|depth| {
                (0..morton::nodes_at_depth(depth))
                    .map(|code| OctreeNode::new(Self::node_bounds(&bounds, depth, code)))
                    .collect()
            })
            .collect();

        log::debug!(
            "Created octree index {:?}..{:?}, max depth {}, {} nodes",
            bounds.min,
            bounds.max,
            max_depth,
            levels.iter().map(Vec::len).sum::<usize>()
        );

        Ok(Self {
            bounds,
            max_depth,
            levels,
            faces: SlotMap::with_key(),
        })
    }

    /// Bounds of the node at (`depth`, `code`) by uniform subdivision of `root`
    fn node_bounds(root: &AABB, depth: u32, code: usize) -> AABB {
        let cells = (1u32 << depth) as f32;
        let cell_size = root.size() / cells;
        let (x, y, z) = morton::decode(depth, code);
        let min = root.min + Vec3::new(x as f32, y as f32, z as f32).component_mul(&cell_size);
        AABB::new(min, min + cell_size)
    }

    /// Root bounds
    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    /// Deepest level of the tree
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Import pre-transformed mesh triangles under `label`
    pub fn import_mesh(&mut self, label: impl Into<FaceLabel>, triangles: &[Triangle]) -> Vec<FaceId> {
        let label = label.into();
        let ids: Vec<FaceId> = triangles
            .iter()
            .map(|tri| self.add_face(Face::new(&label, FaceKind::Mesh, *tri)))
            .collect();
        log::debug!("Imported mesh '{}' ({} faces)", label.name, ids.len());
        ids
    }

    /// Import an indexed mesh (vertex buffer + triangle list)
    ///
    /// Trailing indices that do not form a full triangle, and triangles
    /// referencing missing vertices, are skipped.
    pub fn import_indexed_mesh(
        &mut self,
        label: impl Into<FaceLabel>,
        vertices: &[Vec3],
        indices: &[u32],
    ) -> Vec<FaceId> {
        let label = label.into();
        let mut triangles = Vec::with_capacity(indices.len() / 3);
        for chunk in indices.chunks_exact(3) {
            let corners: Option<Vec<Vec3>> = chunk
                .iter()
                .map(|&i| vertices.get(i as usize).copied())
                .collect();
            match corners.as_deref() {
                Some(&[v0, v1, v2]) => triangles.push(Triangle::new(v0, v1, v2)),
                _ => log::warn!("Mesh '{}' references a missing vertex in {:?}", label.name, chunk),
            }
        }
        self.import_mesh(label, &triangles)
    }

    /// Import an AABB proxy as 12 faces (two per side)
    pub fn import_aabb(&mut self, label: impl Into<FaceLabel>, aabb: &AABB) -> Vec<FaceId> {
        let label = label.into();
        let ids: Vec<FaceId> = aabb
            .surface_triangles()
            .iter()
            .map(|tri| self.add_face(Face::new(&label, FaceKind::BoxProxy, *tri)))
            .collect();
        log::debug!("Imported box proxy '{}' {:?}..{:?}", label.name, aabb.min, aabb.max);
        ids
    }

    /// Store a face and push it into every overlapping node down to `max_depth`
    pub fn add_face(&mut self, face: Face) -> FaceId {
        let triangle = face.triangle();
        if face.is_degenerate() {
            log::trace!("Adding zero-area face from '{}'", face.name);
        }

        let name = face.name.clone();
        let id = self.faces.insert(face);
        let placed = self.insert_into_nodes(id, &triangle);
        if placed == 0 {
            log::warn!("Face from '{}' lies outside the index bounds", name);
        }
        id
    }

    /// Top-down triangle-vs-node SAT; returns the number of nodes that took the face
    fn insert_into_nodes(&mut self, id: FaceId, triangle: &Triangle) -> usize {
        let mut placed = 0;
        let mut stack = vec![(0u32, 0usize)];

        while let Some((depth, code)) = stack.pop() {
            let node = &mut self.levels[depth as usize][code];
            if !triangle.intersects_aabb(&node.bounds) {
                continue;
            }

            node.faces.push(id);
            placed += 1;

            if depth < self.max_depth {
                stack.extend(morton::children(code).into_iter().map(|child| (depth + 1, child)));
            }
        }

        placed
    }

    /// Remove every face matching `predicate` from all node pools and the arena
    fn remove_where(&mut self, predicate: impl Fn(&Face) -> bool) -> usize {
        let doomed: HashSet<FaceId> = self
            .faces
            .iter()
            .filter(|(_, face)| predicate(face))
            .map(|(id, _)| id)
            .collect();

        if doomed.is_empty() {
            return 0;
        }

        for level in &mut self.levels {
            for node in level.iter_mut() {
                node.faces.retain(|id| !doomed.contains(id));
            }
        }
        for id in &doomed {
            self.faces.remove(*id);
        }

        doomed.len()
    }

    /// Remove all faces carrying `tag`; returns how many were removed
    pub fn remove_by_tag(&mut self, tag: &str) -> usize {
        let removed = self.remove_where(|face| face.tag == tag);
        log::debug!("Removed {} faces tagged '{}'", removed, tag);
        removed
    }

    /// Remove all faces belonging to object `name`; returns how many were removed
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let removed = self.remove_where(|face| face.name == name);
        log::debug!("Removed {} faces named '{}'", removed, name);
        removed
    }

    /// Move the corners of every face named `name` by `delta`, in place
    ///
    /// Node membership is left as it was: nodes the faces no longer overlap
    /// keep referencing them, and nodes they moved into do not see them until
    /// [`reindex_by_name`](Self::reindex_by_name) runs.
    pub fn translate_by_name(&mut self, name: &str, delta: Vec3) -> usize {
        let mut moved = 0;
        for face in self.faces.values_mut().filter(|face| face.name == name) {
            face.translate(delta);
            moved += 1;
        }
        log::debug!("Translated {} faces named '{}' by {:?}", moved, name, delta);
        moved
    }

    /// Rebuild node membership for the faces named `name` from their current corners
    pub fn reindex_by_name(&mut self, name: &str) -> usize {
        let targets: Vec<(FaceId, Triangle)> = self
            .faces
            .iter()
            .filter(|(_, face)| face.name == name)
            .map(|(id, face)| (id, face.triangle()))
            .collect();

        if targets.is_empty() {
            return 0;
        }

        let ids: HashSet<FaceId> = targets.iter().map(|(id, _)| *id).collect();
        for level in &mut self.levels {
            for node in level.iter_mut() {
                node.faces.retain(|id| !ids.contains(id));
            }
        }
        for (id, triangle) in &targets {
            self.insert_into_nodes(*id, triangle);
        }

        log::debug!("Reindexed {} faces named '{}'", targets.len(), name);
        targets.len()
    }

    /// Faces from every node at `depth` overlapping `sphere`
    ///
    /// Traversal starts at the root and only descends into nodes that overlap
    /// the sphere and hold faces. Results are unique by face identity, in
    /// first-seen order. `depth` is clamped to `max_depth`.
    pub fn query_candidates(&self, sphere: &BoundingSphere, depth: u32) -> Vec<FaceId> {
        let target = depth.min(self.max_depth);
        if depth > self.max_depth {
            log::debug!("Query depth {} clamped to {}", depth, self.max_depth);
        }

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        let mut stack = vec![(0u32, 0usize)];

        while let Some((level, code)) = stack.pop() {
            let node = &self.levels[level as usize][code];
            if node.is_empty() || !sphere.intersects_aabb(&node.bounds) {
                continue;
            }

            if level == target {
                candidates.extend(node.faces.iter().copied().filter(|id| seen.insert(*id)));
            } else {
                stack.extend(morton::children(code).into_iter().rev().map(|child| (level + 1, child)));
            }
        }

        log::trace!("Sphere query at depth {} found {} faces", target, candidates.len());
        candidates
    }

    /// Like [`query_candidates`](Self::query_candidates), resolved to face references
    pub fn query_faces(&self, sphere: &BoundingSphere, depth: u32) -> Vec<&Face> {
        self.query_candidates(sphere, depth)
            .into_iter()
            .filter_map(|id| self.faces.get(id))
            .collect()
    }

    /// Nearest face hit by `ray` within `max_distance`
    pub fn raycast(&self, ray: &Ray, max_distance: f32) -> Option<FaceHit> {
        let mut tested = HashSet::new();
        let mut best: Option<FaceHit> = None;
        let mut stack = vec![(0u32, 0usize)];

        while let Some((depth, code)) = stack.pop() {
            let node = &self.levels[depth as usize][code];
            if node.is_empty() {
                continue;
            }
            let Some(entry) = node.bounds.intersect_ray(ray) else {
                continue;
            };
            let limit = best.map_or(max_distance, |hit| hit.distance);
            if entry > limit {
                continue;
            }

            if depth < self.max_depth {
                stack.extend(morton::children(code).into_iter().map(|child| (depth + 1, child)));
                continue;
            }

            for &id in &node.faces {
                if !tested.insert(id) {
                    continue;
                }
                let Some(face) = self.faces.get(id) else {
                    continue;
                };
                if let Some((t, _, _)) = face.triangle().intersect_ray(ray) {
                    if t <= best.map_or(max_distance, |hit| hit.distance) {
                        best = Some(FaceHit {
                            face: id,
                            distance: t,
                            point: ray.point_at(t),
                            normal: face.normal,
                        });
                    }
                }
            }
        }

        best
    }

    /// Look up a face
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id)
    }

    /// Iterate over all stored faces
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &Face)> {
        self.faces.iter()
    }

    /// Number of stored faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Distinct object names currently stored
    pub fn names(&self) -> BTreeSet<&str> {
        self.faces.values().map(|face| face.name.as_str()).collect()
    }

    /// Node at (`depth`, Morton `code`)
    pub fn node(&self, depth: u32, code: usize) -> Option<&OctreeNode> {
        self.levels.get(depth as usize)?.get(code)
    }

    /// All nodes at `depth` in Morton order (empty beyond `max_depth`)
    pub fn nodes_at_depth(&self, depth: u32) -> &[OctreeNode] {
        self.levels.get(depth as usize).map_or(&[], Vec::as_slice)
    }

    /// Summary counters
    pub fn stats(&self) -> OctreeStats {
        let nodes = self.levels.iter().flatten();
        OctreeStats {
            faces: self.faces.len(),
            node_entries: nodes.clone().map(|node| node.faces.len()).sum(),
            occupied_nodes: nodes.clone().filter(|node| !node.is_empty()).count(),
            total_nodes: nodes.count(),
        }
    }

    /// Drop every face, keeping the tree shape
    pub fn clear(&mut self) {
        for level in &mut self.levels {
            for node in level.iter_mut() {
                node.faces.clear();
            }
        }
        self.faces.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn world_bounds() -> AABB {
        AABB::new(Vec3::new(-16.0, -16.0, -16.0), Vec3::new(16.0, 16.0, 16.0))
    }

    fn tagged(index: &OctreeIndex, ids: &[FaceId], name: &str) -> usize {
        ids.iter()
            .filter(|id| index.face(**id).is_some_and(|face| face.name == name))
            .count()
    }

    #[test]
    fn test_construction_allocates_every_level() {
        let index = OctreeIndex::new(world_bounds(), 3).unwrap();
        assert_eq!(index.nodes_at_depth(0).len(), 1);
        assert_eq!(index.nodes_at_depth(1).len(), 8);
        assert_eq!(index.nodes_at_depth(3).len(), 512);
        assert!(index.nodes_at_depth(4).is_empty());
        assert_eq!(index.stats().total_nodes, 1 + 8 + 64 + 512);

        // Child bounds tile the parent
        let root = index.node(0, 0).unwrap();
        assert_eq!(root.bounds, world_bounds());
        let first = index.node(1, 0).unwrap();
        assert_eq!(first.bounds, AABB::new(Vec3::new(-16.0, -16.0, -16.0), Vec3::zeros()));
        let last = index.node(1, 7).unwrap();
        assert_eq!(last.bounds, AABB::new(Vec3::zeros(), Vec3::new(16.0, 16.0, 16.0)));
    }

    #[test]
    fn test_construction_errors() {
        let flat = AABB::new(Vec3::zeros(), Vec3::new(1.0, 0.0, 1.0));
        assert!(matches!(OctreeIndex::new(flat, 2), Err(OctreeError::InvalidBounds { .. })));

        let inverted = AABB::new(Vec3::new(1.0, 1.0, 1.0), Vec3::zeros());
        assert!(matches!(OctreeIndex::new(inverted, 2), Err(OctreeError::InvalidBounds { .. })));

        assert_eq!(
            OctreeIndex::new(world_bounds(), MAX_SUPPORTED_DEPTH + 1).unwrap_err(),
            OctreeError::UnsupportedDepth { depth: 9, max: 8 }
        );
    }

    #[test]
    fn test_import_aabb_creates_twelve_faces() {
        let mut index = OctreeIndex::new(world_bounds(), 2).unwrap();
        let ids = index.import_aabb("crate", &AABB::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(3.0, 3.0, 3.0)));
        assert_eq!(ids.len(), 12);
        assert_eq!(index.face_count(), 12);
        assert!(index.faces().all(|(_, face)| face.kind == FaceKind::BoxProxy));
    }

    #[test]
    fn test_face_is_referenced_at_every_depth() {
        let mut index = OctreeIndex::new(world_bounds(), 3).unwrap();
        let tri = Triangle::new(
            Vec3::new(5.0, 5.0, 5.0),
            Vec3::new(6.0, 5.0, 5.0),
            Vec3::new(5.0, 5.0, 6.0),
        );
        let id = index.import_mesh("pebble", &[tri])[0];

        for depth in 0..=3 {
            let holders = index
                .nodes_at_depth(depth)
                .iter()
                .filter(|node| node.faces().contains(&id))
                .count();
            assert_eq!(holders, 1, "depth {depth}");
        }
    }

    #[test]
    fn test_straddling_face_is_deduplicated() {
        let mut index = OctreeIndex::new(world_bounds(), 2).unwrap();
        // Crosses the x = 0 and z = 0 split planes
        let tri = Triangle::new(
            Vec3::new(-2.0, 1.0, -2.0),
            Vec3::new(0.0, 1.0, 2.0),
            Vec3::new(2.0, 1.0, -2.0),
        );
        index.import_mesh("bridge", &[tri]);

        let holders = index.nodes_at_depth(2).iter().filter(|node| !node.is_empty()).count();
        assert!(holders > 1);

        let sphere = BoundingSphere::new(Vec3::new(0.0, 1.0, 0.0), 4.0);
        assert_eq!(index.query_candidates(&sphere, 2).len(), 1);
    }

    #[test]
    fn test_query_prunes_distant_regions() {
        let mut index = OctreeIndex::new(world_bounds(), 3).unwrap();
        index.import_aabb("near", &AABB::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0)));
        index.import_aabb("far", &AABB::new(Vec3::new(-14.0, -14.0, -14.0), Vec3::new(-13.0, -13.0, -13.0)));

        let found = index.query_candidates(&BoundingSphere::new(Vec3::new(1.5, 1.5, 1.5), 1.0), 3);
        assert_eq!(tagged(&index, &found, "near"), 12);
        assert_eq!(tagged(&index, &found, "far"), 0);

        // The root overlaps everything
        let shallow = index.query_candidates(&BoundingSphere::new(Vec3::new(1.5, 1.5, 1.5), 1.0), 0);
        assert_eq!(shallow.len(), 24);

        // Depth beyond the tree is clamped, not an error
        assert_eq!(index.query_candidates(&BoundingSphere::new(Vec3::new(1.5, 1.5, 1.5), 1.0), 42), found);
    }

    #[test]
    fn test_remove_by_name_and_tag() {
        let mut index = OctreeIndex::new(world_bounds(), 2).unwrap();
        let bounds = AABB::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        index.import_aabb(FaceLabel::new("wall_a", "walls"), &bounds);
        index.import_aabb(FaceLabel::new("wall_b", "walls"), &bounds);
        index.import_aabb(FaceLabel::new("rock", "props"), &bounds);

        assert_eq!(index.remove_by_name("wall_a"), 12);
        assert_eq!(index.remove_by_name("wall_a"), 0);
        assert_eq!(index.remove_by_tag("walls"), 12);
        assert_eq!(index.remove_by_tag("missing"), 0);

        let remaining = index.query_faces(&BoundingSphere::new(Vec3::zeros(), 2.0), 2);
        assert_eq!(remaining.len(), 12);
        assert!(remaining.iter().all(|face| face.name == "rock"));
        assert_eq!(index.stats().faces, 12);
    }

    #[test]
    fn test_translate_keeps_stale_membership_until_reindex() {
        let mut index = OctreeIndex::new(world_bounds(), 2).unwrap();
        index.import_aabb("door", &AABB::new(Vec3::new(9.0, 9.0, 9.0), Vec3::new(10.0, 10.0, 10.0)));

        assert_eq!(index.translate_by_name("door", Vec3::new(-19.0, -19.0, -19.0)), 12);
        assert_eq!(index.translate_by_name("nothing", Vec3::x()), 0);

        // Geometry moved but nodes still point at the old region
        let (_, face) = index.faces().next().unwrap();
        assert!(face.vertices.iter().all(|v| v.x <= -9.0));
        let old_region = BoundingSphere::new(Vec3::new(9.5, 9.5, 9.5), 1.0);
        let new_region = BoundingSphere::new(Vec3::new(-9.5, -9.5, -9.5), 1.0);
        assert_eq!(index.query_candidates(&old_region, 2).len(), 12);
        assert!(index.query_candidates(&new_region, 2).is_empty());

        assert_eq!(index.reindex_by_name("door"), 12);
        assert!(index.query_candidates(&old_region, 2).is_empty());
        assert_eq!(index.query_candidates(&new_region, 2).len(), 12);
    }

    #[test]
    fn test_raycast_finds_nearest_face() {
        let mut index = OctreeIndex::new(world_bounds(), 3).unwrap();
        index.import_aabb("near", &AABB::new(Vec3::new(2.0, -1.0, -1.0), Vec3::new(3.0, 1.0, 1.0)));
        index.import_aabb("far", &AABB::new(Vec3::new(8.0, -1.0, -1.0), Vec3::new(9.0, 1.0, 1.0)));

        let ray = Ray::new(Vec3::new(0.0, 0.1, -0.2), Vec3::x());
        let hit = index.raycast(&ray, 100.0).unwrap();
        assert_relative_eq!(hit.distance, 2.0, epsilon = 1e-5);
        assert_eq!(index.face(hit.face).unwrap().name, "near");
        assert_relative_eq!(hit.normal, -Vec3::x());

        assert!(index.raycast(&ray, 1.5).is_none());
        assert!(index.raycast(&Ray::new(Vec3::new(0.0, 0.1, -0.2), -Vec3::x()), 100.0).is_none());
    }

    #[test]
    fn test_outside_and_degenerate_faces_are_tolerated() {
        let mut index = OctreeIndex::new(world_bounds(), 2).unwrap();
        let outside = Triangle::new(
            Vec3::new(100.0, 0.0, 0.0),
            Vec3::new(101.0, 0.0, 0.0),
            Vec3::new(100.0, 1.0, 0.0),
        );
        let seam = Triangle::new(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        index.import_mesh("junk", &[outside, seam]);

        assert_eq!(index.face_count(), 2);
        let found = index.query_faces(&BoundingSphere::new(Vec3::zeros(), 1.0), 2);
        assert_eq!(found.len(), 1);
        assert!(found[0].is_degenerate());
    }

    #[test]
    fn test_indexed_mesh_skips_bad_indices() {
        let mut index = OctreeIndex::new(world_bounds(), 1).unwrap();
        let vertices = [Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0)];
        let ids = index.import_indexed_mesh("ground", &vertices, &[0, 1, 2, 0, 1, 9, 0]);
        assert_eq!(ids.len(), 1);
        assert_eq!(index.face(ids[0]).unwrap().normal, Vec3::y());
        assert_eq!(index.names().into_iter().collect::<Vec<_>>(), vec!["ground"]);

        index.clear();
        assert_eq!(index.face_count(), 0);
        assert_eq!(index.stats().node_entries, 0);
    }
}
