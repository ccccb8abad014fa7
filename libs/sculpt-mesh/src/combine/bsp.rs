//! # BSP Tree
//!
//! Binary space partitioning over convex polygons, used for the solid
//! union. Traversals run on explicit stacks so deep trees built from many
//! overlapping primitives cannot exhaust the call stack.

use super::plane::Plane;
use super::polygon::{Polygon, Split};

/// A BSP node: a splitting plane, the polygons lying on it, and the
/// subtrees in front of and behind it.
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    plane: Option<Plane>,
    polygons: Vec<Polygon>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Builds a tree from a polygon set.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = Self::default();
        root.build(polygons);
        root
    }

    /// Inserts polygons into the tree, creating nodes as needed.
    ///
    /// The first polygon reaching an empty node supplies its plane.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack: Vec<(&mut BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polygons)) = stack.pop() {
            let Some(first) = polygons.first() else {
                continue;
            };
            let plane = *node.plane.get_or_insert(*first.plane());

            let mut split = Split::default();
            for polygon in &polygons {
                polygon.split_into(&plane, &mut split);
            }

            node.polygons.append(&mut split.coplanar_front);
            node.polygons.append(&mut split.coplanar_back);

            if !split.front.is_empty() {
                let child = node.front.get_or_insert_with(Box::default);
                stack.push((child.as_mut(), split.front));
            }
            if !split.back.is_empty() {
                let child = node.back.get_or_insert_with(Box::default);
                stack.push((child.as_mut(), split.back));
            }
        }
    }

    /// Turns the solid inside out.
    pub fn invert(&mut self) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            for polygon in &mut node.polygons {
                polygon.flip();
            }
            if let Some(plane) = node.plane.as_mut() {
                *plane = plane.flipped();
            }
            std::mem::swap(&mut node.front, &mut node.back);

            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Removes the parts of `polygons` that lie inside this solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut kept = Vec::with_capacity(polygons.len());
        let mut stack: Vec<(&BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polygons)) = stack.pop() {
            let Some(plane) = node.plane else {
                kept.extend(polygons);
                continue;
            };

            let mut split = Split::default();
            for polygon in &polygons {
                polygon.split_into(&plane, &mut split);
            }

            let mut front = split.front;
            front.append(&mut split.coplanar_front);
            let mut back = split.back;
            back.append(&mut split.coplanar_back);

            match node.front.as_deref() {
                Some(child) => stack.push((child, front)),
                None => kept.extend(front),
            }
            // Behind a leaf is inside the solid
            if let Some(child) = node.back.as_deref() {
                stack.push((child, back));
            }
        }

        kept
    }

    /// Clips every polygon of this tree against `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            let polygons = std::mem::take(&mut node.polygons);
            node.polygons = other.clip_polygons(polygons);

            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Collects all polygons in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());
            if let Some(front) = node.front.as_deref() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref() {
                stack.push(back);
            }
        }

        result
    }

    /// Tree depth, counting this node.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&BspNode, usize)> = vec![(self, 1)];

        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in [node.front.as_deref(), node.back.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }

        deepest
    }
}

/// Union of two closed polygon sets.
///
/// Keeps the parts of `a` outside `b` and the parts of `b` outside `a`;
/// faces shared by both survive once.
pub fn union(a: Vec<Polygon>, b: Vec<Polygon>) -> Vec<Polygon> {
    let mut a = BspNode::new(a);
    let mut b = BspNode::new(b);

    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();

    let mut result = a.all_polygons();
    result.extend(b.all_polygons());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;
    use crate::primitives::create_box;
    use glam::DVec3;

    fn box_polygons(size: f64, offset: DVec3) -> Vec<Polygon> {
        let mut mesh: Mesh = create_box(DVec3::splat(size)).unwrap();
        mesh.translate(offset);
        (0..mesh.triangle_count())
            .filter_map(|i| Polygon::new(mesh.triangle_positions(i).to_vec()))
            .collect()
    }

    #[test]
    fn test_build_keeps_every_polygon() {
        let polygons = box_polygons(2.0, DVec3::ZERO);
        let tree = BspNode::new(polygons.clone());
        assert_eq!(tree.all_polygons().len(), polygons.len());
    }

    #[test]
    fn test_clip_removes_inside_polygons() {
        let outer = BspNode::new(box_polygons(4.0, DVec3::ZERO));
        let inner = box_polygons(1.0, DVec3::ZERO);
        assert!(outer.clip_polygons(inner).is_empty());
    }

    #[test]
    fn test_clip_keeps_outside_polygons() {
        let tree = BspNode::new(box_polygons(1.0, DVec3::ZERO));
        let far = box_polygons(1.0, DVec3::new(10.0, 0.0, 0.0));
        assert_eq!(tree.clip_polygons(far.clone()).len(), far.len());
    }

    #[test]
    fn test_invert_twice_restores_planes() {
        let mut tree = BspNode::new(box_polygons(2.0, DVec3::ZERO));
        let before = tree.all_polygons();
        tree.invert();
        tree.invert();
        assert_eq!(tree.all_polygons(), before);
    }

    #[test]
    fn test_union_of_disjoint_boxes_keeps_both() {
        let a = box_polygons(1.0, DVec3::ZERO);
        let b = box_polygons(1.0, DVec3::new(5.0, 0.0, 0.0));
        let total = a.len() + b.len();
        assert_eq!(union(a, b).len(), total);
    }

    #[test]
    fn test_union_of_nested_boxes_is_outer() {
        let outer = box_polygons(4.0, DVec3::ZERO);
        let inner = box_polygons(1.0, DVec3::ZERO);
        let result = union(outer, inner);
        assert!(!result.is_empty());
        // Outer faces may be cut by the inner planes, but every piece
        // stays on the outer surface
        for polygon in &result {
            for v in polygon.vertices() {
                assert!((v.abs().max_element() - 2.0).abs() < 1e-9, "vertex {v}");
            }
        }
    }

    #[test]
    fn test_union_of_overlapping_boxes_drops_interior() {
        let a = box_polygons(2.0, DVec3::ZERO);
        let b = box_polygons(2.0, DVec3::new(1.0, 0.0, 0.0));
        let result = union(a, b);
        // No surviving vertex lies strictly inside the overlap region
        for polygon in &result {
            let centroid =
                polygon.vertices().iter().copied().sum::<DVec3>() / polygon.vertices().len() as f64;
            let inside = centroid.x > 0.0 + 1e-6
                && centroid.x < 1.0 - 1e-6
                && centroid.y.abs() < 1.0 - 1e-6
                && centroid.z.abs() < 1.0 - 1e-6;
            assert!(!inside, "interior polygon survived: {centroid}");
        }
    }

    #[test]
    fn test_depth_of_single_plane() {
        let triangle = Polygon::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y]).unwrap();
        assert_eq!(BspNode::new(vec![triangle]).depth(), 1);
    }
}
