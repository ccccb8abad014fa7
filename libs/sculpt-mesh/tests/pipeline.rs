//! End-to-end checks: primitives and ring grids through to STL text.

use glam::DVec3;
use sculpt_mesh::{
    assemble, combine_or_separate, BspUnion, CoordinateTransform, Primitive, RingGrid, Shape,
    Solid, StlExporter,
};
use std::f64::consts::TAU;

fn lines_starting_with(text: &str, prefix: &str) -> usize {
    text.lines()
        .filter(|l| l.trim_start().starts_with(prefix))
        .count()
}

/// Parses every facet into (normal, [v0, v1, v2]).
fn parse_facets(text: &str) -> Vec<(DVec3, [DVec3; 3])> {
    let numbers = |line: &str, skip: usize| -> DVec3 {
        let v: Vec<f64> = line
            .split_whitespace()
            .skip(skip)
            .map(|s| s.parse().unwrap())
            .collect();
        DVec3::new(v[0], v[1], v[2])
    };

    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut facets = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if lines[i].starts_with("facet normal") {
            let normal = numbers(lines[i], 2);
            let corners = [
                numbers(lines[i + 2], 1),
                numbers(lines[i + 3], 1),
                numbers(lines[i + 4], 1),
            ];
            facets.push((normal, corners));
            i += 7;
        } else {
            i += 1;
        }
    }
    facets
}

fn vase_grid(rings: usize, rotations: usize) -> RingGrid {
    let rows = (0..rings)
        .map(|i| {
            let t = i as f64 / (rings - 1) as f64;
            let radius = 2.0 + (t * 3.0).sin();
            (0..=rotations)
                .map(|r| {
                    let angle = TAU * (r % rotations) as f64 / rotations as f64;
                    DVec3::new(angle.cos() * radius, t * 10.0, angle.sin() * radius)
                })
                .collect()
        })
        .collect();
    RingGrid::new(rows).unwrap()
}

#[test]
fn assembled_mesh_exports_outward_facets() {
    let mesh = assemble(&vase_grid(6, 12)).unwrap();
    assert!(mesh.is_closed());
    assert!(mesh.signed_volume() > 0.0);

    let text = StlExporter::new("vase")
        .export_to_string(&Solid::Mesh(mesh.clone()))
        .unwrap();

    let facets = lines_starting_with(&text, "facet normal");
    assert_eq!(lines_starting_with(&text, "vertex"), 3 * facets);
    // Closing cells and closing cap triangles are degenerate and left out
    let degenerate = (6 - 1) * 2 + 2;
    assert_eq!(facets, mesh.triangle_count() - degenerate);
}

#[test]
fn print_bed_export_preserves_orientation() {
    let mesh = assemble(&vase_grid(4, 16)).unwrap();
    let text = StlExporter::default()
        .with_transform(CoordinateTransform::print_bed())
        .export_to_string(&Solid::Mesh(mesh))
        .unwrap();

    let facets = parse_facets(&text);
    assert!(!facets.is_empty());

    // Divergence theorem over the written facets: positive when outward
    let volume: f64 = facets
        .iter()
        .map(|(_, [a, b, c])| a.dot(b.cross(*c)) / 6.0)
        .sum();
    assert!(volume > 0.0);

    // Up axis is now +Z, scaled to millimetres
    let max_z = facets
        .iter()
        .flat_map(|(_, corners)| corners.iter().map(|v| v.z))
        .fold(f64::MIN, f64::max);
    assert!((max_z - 100.0).abs() < 1e-9);

    // Written normals agree with the written winding
    for (normal, [a, b, c]) in &facets {
        let n = (*b - *a).cross(*c - *a).normalize();
        assert!(n.dot(*normal) > 0.999);
    }
}

#[test]
fn union_export_counts_fan_triangles() {
    let parts = [
        Primitive::new(
            Shape::Box {
                width: 2.0,
                height: 2.0,
                depth: 2.0,
            },
            DVec3::ZERO,
            DVec3::ZERO,
        ),
        Primitive::new(
            Shape::Cylinder {
                radius: 0.5,
                height: 3.0,
            },
            DVec3::new(0.0, 1.5, 0.0),
            DVec3::new(0.0, 0.0, 20.0),
        ),
    ];

    let solid = combine_or_separate(&parts, 12, Some(&BspUnion::new(12))).unwrap();
    let Solid::Polygons(soup) = &solid else {
        panic!("expected union output");
    };

    let summary = StlExporter::default()
        .write(&solid, std::io::sink())
        .unwrap();
    assert_eq!(summary.facets + summary.skipped, soup.triangle_count());
}

#[test]
fn separate_export_without_combiner() {
    let parts = [
        Primitive::new(Shape::Sphere { radius: 1.0 }, DVec3::ZERO, DVec3::ZERO),
        Primitive::new(Shape::Sphere { radius: 1.0 }, DVec3::X, DVec3::ZERO),
    ];
    let solid = combine_or_separate(&parts, 8, None).unwrap();
    let Solid::Mesh(mesh) = &solid else {
        panic!("expected merged shells");
    };
    assert!(mesh.is_closed());

    let text = sculpt_mesh::export(&solid).unwrap();
    assert_eq!(lines_starting_with(&text, "facet normal"), mesh.triangle_count());
}
