use super::prelude::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::PI;
use std::rc::Rc;
use std::sync::Arc;

fn close(x: f64, y: f64, tol: f64) -> bool {
    (x - y).abs() <= tol * x.abs().max(y.abs()).max(1.0)
}

/// Shape defined outside the built-in set.
struct Square(f64);

impl Shape for Square {
    fn area(&self) -> f64 {
        self.0 * self.0
    }
}

#[test]
fn reference_areas() {
    let c = Circle::new(5.0).unwrap();
    assert!((area(&c) - 78.53981633974483).abs() < 1e-12);
    assert_eq!(area(&Circle::new(1.0).unwrap()), PI);

    let t = Triangle::new(3.0, 4.0, 5.0).unwrap();
    assert_eq!(area(&t), 6.0);
    assert!(t.is_right());

    let t789 = Triangle::new(7.0, 8.0, 9.0).unwrap();
    assert!((area(&t789) - 26.8328157).abs() < 5e-7);
}

#[test]
fn circle_rejects_non_positive_and_non_finite() {
    for r in [0.0, -0.0, -1.0, f64::NEG_INFINITY] {
        let err = Circle::new(r).unwrap_err();
        assert!(err.is_invalid_argument(), "radius {r}: {err}");
    }
    assert!(matches!(
        Circle::new(f64::NAN),
        Err(GeometryError::InvalidArgument(Violation::NonFinite { .. }))
    ));
    assert!(Circle::new(f64::INFINITY).unwrap_err().is_invalid_argument());
}

#[test]
fn triangle_rejects_invalid_sides() {
    // inequality, including the degenerate equality case
    let err = Triangle::new(1.0, 2.0, 3.0).unwrap_err();
    assert_eq!(
        err,
        GeometryError::InvalidArgument(Violation::TriangleInequality {
            a: 1.0,
            b: 2.0,
            c: 3.0
        })
    );
    assert!(Triangle::new(3.0, 1.0, 2.0).unwrap_err().is_invalid_argument());
    assert!(Triangle::new(1.0, 1.0, 5.0).unwrap_err().is_invalid_argument());
    // positivity
    assert!(matches!(
        Triangle::new(0.0, 4.0, 5.0),
        Err(GeometryError::InvalidArgument(Violation::NonPositiveSide { side })) if side == 0.0
    ));
    assert!(Triangle::new(3.0, -4.0, 5.0).unwrap_err().is_invalid_argument());
    assert!(Triangle::new(3.0, 4.0, f64::NAN).unwrap_err().is_invalid_argument());
}

#[test]
fn triangle_sides_are_sorted() {
    let t = Triangle::new(5.0, 3.0, 4.0).unwrap();
    assert_eq!(t.sides(), [3.0, 4.0, 5.0]);
    assert_eq!(t.semi_perimeter(), 6.0);
}

#[test]
fn right_angle_detection() {
    assert!(Triangle::new(3.0, 4.0, 5.0).unwrap().is_right());
    assert!(Triangle::new(5.0, 3.0, 4.0).unwrap().is_right());
    assert!(Triangle::new(3e-5, 4e-5, 5e-5).unwrap().is_right());
    assert!(!Triangle::new(5.0, 5.0, 5.0).unwrap().is_right());

    let almost = Triangle::new(6.0, 8.0, 10.0000001).unwrap();
    assert!(!almost.is_right());
    assert!(almost.is_right_with(1e-6));
    assert!(almost.is_right_cfg(GeomCfg { right_rel_tol: 1e-6 }));
    assert!(!almost.is_right_cfg(GeomCfg::default()));
}

#[test]
fn sliver_area_is_finite() {
    let t = Triangle::new(1.0, 1.0, 2.0 - 1e-15).unwrap();
    let a = area(&t);
    assert!(a.is_finite() && a >= 0.0);
}

#[test]
fn from_vertices_matches_determinant() {
    let p = Vec2::new(0.0, 0.0);
    let q = Vec2::new(3.0, 0.0);
    let r = Vec2::new(0.0, 4.0);
    let t = Triangle::from_vertices(p, q, r).unwrap();
    assert_eq!(t.sides(), [3.0, 4.0, 5.0]);

    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let p = Vec2::new(rng.gen_range(-2.0f64..2.0), rng.gen_range(-2.0f64..2.0));
        let q = Vec2::new(rng.gen_range(-2.0f64..2.0), rng.gen_range(-2.0f64..2.0));
        let r = Vec2::new(rng.gen_range(-2.0f64..2.0), rng.gen_range(-2.0f64..2.0));
        let (u, v) = (q - p, r - p);
        let det = (u.x * v.y - u.y * v.x).abs() / 2.0;
        if det < 1e-3 {
            continue;
        }
        let t = Triangle::from_vertices(p, q, r).unwrap();
        assert!(close(area(&t), det, 1e-9), "{} vs {det}", area(&t));
    }
}

#[test]
fn collinear_vertices_rejected() {
    let err = Triangle::from_vertices(
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(2.0, 0.0),
    )
    .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn area_of_dispatches_builtin_shapes() {
    let c = Circle::new(2.5).unwrap();
    assert_eq!(area_of(&c), Ok(PI * 6.25));
    assert_eq!(area_of(&Triangle::new(3.0, 4.0, 5.0).unwrap()), Ok(6.0));
}

#[test]
fn area_of_rejects_non_shapes() {
    assert_eq!(
        area_of(&5_i32),
        Err(GeometryError::UnsupportedType {
            type_name: "i32".to_string()
        })
    );
    let err = area_of(&"circle").unwrap_err();
    assert!(err.is_unsupported_type());
    assert_eq!(err.to_string(), "unsupported type: &str");
    assert!(area_of(&String::from("triangle"))
        .unwrap_err()
        .is_unsupported_type());
}

#[test]
fn new_shapes_need_no_dispatcher_change() {
    // static path
    assert_eq!(area(&Square(2.0)), 4.0);
    // boxed trait objects go through the default table
    let boxed: Box<dyn Shape> = Box::new(Square(3.0));
    assert_eq!(area_of(&boxed), Ok(9.0));
    assert_eq!(area(boxed.as_ref()), 9.0);
    // bare concrete types outside the table go through a registered dispatcher
    let mut d = Dispatcher::default();
    d.register::<Square>();
    assert_eq!(d.area_of(&Square(2.0)), Ok(4.0));
    assert_eq!(d.area_of(&Circle::new(1.0).unwrap()), Ok(PI));
    assert!(d.resolve(&1.5_f64).is_none());

    let none = Dispatcher::empty();
    assert!(none.area_of(&Circle::new(1.0).unwrap()).is_err());
}

#[test]
fn area_of_accepts_shape_wrappers() {
    let circle = Circle::new(1.0).unwrap();
    let tri = Triangle::new(3.0, 4.0, 5.0).unwrap();
    assert_eq!(area_of(&Box::new(circle)), Ok(PI));
    assert_eq!(area_of(&Box::new(tri)), Ok(6.0));

    let rc: Rc<dyn Shape> = Rc::new(Square(2.0));
    assert_eq!(area_of(&rc), Ok(4.0));
    let arc: Arc<dyn Shape> = Arc::new(tri);
    assert_eq!(area_of(&arc), Ok(6.0));
    static SQUARE: Square = Square(3.0);
    let leaked: &'static dyn Shape = &SQUARE;
    assert_eq!(area_of(&leaked), Ok(9.0));
    assert_eq!(rc.kind(), std::any::type_name::<Square>());
    assert_eq!(arc.kind(), "triangle");
}

#[test]
fn heterogeneous_collection() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(1.0).unwrap()),
        Box::new(Triangle::new(3.0, 4.0, 5.0).unwrap()),
        Box::new(Square(2.0)),
    ];
    let total: f64 = shapes.iter().map(|s| area(s)).sum();
    assert!(close(total, PI + 6.0 + 4.0, 1e-12));
    assert_eq!(shapes[0].kind(), "circle");
    assert_eq!(shapes[1].kind(), "triangle");
}

#[test]
fn display_forms() {
    assert_eq!(Circle::new(5.0).unwrap().to_string(), "Circle(radius=5)");
    assert_eq!(
        Triangle::new(5.0, 4.0, 3.0).unwrap().to_string(),
        "Triangle(a=3, b=4, c=5)"
    );
    let err = Circle::new(-2.0).unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: radius must be positive (got -2)");
}

#[test]
fn sampled_shapes_are_valid_and_replayable() {
    let cfg = SampleCfg::default();
    for index in 0..200 {
        let tok = ReplayToken::new(7, index);
        let t = draw_triangle(cfg, tok).unwrap();
        assert!(area(&t) > 0.0);
        assert_eq!(t, draw_triangle(cfg, tok).unwrap());
        let c = draw_circle(cfg, tok).unwrap();
        assert!(c.radius() >= cfg.len_min && c.radius() <= cfg.len_max);
    }
    let bad = SampleCfg {
        len_min: 0.0,
        ..SampleCfg::default()
    };
    assert!(draw_circle(bad, ReplayToken::new(0, 0)).is_err());
}

#[test]
fn sampler_rejects_non_finite_cfg() {
    let tok = ReplayToken::new(1, 0);
    let nan_len = SampleCfg {
        len_min: f64::NAN,
        ..SampleCfg::default()
    };
    assert!(matches!(
        draw_circle(nan_len, tok),
        Err(GeometryError::InvalidArgument(Violation::NonFinite { .. }))
    ));
    assert!(draw_triangle(nan_len, tok).unwrap_err().is_invalid_argument());
    let nan_angle = SampleCfg {
        min_angle: f64::NAN,
        ..SampleCfg::default()
    };
    assert!(draw_triangle(nan_angle, tok).unwrap_err().is_invalid_argument());
    let inf_max = SampleCfg {
        len_max: f64::INFINITY,
        ..SampleCfg::default()
    };
    assert!(draw_circle(inf_max, tok).is_err());
}

#[test]
fn extreme_scales_keep_right_angle_and_area() {
    let tiny = Triangle::new(1e-200, 1e-200, 1e-200).unwrap();
    assert!(!tiny.is_right());
    assert!(Triangle::new(3e-200, 4e-200, 5e-200).unwrap().is_right());
    let huge = Triangle::new(3e200, 4e200, 5e200).unwrap();
    assert!(huge.is_right());
    assert!(!Triangle::new(1e200, 1e200, 1e200).unwrap().is_right());

    let quarter_sqrt3 = 3f64.sqrt() / 4.0;
    let big = Triangle::new(1e154, 1e154, 1e154).unwrap();
    assert!(close(area(&big), quarter_sqrt3 * 1e308, 1e-12));
    let small = Triangle::new(1e-100, 1e-100, 1e-100).unwrap();
    let expected = quarter_sqrt3 * 1e-200;
    assert!(((area(&small) - expected) / expected).abs() < 1e-12);
}

/// Valid side triple: `c` strictly inside `(|a − b|, a + b)`.
fn valid_sides() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.1f64..10.0, 0.1f64..10.0, 0.01f64..0.99).prop_map(|(a, b, t)| {
        let lo = (a - b).abs();
        let hi = a + b;
        (a, b, lo + t * (hi - lo))
    })
}

proptest! {
    #[test]
    fn circle_area_is_pi_r_squared(r in 1e-3f64..1e3) {
        let c = Circle::new(r).unwrap();
        prop_assert!(close(area(&c), PI * r * r, 1e-12));
    }

    #[test]
    fn non_positive_radius_rejected(r in -1e3f64..=0.0) {
        prop_assert!(Circle::new(r).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn triangle_area_matches_heron_and_ignores_order((a, b, c) in valid_sides()) {
        let t = Triangle::new(a, b, c).unwrap();
        let expected = 0.25 * ((a + b + c) * (-a + b + c) * (a - b + c) * (a + b - c)).sqrt();
        prop_assert!(close(area(&t), expected, 1e-9));
        for (x, y, z) in [(a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)] {
            let p = Triangle::new(x, y, z).unwrap();
            prop_assert_eq!(p.sides(), t.sides());
            prop_assert_eq!(area(&p), area(&t));
        }
    }

    #[test]
    fn degenerate_or_broken_triangles_rejected(a in 0.1f64..10.0, b in 0.1f64..10.0, extra in 0.0f64..5.0) {
        let c = a + b + extra;
        prop_assert!(Triangle::new(a, b, c).unwrap_err().is_invalid_argument());
        prop_assert!(Triangle::new(c, a, b).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn non_positive_side_rejected(a in -10.0f64..=0.0, b in 0.1f64..10.0) {
        prop_assert!(Triangle::new(a, b, b).unwrap_err().is_invalid_argument());
    }
}
