//! Drag-controller simulation.
//!
//! Plays the part of the upstream controller: holds authoritative element
//! bounds, feeds cumulative pointer movement through the scaling
//! operations, and applies the returned deltas to the starting bounds.
//! Anchor edges and centerlines are then checked against the start.

use zenhandle::*;

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS
}

/// A resize gesture: bounds captured at pointer-down, cumulative diff.
struct DragSession {
    start: Bounds,
    handle: Handle,
    ratio: Option<Ratio>,
}

impl DragSession {
    fn free(start: Bounds, handle: &str) -> Self {
        Self {
            start,
            handle: handle.parse().expect("canonical handle"),
            ratio: None,
        }
    }

    fn locked(start: Bounds, handle: &str) -> Self {
        Self {
            ratio: Some(start.ratio().expect("non-degenerate start bounds")),
            ..Self::free(start, handle)
        }
    }

    /// Bounds after the pointer has moved `diff` since pointer-down.
    fn move_to(&self, diff: Vector2) -> Bounds {
        let delta = match self.ratio {
            Some(ratio) => scale_keep_ratio(self.handle, diff, ratio),
            None => scale(self.handle, diff),
        };
        self.start.apply(delta)
    }
}

fn start() -> Bounds {
    Bounds::new(40.0, 30.0, 300.0, 150.0)
}

/// Pointer path with moves in every direction, including past the anchor.
fn path() -> Vec<Vector2> {
    vec![
        Vector2::new(5.0, 3.0),
        Vector2::new(-12.0, 20.0),
        Vector2::new(-40.5, -7.25),
        Vector2::new(90.0, -60.0),
        Vector2::new(-400.0, 310.0),
    ]
}

#[test]
fn free_drag_keeps_anchor_fixed() {
    let s = start();
    for handle in Handle::ALL {
        let session = DragSession::free(s, handle.as_str());
        for diff in path() {
            let b = session.move_to(diff);
            let tag = format!("{handle} {diff:?}: {b:?}");
            match handle.vertical {
                Some(Vertical::North) => assert!(close(b.bottom(), s.bottom()), "{tag}"),
                Some(Vertical::South) => assert!(close(b.top, s.top), "{tag}"),
                None => {
                    assert_eq!(b.top, s.top, "{tag}");
                    assert_eq!(b.height, s.height, "{tag}");
                }
            }
            match handle.horizontal {
                Some(Horizontal::West) => assert!(close(b.right(), s.right()), "{tag}"),
                Some(Horizontal::East) => assert!(close(b.left, s.left), "{tag}"),
                None => {
                    assert_eq!(b.left, s.left, "{tag}");
                    assert_eq!(b.width, s.width, "{tag}");
                }
            }
        }
    }
}

#[test]
fn free_drag_moves_handle_with_pointer() {
    let s = start();
    let diff = Vector2::new(17.0, -9.0);
    let b = DragSession::free(s, "south-east").move_to(diff);
    assert_eq!(b.right(), s.right() + diff.x);
    assert_eq!(b.bottom(), s.bottom() + diff.y);

    let b = DragSession::free(s, "north-west").move_to(diff);
    assert_eq!(b.left, s.left + diff.x);
    assert_eq!(b.top, s.top + diff.y);
}

#[test]
fn locked_corner_drag_keeps_anchor_corner() {
    let s = start();
    for handle in Handle::ALL.into_iter().filter(Handle::is_corner) {
        let session = DragSession::locked(s, handle.as_str());
        let anchor = handle.opposite();
        for diff in path() {
            let b = session.move_to(diff);
            let tag = format!("{handle} {diff:?}: {b:?}");
            match anchor.vertical {
                Some(Vertical::South) => assert!(close(b.bottom(), s.bottom()), "{tag}"),
                _ => assert!(close(b.top, s.top), "{tag}"),
            }
            match anchor.horizontal {
                Some(Horizontal::East) => assert!(close(b.right(), s.right()), "{tag}"),
                _ => assert!(close(b.left, s.left), "{tag}"),
            }
        }
    }
}

#[test]
fn locked_corner_drag_follows_diagonal_slope() {
    let s = start();
    let ratio = s.ratio().unwrap().get();
    for handle in Handle::ALL.into_iter().filter(Handle::is_corner) {
        let session = DragSession::locked(s, handle.as_str());
        for diff in path() {
            let b = session.move_to(diff);
            let dw = b.width - s.width;
            let dh = b.height - s.height;
            assert!(close(dh, dw * ratio), "{handle} {diff:?}: dw={dw} dh={dh}");
        }
    }
}

#[test]
fn locked_edge_drag_keeps_perpendicular_centerline() {
    let s = start();
    let center_x = s.left + s.width / 2.0;
    let center_y = s.top + s.height / 2.0;
    for handle in Handle::ALL.into_iter().filter(Handle::is_edge) {
        let session = DragSession::locked(s, handle.as_str());
        for diff in path() {
            let b = session.move_to(diff);
            let tag = format!("{handle} {diff:?}: {b:?}");
            if handle.vertical.is_some() {
                assert!(close(b.left + b.width / 2.0, center_x), "{tag}");
            } else {
                assert!(close(b.top + b.height / 2.0, center_y), "{tag}");
            }
            // The dragged edge's opposite stays put.
            match handle.opposite() {
                Handle::SOUTH => assert!(close(b.bottom(), s.bottom()), "{tag}"),
                Handle::NORTH => assert!(close(b.top, s.top), "{tag}"),
                Handle::EAST => assert!(close(b.right(), s.right()), "{tag}"),
                Handle::WEST => assert!(close(b.left, s.left), "{tag}"),
                other => panic!("edge opposite is not an edge: {other}"),
            }
        }
    }
}

#[test]
fn incremental_moves_sum_to_cumulative_move() {
    let ratio = Ratio::new(1.75).unwrap();
    for handle in Handle::ALL {
        let mut free = ScaleResult::ZERO;
        let mut locked = ScaleResult::ZERO;
        let mut total = Vector2::ZERO;
        for step in path() {
            free += scale(handle, step);
            locked += scale_keep_ratio(handle, step, ratio);
            total = total + step;
        }
        assert!(free.approx_eq(&scale(handle, total), EPS), "{handle}");
        assert!(
            locked.approx_eq(&scale_keep_ratio(handle, total, ratio), 1e-6),
            "{handle}"
        );
    }
}

#[test]
fn malformed_handle_token_resizes_nothing() {
    let s = start();
    let handle = Handle::from_token("middle");
    assert_eq!(s.apply(scale(handle, Vector2::new(10.0, 10.0))), s);
    assert!("middle".parse::<Handle>().is_err());
}

#[test]
fn degenerate_start_bounds_rejected_at_boundary() {
    let flat = Bounds::new(0.0, 0.0, 120.0, 0.0);
    assert_eq!(flat.ratio(), Err(HandleError::InvalidRatio));
}
