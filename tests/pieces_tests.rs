//! Piece tests - shape catalog, rotation, drawing through a surface

use falling_blocks::core::render::{DrawOp, Recorder};
use falling_blocks::core::{get_shape, Paint, Piece, PieceRng};
use falling_blocks::types::{PieceColor, PieceKind, PREVIEW_SIZE};

fn cells(piece: &Piece) -> Vec<(i8, i8)> {
    piece.cells().map(|(x, y, _)| (x, y)).collect()
}

#[test]
fn test_catalog_fits_preview() {
    for kind in PieceKind::ALL {
        let shape = get_shape(kind);
        assert!(shape.size() <= PREVIEW_SIZE);
        assert_eq!(shape.filled().count(), 4);
    }
    assert_eq!(get_shape(PieceKind::I).size(), 4);
    assert_eq!(get_shape(PieceKind::O).size(), 2);
    assert_eq!(get_shape(PieceKind::T).size(), 3);
}

#[test]
fn test_spawn_positions_are_absolute() {
    assert_eq!(
        cells(&Piece::new(PieceKind::T)),
        vec![(4, 0), (3, 1), (4, 1), (5, 1)]
    );
    assert_eq!(
        cells(&Piece::new(PieceKind::I)),
        vec![(3, 0), (4, 0), (5, 0), (6, 0)]
    );
    assert_eq!(
        cells(&Piece::new(PieceKind::O)),
        vec![(4, 0), (5, 0), (4, 1), (5, 1)]
    );
}

#[test]
fn test_s_and_z_rotate_clockwise() {
    let s = Piece::new(PieceKind::S).rotated();
    // .5.      x = 3 + 1, 3 + 1, 3 + 2, 3 + 2
    // .55
    // ..5
    assert_eq!(cells(&s), vec![(4, 0), (4, 1), (5, 1), (5, 2)]);

    let z = Piece::new(PieceKind::Z).rotated();
    // ..7
    // .77
    // .7.
    assert_eq!(cells(&z), vec![(5, 0), (4, 1), (5, 1), (4, 2)]);
}

#[test]
fn test_rotation_keeps_type_id() {
    for kind in PieceKind::ALL {
        let turned = Piece::new(kind).rotated().rotated();
        assert!(turned.cells().all(|(_, _, v)| v == kind.type_id()));
    }
}

#[test]
fn test_set_starting_position_after_moves() {
    let mut piece = Piece::new(PieceKind::L).shifted(-3, 12);
    piece.set_starting_position();
    assert_eq!((piece.x, piece.y), (3, 0));
}

#[test]
fn test_spawn_uses_rng() {
    let mut a = PieceRng::new(5);
    let mut b = PieceRng::new(5);
    for _ in 0..20 {
        assert_eq!(Piece::spawn(&mut a), Piece::spawn(&mut b));
    }
}

#[test]
fn test_draw_emits_one_fill_per_cell() {
    let piece = Piece::new(PieceKind::Z).shifted(0, 2);
    let mut rec = Recorder::new();
    piece.draw(&mut rec, 0, 0);

    assert_eq!(rec.ops.len(), 4);
    assert_eq!(
        rec.ops[0],
        DrawOp::Fill {
            x: 3,
            y: 2,
            color: PieceColor::Red,
            paint: Paint::Solid
        }
    );
}
