use super::*;
use crate::draw::{
    Shape,
    color::{BLUE, GREEN, RED, WHITE},
};
use crate::input::{DrawingSettings, MouseButton, SurfaceEvent, Tool};

fn create_test_input_state(tool: Tool) -> InputState {
    InputState::new(DrawingSettings {
        color: RED,
        thickness: 3,
        tool,
        ..DrawingSettings::default()
    })
}

fn committed(state: &mut InputState) -> Vec<Shape> {
    state
        .take_events()
        .into_iter()
        .filter_map(|event| match event {
            SurfaceEvent::ShapeCommitted(shape) => Some(shape),
            _ => None,
        })
        .collect()
}

fn drag(state: &mut InputState, from: (i32, i32), to: (i32, i32)) {
    state.on_mouse_press(MouseButton::Left, from.0, from.1);
    state.on_mouse_motion(to.0, to.1);
    state.on_mouse_release(MouseButton::Left, to.0, to.1);
}

fn click(state: &mut InputState, x: i32, y: i32) {
    state.on_mouse_press(MouseButton::Left, x, y);
    state.on_mouse_release(MouseButton::Left, x, y);
}

#[test]
fn test_pen_path_is_anchor_plus_moves() {
    let mut state = create_test_input_state(Tool::Pen);
    let moves = [(11, 10), (12, 14), (12, 14), (20, 3), (25, 30)];

    state.on_mouse_press(MouseButton::Left, 10, 10);
    for &(x, y) in &moves {
        state.on_mouse_motion(x, y);
    }
    // Release point differs from the last move and must not be appended
    state.on_mouse_release(MouseButton::Left, 99, 99);

    let shapes = committed(&mut state);
    assert_eq!(shapes.len(), 1);
    let Shape::Freehand { points, color, thick } = &shapes[0] else {
        panic!("expected freehand, got {:?}", shapes[0]);
    };
    let mut expected = vec![(10, 10)];
    expected.extend_from_slice(&moves);
    assert_eq!(points, &expected);
    assert_eq!(*color, RED);
    assert_eq!(*thick, 3);
    assert_eq!(state.state, DrawingState::Idle);
}

#[test]
fn test_pen_click_without_moves_commits_single_point() {
    let mut state = create_test_input_state(Tool::Pen);
    click(&mut state, 4, 5);

    let shapes = committed(&mut state);
    assert_eq!(
        shapes,
        vec![Shape::Freehand {
            points: vec![(4, 5)],
            color: RED,
            thick: 3,
        }]
    );
}

#[test]
fn test_rectangle_is_normalized_in_every_drag_direction() {
    let corners = [
        ((10, 20), (60, 90)),
        ((60, 90), (10, 20)),
        ((60, 20), (10, 90)),
        ((10, 90), (60, 20)),
    ];

    for (from, to) in corners {
        let mut state = create_test_input_state(Tool::Rectangle);
        drag(&mut state, from, to);
        let shapes = committed(&mut state);
        assert_eq!(
            shapes,
            vec![Shape::Rect {
                x: 10,
                y: 20,
                w: 50,
                h: 70,
                color: RED,
                thick: 3,
            }],
            "drag {from:?} -> {to:?}"
        );
    }
}

#[test]
fn test_circle_uses_normalized_bounding_box() {
    let mut state = create_test_input_state(Tool::Circle);
    drag(&mut state, (100, 80), (40, 20));

    let shapes = committed(&mut state);
    assert_eq!(
        shapes,
        vec![Shape::Ellipse {
            x: 40,
            y: 20,
            w: 60,
            h: 60,
            color: RED,
            thick: 3,
        }]
    );
}

#[test]
fn test_line_keeps_drag_direction() {
    let mut state = create_test_input_state(Tool::Line);
    state.on_mouse_press(MouseButton::Left, 50, 50);
    state.on_mouse_motion(30, 40);
    state.on_mouse_motion(10, 5);
    state.on_mouse_release(MouseButton::Left, 10, 5);

    let shapes = committed(&mut state);
    assert_eq!(
        shapes,
        vec![Shape::Line {
            x1: 50,
            y1: 50,
            x2: 10,
            y2: 5,
            color: RED,
            thick: 3,
        }]
    );
}

#[test]
fn test_degenerate_shapes_are_still_committed() {
    let mut state = create_test_input_state(Tool::Line);
    click(&mut state, 7, 7);
    state.set_tool(Tool::Rectangle);
    click(&mut state, 7, 7);

    let shapes = committed(&mut state);
    assert_eq!(shapes.len(), 2);
    assert!(matches!(shapes[0], Shape::Line { x1: 7, y1: 7, x2: 7, y2: 7, .. }));
    assert!(matches!(shapes[1], Shape::Rect { w: 0, h: 0, .. }));
}

#[test]
fn test_extreme_corners_do_not_overflow() {
    for tool in [Tool::Rectangle, Tool::Circle] {
        let mut state = create_test_input_state(tool);
        state.on_mouse_press(MouseButton::Left, i32::MIN, i32::MAX);
        state.on_mouse_motion(0, 0);
        assert!(state.provisional_shape().is_some());
        state.on_mouse_release(MouseButton::Left, i32::MAX, i32::MIN);

        let shapes = committed(&mut state);
        match &shapes[..] {
            [Shape::Rect { x, y, w, h, .. }] | [Shape::Ellipse { x, y, w, h, .. }] => {
                assert_eq!((*x, *y), (i32::MIN, i32::MIN));
                assert_eq!((*w, *h), (u32::MAX, u32::MAX));
            }
            other => panic!("{tool}: unexpected {other:?}"),
        }
    }
}

#[test]
fn test_preview_follows_drag_and_is_not_committed() {
    let mut state = create_test_input_state(Tool::Rectangle);
    state.on_mouse_press(MouseButton::Left, 10, 10);
    state.on_mouse_motion(30, 40);

    assert_eq!(
        state.provisional_shape(),
        Some(Shape::Rect {
            x: 10,
            y: 10,
            w: 20,
            h: 30,
            color: RED,
            thick: 3,
        })
    );
    assert!(committed(&mut state).is_empty());

    state.on_mouse_motion(0, 0);
    assert!(matches!(
        state.provisional_shape(),
        Some(Shape::Rect { x: 0, y: 0, w: 10, h: 10, .. })
    ));
}

#[test]
fn test_preview_reflects_settings_and_commit_freezes_them() {
    let mut state = create_test_input_state(Tool::Line);
    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.on_mouse_motion(10, 10);
    state.set_color(BLUE);
    state.set_thickness(8);

    assert_eq!(state.provisional_shape().map(|s| s.color()), Some(BLUE));

    state.on_mouse_release(MouseButton::Left, 10, 10);
    state.set_color(GREEN);

    let shapes = committed(&mut state);
    assert!(matches!(shapes[0], Shape::Line { color: BLUE, thick: 8, .. }));
}

#[test]
fn test_motion_without_pending_shape_only_reports_cursor() {
    let mut state = create_test_input_state(Tool::Pen);
    state.on_mouse_motion(5, 6);
    state.on_mouse_motion(7, 8);

    assert_eq!(
        state.take_events(),
        vec![
            SurfaceEvent::CursorMoved { x: 5, y: 6 },
            SurfaceEvent::CursorMoved { x: 7, y: 8 },
        ]
    );
    assert_eq!(state.state, DrawingState::Idle);
    assert!(state.provisional_shape().is_none());
    assert_eq!(state.cursor, Some((7, 8)));
}

#[test]
fn test_press_while_dragging_is_ignored() {
    let mut state = create_test_input_state(Tool::Pen);
    state.on_mouse_press(MouseButton::Left, 1, 1);
    state.on_mouse_motion(2, 2);
    state.on_mouse_press(MouseButton::Left, 50, 50);
    state.on_mouse_release(MouseButton::Left, 2, 2);

    let shapes = committed(&mut state);
    assert!(matches!(&shapes[..], [Shape::Freehand { points, .. }] if points == &vec![(1, 1), (2, 2)]));
}

#[test]
fn test_release_without_press_is_noop() {
    let mut state = create_test_input_state(Tool::Rectangle);
    state.on_mouse_release(MouseButton::Left, 10, 10);
    state.on_mouse_release(MouseButton::Right, 10, 10);
    assert!(state.take_events().is_empty());
}

#[test]
fn test_right_click_cancels_drag() {
    let mut state = create_test_input_state(Tool::Circle);
    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.on_mouse_motion(10, 10);
    state.on_mouse_press(MouseButton::Right, 10, 10);
    state.on_mouse_release(MouseButton::Left, 10, 10);

    assert!(committed(&mut state).is_empty());
    assert!(!state.has_pending_shape());
}

#[test]
fn test_triangle_commits_on_third_click() {
    let mut state = create_test_input_state(Tool::Triangle);

    click(&mut state, 0, 0);
    assert_eq!(state.triangle, TriangleState::OneVertex { v0: (0, 0) });
    assert!(state.provisional_shape().is_none());

    click(&mut state, 40, 0);
    assert!(matches!(
        state.provisional_shape(),
        Some(Shape::Triangle { vertices: [(0, 0), (40, 0), (0, 0)], .. })
    ));

    state.on_mouse_motion(25, 30);
    assert!(matches!(
        state.provisional_shape(),
        Some(Shape::Triangle { vertices: [(0, 0), (40, 0), (25, 30)], .. })
    ));
    assert!(committed(&mut state).is_empty());

    click(&mut state, 20, 35);
    let shapes = committed(&mut state);
    assert_eq!(
        shapes,
        vec![Shape::Triangle {
            vertices: [(0, 0), (40, 0), (20, 35)],
            color: RED,
            thick: 3,
        }]
    );
    assert_eq!(state.triangle, TriangleState::Empty);
    assert!(state.provisional_shape().is_none());
}

#[test]
fn test_triangle_buffer_is_ready_for_next_triangle() {
    let mut state = create_test_input_state(Tool::Triangle);
    for &(x, y) in &[(0, 0), (1, 0), (0, 1), (5, 5), (6, 5), (5, 6)] {
        click(&mut state, x, y);
    }

    let shapes = committed(&mut state);
    assert_eq!(shapes.len(), 2);
    assert!(matches!(
        shapes[1],
        Shape::Triangle { vertices: [(5, 5), (6, 5), (5, 6)], .. }
    ));
}

#[test]
fn test_triangle_with_coincident_vertices_is_committed() {
    let mut state = create_test_input_state(Tool::Triangle);
    click(&mut state, 3, 3);
    click(&mut state, 3, 3);
    click(&mut state, 9, 1);

    let shapes = committed(&mut state);
    assert!(matches!(
        shapes[..],
        [Shape::Triangle { vertices: [(3, 3), (3, 3), (9, 1)], .. }]
    ));
}

#[test]
fn test_tool_switch_discards_partial_triangle() {
    for clicks in 1..=2 {
        let mut state = create_test_input_state(Tool::Triangle);
        for i in 0..clicks {
            click(&mut state, i * 10, 0);
        }
        assert!(state.has_pending_shape());

        state.set_tool(Tool::Pen);
        assert_eq!(state.triangle, TriangleState::Empty);
        assert!(state.provisional_shape().is_none());

        state.set_tool(Tool::Triangle);
        click(&mut state, 100, 100);
        assert!(committed(&mut state).is_empty(), "{clicks} clicks");
        assert_eq!(state.triangle, TriangleState::OneVertex { v0: (100, 100) });
    }
}

#[test]
fn test_tool_switch_mid_drag_cancels_drag() {
    let mut state = create_test_input_state(Tool::Rectangle);
    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.on_mouse_motion(20, 20);

    state.set_tool(Tool::Pen);
    assert_eq!(state.state, DrawingState::Idle);
    state.on_mouse_release(MouseButton::Left, 20, 20);

    assert!(committed(&mut state).is_empty());
}

#[test]
fn test_text_commits_on_press() {
    let mut state = create_test_input_state(Tool::Text);
    state.set_text_properties("hello", 30);
    state.on_mouse_press(MouseButton::Left, 12, 34);

    let events = state.take_events();
    assert_eq!(events[0], SurfaceEvent::Clicked { x: 12, y: 34 });
    match &events[1] {
        SurfaceEvent::ShapeCommitted(Shape::Text {
            x, y, text, size, color, ..
        }) => {
            assert_eq!((*x, *y), (12, 34));
            assert_eq!(text, "hello");
            assert_eq!(*size, 30);
            assert_eq!(*color, RED);
        }
        other => panic!("expected text commit, got {other:?}"),
    }

    state.on_mouse_release(MouseButton::Left, 12, 34);
    assert!(state.take_events().is_empty());
}

#[test]
fn test_text_with_empty_buffer_does_nothing() {
    let mut state = create_test_input_state(Tool::Text);
    click(&mut state, 1, 1);
    assert!(committed(&mut state).is_empty());
}

#[test]
fn test_font_size_is_clamped() {
    let mut state = create_test_input_state(Tool::Text);
    state.set_text_properties("x", 200);
    assert_eq!(state.settings().font_size, 72);
    state.set_text_properties("x", 1);
    assert_eq!(state.settings().font_size, 8);
}

#[test]
fn test_eraser_round_trip_restores_color() {
    let mut state = create_test_input_state(Tool::Pen);
    let original = state.settings().color;

    assert!(state.toggle_eraser());
    assert_eq!(state.settings().effective_color(), WHITE);
    assert!(!state.toggle_eraser());

    assert_eq!(state.settings().color, original);
    assert_eq!(state.settings().effective_color(), original);
}

#[test]
fn test_eraser_strokes_use_background_color() {
    let mut state = create_test_input_state(Tool::Pen);
    state.set_eraser(true);
    drag(&mut state, (0, 0), (5, 5));
    state.set_eraser(false);
    drag(&mut state, (0, 0), (5, 5));

    let shapes = committed(&mut state);
    assert_eq!(shapes[0].color(), WHITE);
    assert_eq!(shapes[1].color(), RED);
}

#[test]
fn test_color_change_during_eraser_applies_afterwards() {
    let mut state = create_test_input_state(Tool::Pen);
    state.set_eraser(true);
    state.set_hue(120);
    assert_eq!(state.settings().effective_color(), WHITE);

    state.set_eraser(false);
    assert_eq!(state.settings().effective_color(), GREEN);
}

#[test]
fn test_thickness_is_clamped() {
    let mut state = create_test_input_state(Tool::Pen);
    state.set_thickness(0);
    assert_eq!(state.settings().thickness, 1);
    state.set_thickness(25);
    assert_eq!(state.settings().thickness, 20);
}

#[test]
fn test_apply_settings_with_new_tool_cancels_pending() {
    let mut state = create_test_input_state(Tool::Triangle);
    click(&mut state, 0, 0);

    let same_tool = state.settings().clone();
    state.apply_settings(DrawingSettings {
        color: BLUE,
        ..same_tool
    });
    assert!(state.has_pending_shape());

    let other_tool = DrawingSettings {
        tool: Tool::Line,
        ..state.settings().clone()
    };
    state.apply_settings(other_tool);
    assert!(!state.has_pending_shape());
    assert_eq!(state.settings().color, BLUE);
}

#[test]
fn test_apply_settings_keeps_canvas_background() {
    let mut state = create_test_input_state(Tool::Rectangle);
    state.apply_settings(DrawingSettings {
        eraser: true,
        background: BLUE,
        ..state.settings().clone()
    });

    assert_eq!(state.settings().background, WHITE);
    assert_eq!(state.settings().effective_color(), WHITE);

    drag(&mut state, (0, 0), (4, 4));
    assert_eq!(committed(&mut state)[0].color(), WHITE);
}

#[test]
fn test_press_dispatch_per_tool() {
    for tool in [Tool::Pen, Tool::Line, Tool::Rectangle, Tool::Circle] {
        let mut state = create_test_input_state(tool);
        state.on_mouse_press(MouseButton::Left, 3, 3);
        assert!(
            matches!(state.state, DrawingState::Drawing { tool: t, .. } if t == tool),
            "{tool} should start a drag"
        );
        assert_eq!(state.take_events(), vec![SurfaceEvent::Clicked { x: 3, y: 3 }]);
    }

    let mut state = create_test_input_state(Tool::Triangle);
    state.on_mouse_press(MouseButton::Left, 3, 3);
    assert_eq!(state.state, DrawingState::Idle);
    assert!(state.has_pending_shape());

    let mut state = create_test_input_state(Tool::Text);
    state.set_text_properties("ok", 12);
    state.on_mouse_press(MouseButton::Left, 3, 3);
    assert_eq!(state.state, DrawingState::Idle);
    assert!(!state.has_pending_shape());
    assert_eq!(committed(&mut state).len(), 1);
}

#[test]
fn test_middle_button_is_ignored() {
    let mut state = create_test_input_state(Tool::Pen);
    state.on_mouse_press(MouseButton::Middle, 1, 1);
    state.on_mouse_release(MouseButton::Middle, 1, 1);
    assert!(state.take_events().is_empty());
    assert!(!state.has_pending_shape());
}
