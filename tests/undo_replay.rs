use pixel_slammer::{Canvas, CanvasEvent, Color, Controller, Point, PointerButtons, ToolKind, ToolSettings};

const B: PointerButtons = PointerButtons::PRIMARY;

fn gesture(controller: &mut Controller, settings: &ToolSettings, kind: ToolKind, a: Point, b: Point) {
    controller.select_tool(kind);
    controller.handle(CanvasEvent::Press { at: a, buttons: B }, settings);
    controller.handle(CanvasEvent::Drag { from: a, to: b, buttons: B }, settings);
    controller.handle(CanvasEvent::Release { at: b, buttons: B }, settings);
}

fn scripted() -> (Controller, ToolSettings) {
    let mut settings = ToolSettings::default();
    let mut base = Canvas::new(16, 16);
    base.set_pixel(8, 8, Color::BLACK);
    let mut controller = Controller::new(base);

    settings.colors.left = Color::RED;
    gesture(&mut controller, &settings, ToolKind::Pencil, Point::new(0, 0), Point::new(15, 3));
    settings.colors.left = Color::GREEN;
    gesture(&mut controller, &settings, ToolKind::Ellipse, Point::new(2, 2), Point::new(12, 10));
    gesture(&mut controller, &settings, ToolKind::Eraser, Point::new(0, 5), Point::new(15, 5));
    settings.colors.left = Color::BLUE;
    gesture(&mut controller, &settings, ToolKind::FloodFill, Point::new(0, 15), Point::new(0, 15));
    gesture(&mut controller, &settings, ToolKind::HollowRectangle, Point::new(4, 4), Point::new(9, 14));
    (controller, settings)
}

#[test]
fn test_replay_reproduces_live_canvas() {
    let (controller, _) = scripted();
    assert_eq!(controller.history().len(), 5);
    assert_eq!(&controller.history().replay(), controller.live());
}

#[test]
fn test_undo_then_redraw_matches_original() {
    let (mut controller, settings) = scripted();
    let original = controller.live().clone();
    assert!(controller.undo());
    assert_ne!(controller.live(), &original);
    gesture(&mut controller, &settings, ToolKind::HollowRectangle, Point::new(4, 4), Point::new(9, 14));
    assert_eq!(controller.live(), &original);
}

#[test]
fn test_preview_does_not_mutate_state() {
    let (mut controller, settings) = scripted();
    let live = controller.live().clone();
    let len = controller.history().len();

    controller.select_tool(ToolKind::Rectangle);
    controller.handle(CanvasEvent::Press { at: Point::new(1, 1), buttons: B }, &settings);
    controller.handle(
        CanvasEvent::Drag {
            from: Point::new(1, 1),
            to: Point::new(14, 14),
            buttons: B,
        },
        &settings,
    );
    assert_eq!(controller.live(), &live);
    assert_ne!(controller.display(), &live);

    // Abandoning the gesture leaves no trace.
    assert!(controller.undo());
    assert_eq!(controller.live(), &live);
    assert_eq!(controller.history().len(), len);
    assert_eq!(controller.display(), &live);
}

#[test]
fn test_undo_everything_then_empty() {
    let (mut controller, _) = scripted();
    let base = controller.history().base().clone();
    while controller.undo() {}
    assert_eq!(controller.live(), &base);
    assert!(!controller.undo());
}
