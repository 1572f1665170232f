//! Window protocol behaviour against the mock kernel.

use liblynx::sys;
use liblynx::window::{Colour, Window, WindowSpec};
use lynx_gateway_mock::{MockKernel, MAX_WINDOWS};

fn spec<'a>(name: &'a str, width: u16, height: u16) -> WindowSpec<'a> {
    WindowSpec {
        x: 10,
        y: 10,
        width,
        height,
        name,
        colour: Colour::new(0x363636),
    }
}

#[test]
fn create_records_the_request() {
    let kernel = MockKernel::new();
    let window = Window::create(&kernel, &spec("Terminal", 500, 350), true).unwrap();

    assert_eq!(window.wid().as_raw(), 0);
    let (name, colour, repaint) = kernel.window_info(0);
    assert_eq!(name, "Terminal");
    assert_eq!(colour, 0x363636);
    assert!(repaint);
}

#[test]
fn paint_in_bounds_is_recorded_and_repeatable() {
    let kernel = MockKernel::new();
    let mut window = Window::create(&kernel, &spec("w", 100, 50), false).unwrap();

    window.paint_text("hello", 5, 20).unwrap();
    window.paint_text("hello", 5, 20).unwrap();

    let paints = kernel.paints(0);
    assert_eq!(paints.len(), 2);
    assert_eq!(paints[0].text, "hello");
    assert_eq!((paints[0].x, paints[0].y), (5, 20));
    assert_eq!(paints[0], paints[1]);
}

#[test]
fn paint_out_of_bounds_is_rejected() {
    let kernel = MockKernel::new();
    let mut window = Window::create(&kernel, &spec("w", 100, 50), false).unwrap();

    assert!(window.paint_text("off the edge", 100, 20).is_err());
    assert!(window.paint_text("off the bottom", 5, 50).is_err());
    assert!(kernel.paints(0).is_empty());
}

#[test]
fn invalid_wid_fails_without_touching_state() {
    let kernel = MockKernel::new();
    Window::create(&kernel, &spec("w", 100, 50), false).unwrap();

    let text = b"stray\0";
    let status = sys::window::paint_string(&kernel, text.as_ptr(), usize::MAX, 5, 20);
    assert!(status < 0);
    assert!(kernel.paints(0).is_empty());
}

#[test]
fn blit_requires_exact_pixel_count() {
    let kernel = MockKernel::new();
    let mut window = Window::create(&kernel, &spec("w", 4, 2), false).unwrap();

    assert!(window.blit(&[0xff0000; 7]).is_err());

    window.blit(&[0x00ff00; 8]).unwrap();
    assert_eq!(kernel.pixels(0), vec![0x00ff00; 8]);
}

#[test]
fn zero_sized_geometry_is_rejected() {
    let kernel = MockKernel::new();
    assert!(Window::create(&kernel, &spec("w", 0, 50), false).is_err());
    assert!(Window::create(&kernel, &spec("w", 50, 0), false).is_err());
    assert_eq!(kernel.window_count(), 0);
}

#[test]
fn window_slots_are_finite() {
    let kernel = MockKernel::new();
    for _ in 0..MAX_WINDOWS {
        Window::create(&kernel, &spec("w", 10, 10), false).unwrap();
    }
    assert!(Window::create(&kernel, &spec("w", 10, 10), false).is_err());
}
