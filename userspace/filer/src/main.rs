//! Minimal file listing window.
//!
//! Paints a static file listing and then idles; a demonstration client for
//! the window protocol rather than a real file manager.

#![no_std]
#![no_main]

use liblynx::window::{Colour, Window, WindowSpec};

liblynx::main! {
    liblynx::logger::init(log::LevelFilter::Info);

    let gateway = liblynx::KernelGateway;
    let spec = WindowSpec {
        x: 700,
        y: 400,
        width: 150,
        height: 300,
        name: "File Manager",
        colour: Colour::new(0xa5b8df),
    };

    let result = Window::create(&gateway, &spec, false).and_then(|mut window| {
        window.paint_text("a.txt", 5, 20)?;
        window.paint_text("b.txt", 5, 40)?;
        Ok(())
    });
    if let Err(err) = result {
        log::error!("filer: {}", err);
        liblynx::process::exit(&gateway);
    }

    // Nothing to react to; the window stays up until the process is killed.
    loop {
        core::hint::spin_loop();
    }
}
