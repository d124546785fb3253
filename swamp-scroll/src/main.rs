use swamp_scroll::create_app;

fn main() {
    // The page owns the lifetime on the web, so the handle is never cancelled.
    let (mut app, _render_loop) = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
